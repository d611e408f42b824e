//! Checkout module.
//!
//! Contains orders and order placement.

mod order;
mod placement;

pub use order::{Order, OrderLineItem, OrderStatus};
pub use placement::place_order;
