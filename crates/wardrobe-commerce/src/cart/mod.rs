//! Shopping cart module.
//!
//! Contains the cart, checkout pricing, and discount codes.

mod cart;
mod discount;
mod pricing;

pub use cart::{Cart, CartItem};
pub use discount::{
    DiscountCode, DiscountCodeBook, DiscountCodeDraft, DiscountKind, DiscountValue,
    DEFAULT_CODE_VALIDITY_DAYS, DEFAULT_USAGE_LIMIT,
};
pub use pricing::{CheckoutQuote, DiscountPreview};
