//! The Wardrobe storefront controller.
//!
//! [`Storefront`] owns the catalog, cart, wishlist, order history, discount
//! codes, settings, and the customer and admin sessions. Customer
//! operations live in `customer`, admin operations in `admin`.
//!
//! ```rust
//! use wardrobe_store::Storefront;
//! use wardrobe_commerce::ids::ProductId;
//!
//! let mut store = Storefront::new();
//! store.sign_in("asha@example.com", "secret").unwrap();
//! store.add_to_cart(&ProductId::new("1"), 2).unwrap();
//! let order = store.place_order().unwrap();
//! assert_eq!(order.item_count(), 2);
//! ```

mod admin;
mod clock;
mod customer;
mod error;
mod storefront;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{StoreError, StoreResult};
pub use storefront::Storefront;
