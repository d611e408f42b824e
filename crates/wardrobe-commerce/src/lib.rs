//! Storefront domain types and rules for Wardrobe.
//!
//! This crate holds everything the storefront computes without owning state:
//!
//! - **Catalog**: Products, categories, stock classification, markdowns, new arrivals
//! - **Search**: Shopper filtering, admin search, category counts
//! - **Cart**: Cart lines, checkout pricing, discount codes
//! - **Checkout**: Orders and order placement
//! - **Wishlist** and **Settings**
//!
//! # Example
//!
//! ```rust
//! use wardrobe_commerce::prelude::*;
//!
//! let products = sample_catalog();
//! let visible = filter_catalog(&products, &CatalogQuery::new().text("pearl"));
//! assert_eq!(visible.len(), 1);
//!
//! let mut cart = Cart::new();
//! cart.add(visible[0], 2).unwrap();
//! let quote = CheckoutQuote::for_cart(&cart, Currency::INR, 18.0).unwrap();
//! println!("Total: {}", quote.grand_total);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod search;
pub mod settings;
pub mod wishlist;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        classify_stock, sample_catalog, Category, CategoryFilter, DiscountStats, InventoryReport,
        NewArrivalWindow, Product, ProductDiscount, StockStatus,
    };

    // Search
    pub use crate::search::{admin_search, category_counts, filter_catalog, CatalogQuery};

    // Cart
    pub use crate::cart::{
        Cart, CartItem, CheckoutQuote, DiscountCode, DiscountCodeBook, DiscountCodeDraft,
        DiscountKind, DiscountPreview, DiscountValue,
    };

    // Checkout
    pub use crate::checkout::{place_order, Order, OrderLineItem, OrderStatus};

    pub use crate::settings::AdminSettings;
    pub use crate::wishlist::Wishlist;
}
