//! Product catalog module.
//!
//! Contains products, categories, stock classification, markdowns and
//! new-arrival promotions, plus the demo seed catalog.

mod category;
mod inventory;
mod markdown;
mod new_arrival;
mod product;
mod seed;

pub use category::{Category, CategoryFilter};
pub use inventory::{classify_stock, InventoryReport, LowStockAlert, StockStatus};
pub use markdown::{validate_percentage, DiscountStats, ProductDiscount};
pub use new_arrival::{
    mark_recent_new_arrivals, remove_expired_new_arrivals, NewArrivalWindow,
    DEFAULT_PROMOTION_DAYS, RECENT_PRODUCT_DAYS,
};
pub use product::Product;
pub use seed::sample_catalog;
