//! Search module.
//!
//! Shopper catalog filtering, the admin product search and sidebar counts.

mod filter;
mod query;

pub use filter::{admin_search, category_counts, filter_catalog, CategoryCounts};
pub use query::CatalogQuery;
