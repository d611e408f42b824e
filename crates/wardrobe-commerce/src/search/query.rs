//! Catalog query builder.

use crate::catalog::{Category, CategoryFilter};
use serde::{Deserialize, Serialize};

/// What the shopper is currently looking for.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CatalogQuery {
    /// Free-text search, matched case-insensitively.
    #[serde(default)]
    pub text: String,
    /// Sidebar category selection.
    #[serde(default)]
    pub category: CategoryFilter,
    /// Hide anything without stock instead of hiding unavailable products.
    #[serde(default)]
    pub hide_out_of_stock: bool,
}

impl CatalogQuery {
    /// Create an empty query that shows every available product.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    pub fn only(self, category: Category) -> Self {
        self.category(CategoryFilter::Only(category))
    }

    pub fn hide_out_of_stock(mut self, hide: bool) -> Self {
        self.hide_out_of_stock = hide;
        self
    }

    /// The lowercased search needle, or `None` when the query is blank.
    pub fn needle(&self) -> Option<String> {
        let trimmed = self.text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_query_has_no_needle() {
        assert_eq!(CatalogQuery::new().text("   ").needle(), None);
        assert_eq!(
            CatalogQuery::new().text("  Pearl ").needle(),
            Some("pearl".to_string())
        );
    }
}
