//! Catalog filters.

use crate::catalog::{Category, CategoryFilter, Product};
use crate::search::CatalogQuery;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Products the shopper can see for `query`, in catalog order.
///
/// A product is visible when its category passes the selector, it passes
/// the availability rule, and (for a non-blank query) the query is a
/// substring of its searchable text. With `hide_out_of_stock` the
/// availability rule is `stock > 0`; otherwise it is `is_available`.
pub fn filter_catalog<'a>(products: &'a [Product], query: &CatalogQuery) -> Vec<&'a Product> {
    let needle = query.needle();
    products
        .iter()
        .filter(|product| query.category.matches(product.category))
        .filter(|product| {
            if query.hide_out_of_stock {
                product.stock > 0
            } else {
                product.is_available
            }
        })
        .filter(|product| match &needle {
            Some(needle) => product.searchable_text().contains(needle.as_str()),
            None => true,
        })
        .collect()
}

/// The admin product table filter: name or category contains `text`.
///
/// No availability rule applies; admins see everything.
pub fn admin_search<'a>(
    products: &'a [Product],
    text: &str,
    category: CategoryFilter,
) -> Vec<&'a Product> {
    let needle = text.trim().to_lowercase();
    products
        .iter()
        .filter(|product| category.matches(product.category))
        .filter(|product| {
            needle.is_empty()
                || product.name.to_lowercase().contains(&needle)
                || product.category.as_str().contains(&needle)
        })
        .collect()
}

/// Per-category product counts for the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts {
    /// Count behind the "all" entry.
    pub all: usize,
    /// Count for every category, including empty ones.
    pub by_category: BTreeMap<Category, usize>,
}

impl CategoryCounts {
    pub fn get(&self, filter: CategoryFilter) -> usize {
        match filter {
            CategoryFilter::All => self.all,
            CategoryFilter::Only(category) => {
                self.by_category.get(&category).copied().unwrap_or(0)
            }
        }
    }
}

/// Count products per category.
pub fn category_counts(products: &[Product]) -> CategoryCounts {
    let mut by_category: BTreeMap<Category, usize> =
        Category::ALL.into_iter().map(|c| (c, 0)).collect();
    for product in products {
        *by_category.entry(product.category).or_insert(0) += 1;
    }
    CategoryCounts {
        all: products.len(),
        by_category,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_catalog;

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn test_default_query_hides_unavailable() {
        let products = sample_catalog();
        let visible = filter_catalog(&products, &CatalogQuery::new());
        assert_eq!(ids(&visible), vec!["1", "2", "3", "4", "5", "7", "8"]);
    }

    #[test]
    fn test_pearl_matches_only_earrings() {
        let products = sample_catalog();
        let visible = filter_catalog(&products, &CatalogQuery::new().text("pearl"));
        assert_eq!(ids(&visible), vec!["1"]);
    }

    #[test]
    fn test_search_is_case_insensitive_and_covers_colors() {
        let products = sample_catalog();
        let visible = filter_catalog(&products, &CatalogQuery::new().text("LAVENDER"));
        // The headband also comes in lavender but is unavailable.
        assert_eq!(ids(&visible), vec!["4"]);
    }

    #[test]
    fn test_category_filter() {
        let products = sample_catalog();
        let visible = filter_catalog(&products, &CatalogQuery::new().only(Category::HairClips));
        assert_eq!(ids(&visible), vec!["2", "8"]);

        let none = filter_catalog(&products, &CatalogQuery::new().only(Category::Rings));
        assert!(none.is_empty());
    }

    #[test]
    fn test_hide_out_of_stock_uses_stock_not_flag() {
        let mut products = sample_catalog();
        // Available but empty: only hidden when hiding out-of-stock.
        products[1].stock = 0;
        // Unavailable but stocked: shown only when hiding out-of-stock.
        products[5].stock = 4;

        let default_view = ids(&filter_catalog(&products, &CatalogQuery::new()));
        assert!(default_view.contains(&"2".to_string()));
        assert!(!default_view.contains(&"6".to_string()));

        let hiding = ids(&filter_catalog(
            &products,
            &CatalogQuery::new().hide_out_of_stock(true),
        ));
        assert!(!hiding.contains(&"2".to_string()));
        assert!(hiding.contains(&"6".to_string()));
    }

    #[test]
    fn test_admin_search_ignores_availability() {
        let products = sample_catalog();
        let found = admin_search(&products, "headband", CategoryFilter::All);
        assert_eq!(ids(&found), vec!["6"]);

        let by_category = admin_search(&products, "hair", CategoryFilter::All);
        assert_eq!(ids(&by_category), vec!["2", "4", "6", "8"]);
    }

    #[test]
    fn test_category_counts() {
        let products = sample_catalog();
        let counts = category_counts(&products);
        assert_eq!(counts.all, 8);
        assert_eq!(counts.get(CategoryFilter::Only(Category::Earrings)), 2);
        assert_eq!(counts.get(CategoryFilter::Only(Category::HairAccessories)), 2);
        assert_eq!(counts.get(CategoryFilter::Only(Category::Rings)), 0);
    }
}
