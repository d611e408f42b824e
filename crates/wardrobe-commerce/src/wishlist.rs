//! Wishlist of product ids.

use crate::catalog::Product;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A set of saved product ids.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Wishlist {
    ids: HashSet<ProductId>,
}

impl Wishlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the id if absent, remove it if present. Returns whether it is now saved.
    pub fn toggle(&mut self, id: &ProductId) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.clone());
            true
        }
    }

    /// Remove an id; removing something absent is a no-op.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        self.ids.remove(id)
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Saved products in catalog order. Ids with no product are skipped.
    pub fn products<'a>(&self, catalog: &'a [Product]) -> Vec<&'a Product> {
        catalog.iter().filter(|p| self.ids.contains(&p.id)).collect()
    }
}
