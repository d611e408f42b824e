//! Admin operations: product management, markdowns, discount codes, new
//! arrivals, settings and reports.
//!
//! Every mutation here requires an admin session. Reports and searches are
//! read-only and open to any caller.

use crate::error::StoreResult;
use crate::storefront::Storefront;
use std::collections::BTreeSet;
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};
use wardrobe_commerce::cart::{DiscountCode, DiscountCodeDraft};
use wardrobe_commerce::catalog::{
    mark_recent_new_arrivals, remove_expired_new_arrivals, validate_percentage, CategoryFilter,
    DiscountStats, InventoryReport, Product, ProductDiscount,
};
use wardrobe_commerce::ids::{DiscountCodeId, ProductId};
use wardrobe_commerce::search::admin_search;
use wardrobe_commerce::settings::AdminSettings;
use wardrobe_commerce::CommerceError;

impl Storefront {
    // Products

    /// Add a product under a fresh id. Returns the id.
    pub fn add_product(&mut self, mut product: Product) -> StoreResult<ProductId> {
        self.require_admin()?;
        product.validate()?;
        product.id = ProductId::generate();
        product.created_at = self.now();
        let id = product.id.clone();
        info!(product_id = %id, name = %product.name, "Product added");
        self.products.push(product);
        Ok(id)
    }

    /// Replace a product's fields, keeping its id and creation time.
    ///
    /// A cart line above the new stock is shrunk to fit.
    pub fn update_product(&mut self, id: &ProductId, mut product: Product) -> StoreResult<()> {
        self.require_admin()?;
        let index = self.product_index(id)?;
        product.validate()?;
        product.id = id.clone();
        product.created_at = self.products[index].created_at;

        if let Some(quantity) = self.cart.clamp_to_stock(&product) {
            warn!(product_id = %id, quantity, "Cart line reduced to new stock");
        }
        self.products[index] = product;
        info!(product_id = %id, "Product updated");
        Ok(())
    }

    /// Delete a product and its cart line.
    pub fn delete_product(&mut self, id: &ProductId) -> StoreResult<Product> {
        self.require_admin()?;
        let index = self.product_index(id)?;
        let removed = self.products.remove(index);
        self.cart.remove(id);
        info!(product_id = %id, name = %removed.name, "Product deleted");
        Ok(removed)
    }

    /// The admin product table filter.
    pub fn admin_search(&self, text: &str, category: CategoryFilter) -> Vec<&Product> {
        admin_search(&self.products, text, category)
    }

    // Markdowns

    /// Mark down every selected product by the same percentage.
    ///
    /// All ids are checked before any price changes. A repeated id is
    /// marked down once.
    pub fn apply_discount(
        &mut self,
        ids: &[ProductId],
        discount: ProductDiscount,
    ) -> StoreResult<()> {
        self.require_admin()?;
        if ids.is_empty() {
            return Err(CommerceError::InvalidDiscount("no products selected".to_string()).into());
        }
        validate_percentage(discount.percentage)?;
        let indices = ids
            .iter()
            .map(|id| self.product_index(id))
            .collect::<Result<BTreeSet<_>, _>>()?;

        for &index in &indices {
            self.products[index].apply_discount(discount.clone())?;
        }
        info!(
            products = indices.len(),
            percentage = discount.percentage,
            "Discount applied"
        );
        Ok(())
    }

    /// Restore a product's original price.
    pub fn remove_discount(&mut self, id: &ProductId) -> StoreResult<()> {
        self.require_admin()?;
        let index = self.product_index(id)?;
        self.products[index].remove_discount();
        info!(product_id = %id, "Discount removed");
        Ok(())
    }

    pub fn discount_stats(&self) -> DiscountStats {
        DiscountStats::from_products(&self.products)
    }

    // Discount codes

    pub fn create_discount_code(&mut self, draft: DiscountCodeDraft) -> StoreResult<&DiscountCode> {
        self.require_admin()?;
        let now = self.now();
        match self.discount_codes.create(draft, now) {
            Ok(code) => {
                info!(code = %code.code, kind = code.kind().as_str(), "Discount code created");
                Ok(code)
            }
            Err(e) => {
                warn!(error = %e, "Discount code rejected");
                Err(e.into())
            }
        }
    }

    /// Flip a code's active flag. Returns the new state.
    pub fn toggle_discount_code(&mut self, id: &DiscountCodeId) -> StoreResult<bool> {
        self.require_admin()?;
        let active = self.discount_codes.toggle_active(id)?;
        info!(code_id = %id, active, "Discount code toggled");
        Ok(active)
    }

    pub fn delete_discount_code(&mut self, id: &DiscountCodeId) -> StoreResult<DiscountCode> {
        self.require_admin()?;
        let removed = self.discount_codes.delete(id)?;
        info!(code = %removed.code, "Discount code deleted");
        Ok(removed)
    }

    // New arrivals

    /// Flag or unflag a product as new, starting now.
    pub fn toggle_new_arrival(
        &mut self,
        id: &ProductId,
        is_new: bool,
        ends_at: Option<DateTime<Utc>>,
    ) -> StoreResult<()> {
        self.require_admin()?;
        let index = self.product_index(id)?;
        let now = self.now();
        self.products[index].set_new_arrival(is_new, ends_at, now);
        info!(product_id = %id, is_new, "New arrival toggled");
        Ok(())
    }

    /// Flag every product added in the last week. Returns how many changed.
    pub fn mark_recent_new_arrivals(
        &mut self,
        starts_at: Option<DateTime<Utc>>,
        ends_at: Option<DateTime<Utc>>,
    ) -> StoreResult<usize> {
        self.require_admin()?;
        let now = self.now();
        let marked =
            mark_recent_new_arrivals(&mut self.products, starts_at.unwrap_or(now), ends_at, now);
        info!(marked, "Recent products marked as new arrivals");
        Ok(marked)
    }

    /// Clear new-arrival flags whose window has ended. Returns how many changed.
    pub fn remove_expired_new_arrivals(&mut self) -> StoreResult<usize> {
        self.require_admin()?;
        let now = self.now();
        let cleared = remove_expired_new_arrivals(&mut self.products, now);
        info!(cleared, "Expired new arrivals cleared");
        Ok(cleared)
    }

    // Settings and reports

    /// Replace the store settings. The currency cannot change once the
    /// catalog, codes and cart are priced in it.
    pub fn update_settings(&mut self, settings: AdminSettings) -> StoreResult<()> {
        self.require_admin()?;
        settings.validate()?;
        if settings.currency != self.settings.currency {
            warn!(
                current = self.settings.currency.code(),
                requested = settings.currency.code(),
                "Currency change rejected"
            );
            return Err(CommerceError::CurrencyMismatch {
                expected: self.settings.currency.code().to_string(),
                got: settings.currency.code().to_string(),
            }
            .into());
        }
        info!(
            low_stock_threshold = settings.low_stock_threshold,
            hide_out_of_stock = settings.enable_out_of_stock_hiding,
            "Settings updated"
        );
        self.settings = settings;
        Ok(())
    }

    /// Inventory summary under the current settings.
    pub fn inventory_report(&self) -> StoreResult<InventoryReport> {
        let report = InventoryReport::from_products(
            &self.products,
            self.settings.low_stock_threshold,
            self.settings.enable_low_stock_alerts,
        )?;
        debug!(
            low_stock = report.low_stock_count,
            out_of_stock = report.out_of_stock_count,
            "Inventory report built"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StoreError;
    use wardrobe_auth::AuthError;
    use wardrobe_commerce::catalog::Category;
    use wardrobe_commerce::money::{Currency, Money};

    fn admin_store() -> Storefront {
        let mut store = Storefront::new();
        store.admin_sign_in("admin", "admin123").unwrap();
        store
    }

    #[test]
    fn test_mutations_require_admin() {
        let mut store = Storefront::new();
        let result = store.remove_discount(&ProductId::new("1"));
        assert_eq!(result, Err(StoreError::Auth(AuthError::AdminRequired)));
        assert!(store
            .update_settings(AdminSettings::default())
            .unwrap_err()
            .is_auth_error());
    }

    #[test]
    fn test_add_product_assigns_fresh_id() {
        let mut store = admin_store();
        let product = Product::new("Opal Ring", Money::from_major(1299, Currency::INR), Category::Rings)
            .with_id("1")
            .with_stock(4);
        let id = store.add_product(product).unwrap();
        assert_ne!(id.as_str(), "1");
        assert_eq!(store.products().len(), 9);
    }

    #[test]
    fn test_add_product_rejects_price_above_original() {
        let mut store = admin_store();
        let product = Product::new("Opal Ring", Money::from_major(1299, Currency::INR), Category::Rings)
            .with_original_price(Money::from_major(999, Currency::INR));
        assert!(store.add_product(product).is_err());
        assert_eq!(store.products().len(), 8);
    }

    #[test]
    fn test_delete_product_drops_cart_line() {
        let mut store = admin_store();
        store.add_to_cart(&ProductId::new("3"), 2).unwrap();
        store.delete_product(&ProductId::new("3")).unwrap();
        assert!(store.cart().is_empty());
        assert!(store.product(&ProductId::new("3")).is_none());
    }

    #[test]
    fn test_update_product_shrinks_cart_line() {
        let mut store = admin_store();
        let id = ProductId::new("1");
        store.add_to_cart(&id, 10).unwrap();
        let edited = store.product(&id).unwrap().clone().with_stock(4);
        store.update_product(&id, edited).unwrap();
        assert_eq!(store.cart().quantity_of(&id), 4);
    }

    #[test]
    fn test_apply_discount_rejects_empty_selection() {
        let mut store = admin_store();
        let err = store.apply_discount(&[], ProductDiscount::new(10.0)).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Commerce(CommerceError::InvalidDiscount(_))
        ));
    }

    #[test]
    fn test_apply_discount_unknown_id_changes_nothing() {
        let mut store = admin_store();
        let before = store.products().to_vec();
        let ids = [ProductId::new("2"), ProductId::new("404")];
        assert!(store.apply_discount(&ids, ProductDiscount::new(10.0)).is_err());
        assert_eq!(store.products(), before.as_slice());
    }

    #[test]
    fn test_apply_discount_repeated_id_once() {
        let mut store = admin_store();
        let id = ProductId::new("2");
        store
            .apply_discount(&[id.clone(), id.clone()], ProductDiscount::new(20.0))
            .unwrap();
        let product = store.product(&id).unwrap();
        assert_eq!(product.original_price, Some(Money::from_decimal(999.99, Currency::INR)));
        assert_eq!(product.price, Money::from_major(800, Currency::INR));
    }

    #[test]
    fn test_update_settings_keeps_currency() {
        let mut store = admin_store();
        store.sign_in("a@b.c", "pw").unwrap();
        store.add_to_cart(&ProductId::new("1"), 1).unwrap();

        let usd = AdminSettings {
            currency: Currency::USD,
            ..AdminSettings::default()
        };
        assert!(matches!(
            store.update_settings(usd),
            Err(StoreError::Commerce(CommerceError::CurrencyMismatch { .. }))
        ));
        assert_eq!(store.settings().currency, Currency::INR);

        let renamed = AdminSettings {
            store_name: "Sister Studio".to_string(),
            ..AdminSettings::default()
        };
        store.update_settings(renamed).unwrap();
        assert_eq!(store.settings().store_name, "Sister Studio");
        assert!(store.place_order().is_ok());
    }

    #[test]
    fn test_discount_code_lifecycle() {
        let mut store = admin_store();
        let id = store
            .create_discount_code(DiscountCodeDraft::new(
                "welcome10",
                wardrobe_commerce::cart::DiscountValue::Percentage(10.0),
            ))
            .unwrap()
            .id
            .clone();
        assert_eq!(store.discount_codes().len(), 3);
        assert!(!store.toggle_discount_code(&id).unwrap());
        store.delete_discount_code(&id).unwrap();
        assert_eq!(store.discount_codes().len(), 2);
    }

    #[test]
    fn test_inventory_report_on_seed() {
        let store = Storefront::new();
        let report = store.inventory_report().unwrap();
        assert_eq!(report.total_products, 8);
        assert_eq!(report.out_of_stock_count, 1);
        assert_eq!(report.low_stock_count, 1);
        assert_eq!(report.alerts[0].name, "Silk Hair Scrunchies");
    }
}
