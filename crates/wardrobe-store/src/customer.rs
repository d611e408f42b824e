//! Shopper-facing operations: browsing, cart, wishlist and checkout.

use crate::error::StoreResult;
use crate::storefront::{lookup, Storefront};
use tracing::{debug, info, warn};
use wardrobe_commerce::cart::{CheckoutQuote, DiscountPreview};
use wardrobe_commerce::catalog::{CategoryFilter, Product, StockStatus};
use wardrobe_commerce::checkout::{place_order, Order};
use wardrobe_commerce::ids::{OrderId, ProductId};
use wardrobe_commerce::money::Money;
use wardrobe_commerce::search::{category_counts, filter_catalog, CatalogQuery, CategoryCounts};
use wardrobe_commerce::CommerceError;

impl Storefront {
    /// The catalog query the storefront would run for this search, with
    /// out-of-stock hiding taken from the settings.
    pub fn catalog_query(&self, text: &str, category: CategoryFilter) -> CatalogQuery {
        CatalogQuery::new()
            .text(text)
            .category(category)
            .hide_out_of_stock(self.settings.enable_out_of_stock_hiding)
    }

    /// Products visible to the shopper.
    pub fn browse(&self, text: &str, category: CategoryFilter) -> Vec<&Product> {
        let query = self.catalog_query(text, category);
        let visible = filter_catalog(&self.products, &query);
        debug!(
            query = %query.text,
            category = query.category.as_str(),
            visible = visible.len(),
            "Filtered catalog"
        );
        visible
    }

    pub fn category_counts(&self) -> CategoryCounts {
        category_counts(&self.products)
    }

    /// Stock badge for a product, using the configured threshold.
    pub fn stock_status(&self, id: &ProductId) -> Option<StockStatus> {
        self.product(id)
            .map(|p| p.stock_status(self.settings.low_stock_threshold))
    }

    // Cart

    /// Add units to the cart. Returns the line's new quantity.
    pub fn add_to_cart(&mut self, id: &ProductId, quantity: u32) -> StoreResult<u32> {
        let product = lookup(&self.products, id)?;
        match self.cart.add(product, quantity) {
            Ok(total) => {
                debug!(product_id = %id, quantity, line_quantity = total, "Added to cart");
                Ok(total)
            }
            Err(e) => {
                warn!(product_id = %id, quantity, error = %e, "Add to cart rejected");
                Err(e.into())
            }
        }
    }

    /// Set a line's quantity; zero removes it.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: u32) -> StoreResult<()> {
        if quantity == 0 {
            self.cart.remove(id);
            debug!(product_id = %id, "Removed from cart");
            return Ok(());
        }
        let product = lookup(&self.products, id)?;
        self.cart.update_quantity(product, quantity).map_err(|e| {
            warn!(product_id = %id, quantity, error = %e, "Quantity update rejected");
            e
        })?;
        Ok(())
    }

    pub fn remove_from_cart(&mut self, id: &ProductId) -> bool {
        self.cart.remove(id)
    }

    /// Replace the cart with one unit of `id` and open checkout.
    pub fn buy_now(&mut self, id: &ProductId) -> StoreResult<()> {
        self.require_customer()?;
        let product = lookup(&self.products, id)?;
        self.cart.replace_with(product).map_err(|e| {
            warn!(product_id = %id, error = %e, "Buy now rejected");
            e
        })?;
        self.checkout_open = true;
        info!(product_id = %id, "Buy now");
        Ok(())
    }

    pub fn cart_item_count(&self) -> u32 {
        self.cart.item_count()
    }

    pub fn cart_subtotal(&self) -> StoreResult<Money> {
        Ok(self.cart.subtotal(self.settings.currency)?)
    }

    /// Subtotal, tax at the configured rate, and grand total.
    pub fn checkout_quote(&self) -> StoreResult<CheckoutQuote> {
        Ok(CheckoutQuote::for_cart(
            &self.cart,
            self.settings.currency,
            self.settings.tax_rate,
        )?)
    }

    /// What a discount code would take off the current cart.
    ///
    /// Placing the order does not apply it.
    pub fn preview_discount_code(&self, code: &str) -> StoreResult<DiscountPreview> {
        let discount = self
            .discount_codes
            .find_by_code(code)
            .ok_or_else(|| CommerceError::DiscountCodeNotFound(code.trim().to_uppercase()))?;
        let subtotal = self.cart.subtotal(self.settings.currency)?;
        discount.check(self.now(), subtotal)?;
        Ok(DiscountPreview::new(discount, subtotal)?)
    }

    // Checkout

    /// Open checkout for the current cart.
    pub fn begin_checkout(&mut self) -> StoreResult<()> {
        self.require_customer()?;
        if self.cart.is_empty() {
            return Err(CommerceError::EmptyCart.into());
        }
        self.checkout_open = true;
        Ok(())
    }

    /// Turn the cart into a pending order, deduct stock, and empty the cart.
    pub fn place_order(&mut self) -> StoreResult<&Order> {
        self.require_customer()?;
        let now = self.now();
        let id = self.next_order_id(now);
        let order = place_order(
            &mut self.products,
            &mut self.cart,
            id,
            self.settings.currency,
            now,
        )
        .map_err(|e| {
            warn!(error = %e, "Order placement rejected");
            e
        })?;

        info!(
            order_id = %order.id,
            items = order.item_count(),
            total = %order.total,
            "Order placed"
        );
        self.checkout_open = false;
        self.orders.insert(0, order);
        Ok(&self.orders[0])
    }

    /// `ORD-<millis>`, suffixed when two orders land in the same millisecond.
    fn next_order_id(&self, now: chrono::DateTime<chrono::Utc>) -> OrderId {
        let base = OrderId::from_timestamp(now);
        let taken = |candidate: &OrderId| self.orders.iter().any(|o| &o.id == candidate);
        if !taken(&base) {
            return base;
        }
        let mut suffix = 2;
        loop {
            let candidate = OrderId::new(format!("{}-{}", base, suffix));
            if !taken(&candidate) {
                return candidate;
            }
            suffix += 1;
        }
    }

    // Wishlist

    /// Save or unsave a product. Returns whether it is now saved.
    pub fn toggle_wishlist(&mut self, id: &ProductId) -> bool {
        let saved = self.wishlist.toggle(id);
        debug!(product_id = %id, saved, "Wishlist toggled");
        saved
    }

    pub fn remove_from_wishlist(&mut self, id: &ProductId) {
        self.wishlist.remove(id);
    }

    pub fn is_wishlisted(&self, id: &ProductId) -> bool {
        self.wishlist.contains(id)
    }

    /// Saved products that still exist, in catalog order.
    pub fn wishlist_products(&self) -> Vec<&Product> {
        self.wishlist.products(&self.products)
    }
}
