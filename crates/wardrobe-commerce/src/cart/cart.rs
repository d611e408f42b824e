//! Cart and cart item types.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A cart line, holding a snapshot of the product taken when it was added.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    pub product_id: ProductId,
    pub name: String,
    /// Unit price at add time.
    pub price: Money,
    pub image: String,
    /// Always positive.
    pub quantity: u32,
}

impl CartItem {
    fn snapshot(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity,
        }
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Result<Money, CommerceError> {
        self.price
            .try_multiply(i64::from(self.quantity))
            .ok_or(CommerceError::Overflow)
    }
}

/// The shopper's cart.
///
/// Every mutation takes the current product record and rejects any
/// quantity above its stock, so `quantity <= stock` holds for each line as
/// long as stock only changes through order placement.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` units, merging with an existing line.
    ///
    /// Returns the line's new quantity.
    pub fn add(&mut self, product: &Product, quantity: u32) -> Result<u32, CommerceError> {
        if quantity == 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }

        let existing = self.quantity_of(&product.id);
        let combined = existing
            .checked_add(quantity)
            .ok_or(CommerceError::Overflow)?;
        ensure_in_stock(product, combined)?;

        match self.items.iter_mut().find(|i| i.product_id == product.id) {
            Some(item) => item.quantity = combined,
            None => self.items.push(CartItem::snapshot(product, combined)),
        }
        Ok(combined)
    }

    /// Set a line's quantity. Zero removes the line.
    pub fn update_quantity(&mut self, product: &Product, quantity: u32) -> Result<(), CommerceError> {
        if quantity == 0 {
            self.remove(&product.id);
            return Ok(());
        }
        ensure_in_stock(product, quantity)?;

        let item = self
            .items
            .iter_mut()
            .find(|i| i.product_id == product.id)
            .ok_or_else(|| CommerceError::ItemNotInCart(product.id.to_string()))?;
        item.quantity = quantity;
        Ok(())
    }

    /// Remove a line. Returns whether anything was removed.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.product_id != product_id);
        self.items.len() < len_before
    }

    /// Replace the whole cart with a single unit of `product`.
    pub fn replace_with(&mut self, product: &Product) -> Result<(), CommerceError> {
        if product.stock == 0 {
            return Err(CommerceError::OutOfStock(product.id.to_string()));
        }
        self.items = vec![CartItem::snapshot(product, 1)];
        Ok(())
    }

    /// Shrink a line to the product's current stock, dropping it at zero.
    ///
    /// Returns the adjusted quantity when the line changed.
    pub fn clamp_to_stock(&mut self, product: &Product) -> Option<u32> {
        let current = self.quantity_of(&product.id);
        if current <= product.stock {
            return None;
        }
        if product.stock == 0 {
            self.remove(&product.id);
        } else if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            item.quantity = product.stock;
        }
        Some(product.stock)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, product_id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| &i.product_id == product_id)
    }

    /// Quantity of a product in the cart, 0 if absent.
    pub fn quantity_of(&self, product_id: &ProductId) -> u32 {
        self.get(product_id).map(|i| i.quantity).unwrap_or(0)
    }

    /// Total units across all lines.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of snapshot price times quantity.
    pub fn subtotal(&self, currency: Currency) -> Result<Money, CommerceError> {
        self.items.iter().try_fold(Money::zero(currency), |acc, item| {
            let line = item.line_total()?;
            acc.try_add(&line).ok_or_else(|| CommerceError::CurrencyMismatch {
                expected: currency.code().to_string(),
                got: line.currency.code().to_string(),
            })
        })
    }
}

fn ensure_in_stock(product: &Product, requested: u32) -> Result<(), CommerceError> {
    if requested > product.stock {
        return Err(CommerceError::InsufficientStock {
            product_id: product.id.to_string(),
            requested,
            available: product.stock,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    fn product(id: &str, price: i64, stock: u32) -> Product {
        Product::new(format!("Item {}", id), Money::from_major(price, Currency::INR), Category::Rings)
            .with_id(id)
            .with_stock(stock)
    }

    #[test]
    fn test_add_merges_lines() {
        let p = product("1", 100, 5);
        let mut cart = Cart::new();
        assert_eq!(cart.add(&p, 2).unwrap(), 2);
        assert_eq!(cart.add(&p, 3).unwrap(), 5);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_add_rejects_over_stock_without_mutation() {
        let p = product("1", 100, 3);
        let mut cart = Cart::new();
        cart.add(&p, 2).unwrap();
        let err = cart.add(&p, 2).unwrap_err();
        assert_eq!(
            err,
            CommerceError::InsufficientStock {
                product_id: "1".to_string(),
                requested: 4,
                available: 3
            }
        );
        assert_eq!(cart.quantity_of(&p.id), 2);

        let mut empty = Cart::new();
        assert!(empty.add(&p, 4).is_err());
        assert!(empty.is_empty());
    }

    #[test]
    fn test_add_zero_is_invalid() {
        let p = product("1", 100, 3);
        let mut cart = Cart::new();
        assert_eq!(cart.add(&p, 0), Err(CommerceError::InvalidQuantity(0)));
    }

    #[test]
    fn test_update_quantity() {
        let p = product("1", 100, 4);
        let mut cart = Cart::new();
        cart.add(&p, 1).unwrap();
        cart.update_quantity(&p, 4).unwrap();
        assert_eq!(cart.quantity_of(&p.id), 4);
        assert!(cart.update_quantity(&p, 5).unwrap_err().is_stock_error());
        assert_eq!(cart.quantity_of(&p.id), 4);

        cart.update_quantity(&p, 0).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_missing_line() {
        let p = product("1", 100, 4);
        let mut cart = Cart::new();
        assert_eq!(
            cart.update_quantity(&p, 1),
            Err(CommerceError::ItemNotInCart("1".to_string()))
        );
    }

    #[test]
    fn test_replace_with() {
        let a = product("1", 100, 4);
        let b = product("2", 50, 1);
        let mut cart = Cart::new();
        cart.add(&a, 3).unwrap();
        cart.replace_with(&b).unwrap();
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.quantity_of(&b.id), 1);

        let empty = product("3", 10, 0);
        assert_eq!(
            cart.replace_with(&empty),
            Err(CommerceError::OutOfStock("3".to_string()))
        );
        assert_eq!(cart.quantity_of(&b.id), 1);
    }

    #[test]
    fn test_clamp_to_stock() {
        let mut p = product("1", 100, 5);
        let mut cart = Cart::new();
        cart.add(&p, 4).unwrap();

        p.stock = 6;
        assert_eq!(cart.clamp_to_stock(&p), None);
        p.stock = 2;
        assert_eq!(cart.clamp_to_stock(&p), Some(2));
        assert_eq!(cart.quantity_of(&p.id), 2);
        p.stock = 0;
        assert_eq!(cart.clamp_to_stock(&p), Some(0));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_subtotal_uses_snapshot_price() {
        let mut p = product("1", 100, 5);
        let mut cart = Cart::new();
        cart.add(&p, 2).unwrap();
        p.price = Money::from_major(999, Currency::INR);
        assert_eq!(
            cart.subtotal(Currency::INR).unwrap(),
            Money::from_major(200, Currency::INR)
        );
    }
}
