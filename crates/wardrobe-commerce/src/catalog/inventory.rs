//! Stock classification and the admin inventory report.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Stock level of a product relative to the low-stock threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::InStock => "in-stock",
            StockStatus::LowStock => "low-stock",
            StockStatus::OutOfStock => "out-of-stock",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }

    /// Whether the product can still be bought.
    pub fn is_purchasable(&self) -> bool {
        !matches!(self, StockStatus::OutOfStock)
    }
}

/// Classify a stock level.
///
/// `0` is out of stock, `1..=threshold` is low stock, anything above is in
/// stock. Both the shopper view and the admin report go through this.
pub fn classify_stock(stock: u32, low_stock_threshold: u32) -> StockStatus {
    if stock == 0 {
        StockStatus::OutOfStock
    } else if stock <= low_stock_threshold {
        StockStatus::LowStock
    } else {
        StockStatus::InStock
    }
}

/// A product at or below the low-stock threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LowStockAlert {
    pub product_id: ProductId,
    pub name: String,
    pub stock: u32,
}

/// Catalog-wide inventory summary for the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryReport {
    /// Number of products in the catalog.
    pub total_products: usize,
    /// Sum of price times stock over every product.
    pub total_value: Money,
    /// Products with `0 < stock <= threshold`.
    pub low_stock_count: usize,
    /// Products with no stock.
    pub out_of_stock_count: usize,
    /// Low-stock products, empty when alerts are disabled.
    pub alerts: Vec<LowStockAlert>,
}

impl InventoryReport {
    /// Build the report for a catalog.
    pub fn from_products(
        products: &[Product],
        low_stock_threshold: u32,
        include_alerts: bool,
    ) -> Result<Self, CommerceError> {
        let currency = products
            .first()
            .map(|p| p.price.currency)
            .unwrap_or(Currency::INR);

        let mut total_value = Money::zero(currency);
        let mut low_stock_count = 0;
        let mut out_of_stock_count = 0;
        let mut alerts = Vec::new();

        for product in products {
            let line = product
                .price
                .try_multiply(i64::from(product.stock))
                .ok_or(CommerceError::Overflow)?;
            total_value = total_value.try_add(&line).ok_or_else(|| {
                CommerceError::CurrencyMismatch {
                    expected: currency.code().to_string(),
                    got: line.currency.code().to_string(),
                }
            })?;

            match product.stock_status(low_stock_threshold) {
                StockStatus::OutOfStock => out_of_stock_count += 1,
                StockStatus::LowStock => {
                    low_stock_count += 1;
                    if include_alerts {
                        alerts.push(LowStockAlert {
                            product_id: product.id.clone(),
                            name: product.name.clone(),
                            stock: product.stock,
                        });
                    }
                }
                StockStatus::InStock => {}
            }
        }

        Ok(Self {
            total_products: products.len(),
            total_value,
            low_stock_count,
            out_of_stock_count,
            alerts,
        })
    }

    /// Check if anything needs restocking.
    pub fn needs_attention(&self) -> bool {
        self.low_stock_count > 0 || self.out_of_stock_count > 0
    }
}
