//! Per-product percentage markdowns.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::money::{Currency, Money};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Markdown metadata recorded on a discounted product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDiscount {
    /// Percentage taken off, in (0, 100].
    pub percentage: f64,
    #[serde(default)]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub ends_at: Option<DateTime<Utc>>,
}

impl ProductDiscount {
    pub fn new(percentage: f64) -> Self {
        Self {
            percentage,
            starts_at: None,
            ends_at: None,
        }
    }

    pub fn with_window(mut self, starts_at: Option<DateTime<Utc>>, ends_at: Option<DateTime<Utc>>) -> Self {
        self.starts_at = starts_at;
        self.ends_at = ends_at;
        self
    }

    /// Whether `now` falls inside the recorded window. Open ends always match.
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.starts_at.map_or(true, |start| now >= start)
            && self.ends_at.map_or(true, |end| now <= end)
    }
}

/// Reject percentages outside (0, 100].
pub fn validate_percentage(percentage: f64) -> Result<(), CommerceError> {
    if !percentage.is_finite() || percentage <= 0.0 || percentage > 100.0 {
        return Err(CommerceError::InvalidDiscount(format!(
            "percentage must be between 0 and 100, got {}",
            percentage
        )));
    }
    Ok(())
}

impl Product {
    /// Mark the product down by `discount.percentage` of its current price.
    ///
    /// The first markdown pins `original_price`; later ones compound on the
    /// current price but never move the reference.
    pub fn apply_discount(&mut self, discount: ProductDiscount) -> Result<(), CommerceError> {
        validate_percentage(discount.percentage)?;
        if self.original_price.is_none() {
            self.original_price = Some(self.price);
        }
        self.price = self.price.discounted(discount.percentage);
        self.discount = Some(discount);
        Ok(())
    }

    /// Restore the reference price and drop all markdown metadata.
    pub fn remove_discount(&mut self) {
        if let Some(original) = self.original_price.take() {
            self.price = original;
        }
        self.discount = None;
    }
}

/// Recorded percentage, or the one implied by the two prices.
fn markdown_percentage(product: &Product) -> f64 {
    if let Some(discount) = &product.discount {
        return discount.percentage;
    }
    match product.original_price {
        Some(original) if original.is_positive() => {
            (1.0 - product.price.to_decimal() / original.to_decimal()) * 100.0
        }
        _ => 0.0,
    }
}

/// Markdown summary for the admin discount screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountStats {
    /// Products priced below their original price.
    pub discounted_products: usize,
    /// Sum of `original_price - price` over discounted products.
    pub total_markdown: Money,
    /// Mean markdown percentage, 0 when nothing is discounted.
    pub average_percentage: f64,
}

impl DiscountStats {
    pub fn from_products(products: &[Product]) -> Self {
        let currency = products
            .first()
            .map(|p| p.price.currency)
            .unwrap_or(Currency::INR);

        let discounted: Vec<&Product> = products.iter().filter(|p| p.is_on_sale()).collect();

        let total_markdown = discounted
            .iter()
            .filter_map(|p| p.savings())
            .fold(Money::zero(currency), |acc, saved| {
                acc.try_add(&saved).unwrap_or(acc)
            });

        let average_percentage = if discounted.is_empty() {
            0.0
        } else {
            discounted.iter().map(|p| markdown_percentage(p)).sum::<f64>()
                / discounted.len() as f64
        };

        Self {
            discounted_products: discounted.len(),
            total_markdown,
            average_percentage,
        }
    }
}
