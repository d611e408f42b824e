//! Checkout pricing calculations.

use crate::cart::{Cart, DiscountCode};
use crate::error::CommerceError;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Pricing breakdown shown on the checkout page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutQuote {
    /// Total units in the cart.
    pub item_count: u32,
    /// Sum of line totals.
    pub subtotal: Money,
    /// Tax rate in percent.
    pub tax_rate: f64,
    /// Tax on the subtotal.
    pub tax_total: Money,
    /// Subtotal plus tax.
    pub grand_total: Money,
}

impl CheckoutQuote {
    /// Price a cart at `tax_rate` percent.
    pub fn for_cart(cart: &Cart, currency: Currency, tax_rate: f64) -> Result<Self, CommerceError> {
        let subtotal = cart.subtotal(currency)?;
        let tax_total = subtotal.percentage(tax_rate);
        let grand_total = subtotal.try_add(&tax_total).ok_or(CommerceError::Overflow)?;
        Ok(Self {
            item_count: cart.item_count(),
            subtotal,
            tax_rate,
            tax_total,
            grand_total,
        })
    }
}

/// What a discount code would take off a subtotal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiscountPreview {
    pub code: String,
    pub subtotal: Money,
    pub discount_amount: Money,
    /// Subtotal after the discount.
    pub discounted_total: Money,
}

impl DiscountPreview {
    pub fn new(code: &DiscountCode, subtotal: Money) -> Result<Self, CommerceError> {
        if code.currency() != subtotal.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: code.currency().code().to_string(),
                got: subtotal.currency.code().to_string(),
            });
        }
        let discount_amount = code.amount_for(subtotal);
        let discounted_total = subtotal
            .try_subtract(&discount_amount)
            .ok_or_else(|| CommerceError::CurrencyMismatch {
                expected: subtotal.currency.code().to_string(),
                got: discount_amount.currency.code().to_string(),
            })?;
        Ok(Self {
            code: code.code.clone(),
            subtotal,
            discount_amount,
            discounted_total,
        })
    }

    /// Discount as a share of the subtotal.
    pub fn discount_percentage(&self) -> f64 {
        if self.subtotal.amount_minor == 0 {
            return 0.0;
        }
        (self.discount_amount.amount_minor as f64 / self.subtotal.amount_minor as f64) * 100.0
    }
}
