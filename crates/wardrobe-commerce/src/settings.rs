//! Store-wide admin settings.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::money::Currency;
use serde::{Deserialize, Serialize};

/// Settings edited from the admin panel. One instance per store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminSettings {
    pub store_name: String,
    pub store_description: String,
    pub currency: Currency,
    /// Tax rate in percent, applied on top of the cart subtotal.
    pub tax_rate: f64,
    /// Stock at or below this (and above zero) counts as low.
    pub low_stock_threshold: u32,
    pub enable_low_stock_alerts: bool,
    /// Storefront hides products without stock instead of unavailable ones.
    pub enable_out_of_stock_hiding: bool,
    pub enable_email_notifications: bool,
    pub auto_approve_reviews: bool,
    pub maintenance_mode: bool,
}

impl Default for AdminSettings {
    fn default() -> Self {
        Self {
            store_name: "Sister Jewellery Wardrobe".to_string(),
            store_description: "Beautiful jewellery and accessories for sisters everywhere"
                .to_string(),
            currency: Currency::INR,
            tax_rate: 18.0,
            low_stock_threshold: 5,
            enable_low_stock_alerts: true,
            enable_out_of_stock_hiding: false,
            enable_email_notifications: true,
            auto_approve_reviews: false,
            maintenance_mode: false,
        }
    }
}

impl AdminSettings {
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.store_name.trim().is_empty() {
            return Err(CommerceError::ValidationError(
                "store name is required".to_string(),
            ));
        }
        if !self.tax_rate.is_finite() || !(0.0..=100.0).contains(&self.tax_rate) {
            return Err(CommerceError::ValidationError(format!(
                "tax rate must be between 0 and 100, got {}",
                self.tax_rate
            )));
        }
        Ok(())
    }

    /// Every price in `products` must be in the store currency.
    pub fn check_catalog_currency(&self, products: &[Product]) -> Result<(), CommerceError> {
        let prices = products
            .iter()
            .flat_map(|p| std::iter::once(p.price).chain(p.original_price));
        for price in prices {
            if price.currency != self.currency {
                return Err(CommerceError::CurrencyMismatch {
                    expected: self.currency.code().to_string(),
                    got: price.currency.code().to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = AdminSettings::default();
        assert_eq!(settings.low_stock_threshold, 5);
        assert_eq!(settings.currency, Currency::INR);
        assert!(!settings.enable_out_of_stock_hiding);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings: AdminSettings =
            serde_json::from_str(r#"{"low_stock_threshold": 2, "tax_rate": 5.0}"#).unwrap();
        assert_eq!(settings.low_stock_threshold, 2);
        assert_eq!(settings.tax_rate, 5.0);
        assert_eq!(settings.store_name, "Sister Jewellery Wardrobe");
    }

    #[test]
    fn test_invalid_tax_rate() {
        let settings = AdminSettings {
            tax_rate: 120.0,
            ..AdminSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_catalog_currency_must_match() {
        let catalog = crate::catalog::sample_catalog();
        assert!(AdminSettings::default().check_catalog_currency(&catalog).is_ok());

        let settings = AdminSettings {
            currency: Currency::USD,
            ..AdminSettings::default()
        };
        assert_eq!(
            settings.check_catalog_currency(&catalog),
            Err(CommerceError::CurrencyMismatch {
                expected: "USD".to_string(),
                got: "INR".to_string(),
            })
        );
        assert!(settings.check_catalog_currency(&[]).is_ok());
    }
}
