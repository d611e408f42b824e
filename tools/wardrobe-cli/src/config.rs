//! Store configuration file.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use wardrobe_auth::{AdminCredentials, DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USERNAME};
use wardrobe_commerce::cart::{DiscountCodeBook, DiscountCodeDraft};
use wardrobe_commerce::catalog::{sample_catalog, Product};
use wardrobe_commerce::settings::AdminSettings;
use wardrobe_store::Storefront;

/// Everything needed to stand up a storefront.
///
/// Missing sections fall back to the demo data: default settings, the
/// `admin`/`admin123` login, the sample catalog, and the two seeded codes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Admin settings.
    #[serde(default)]
    pub store: AdminSettings,

    /// Admin login.
    #[serde(default)]
    pub admin: AdminConfig,

    /// Catalog override. The sample catalog is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<Product>>,

    /// Discount codes. The seeded codes are used when empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub discount_codes: Vec<DiscountCodeDraft>,
}

impl StoreConfig {
    /// Load config from a file. `.json` files are JSON, everything else TOML.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }

    /// Check every section, collecting all problems instead of stopping at
    /// the first.
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if let Err(e) = self.store.validate() {
            problems.push(format!("store: {}", e));
        }
        if self.admin.username.trim().is_empty() {
            problems.push("admin.username is required".to_string());
        }
        if self.admin.password.is_empty() {
            problems.push("admin.password is required".to_string());
        }
        for product in self.products.iter().flatten() {
            if let Err(e) = product.validate() {
                problems.push(format!("product '{}': {}", product.name, e));
            }
        }
        let now = Utc::now();
        let mut book = DiscountCodeBook::new();
        for draft in &self.discount_codes {
            if let Err(e) = book.create(draft.clone(), now) {
                problems.push(format!("discount code '{}': {}", draft.code, e));
            }
        }
        if self.discount_codes.is_empty() {
            book = DiscountCodeBook::seeded(now);
        }
        problems.extend(self.currency_problems(&book));

        problems
    }

    /// Prices and codes not in the store currency.
    fn currency_problems(&self, codes: &DiscountCodeBook) -> Vec<String> {
        let mut problems = Vec::new();
        let catalog = self.products.clone().unwrap_or_else(sample_catalog);
        if let Err(e) = self.store.check_catalog_currency(&catalog) {
            problems.push(format!("products: {}", e));
        }
        for code in codes.iter() {
            if code.currency() != self.store.currency {
                problems.push(format!(
                    "discount code '{}': priced in {}, store currency is {}",
                    code.code,
                    code.currency(),
                    self.store.currency
                ));
            }
        }
        problems
    }

    /// Build a storefront from this config.
    pub fn storefront(&self, now: DateTime<Utc>) -> Result<Storefront> {
        self.store.validate().context("Invalid [store] settings")?;

        let mut store = Storefront::new()
            .with_settings(self.store.clone())
            .with_admin_credentials(AdminCredentials::new(
                self.admin.username.as_str(),
                self.admin.password.as_str(),
            ));

        if let Some(products) = &self.products {
            for product in products {
                product
                    .validate()
                    .with_context(|| format!("Invalid product: {}", product.name))?;
            }
            store = store.with_products(products.clone());
        }

        let book = if self.discount_codes.is_empty() {
            DiscountCodeBook::seeded(now)
        } else {
            let mut book = DiscountCodeBook::new();
            for draft in &self.discount_codes {
                book.create(draft.clone(), now)
                    .with_context(|| format!("Invalid discount code: {}", draft.code))?;
            }
            book
        };

        let mismatched = self.currency_problems(&book);
        if !mismatched.is_empty() {
            bail!("Currency mismatch: {}", mismatched.join("; "));
        }

        Ok(store.with_discount_codes(book))
    }
}

/// Admin login section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminConfig {
    #[serde(default = "default_username")]
    pub username: String,

    #[serde(default = "default_password")]
    pub password: String,
}

fn default_username() -> String {
    DEFAULT_ADMIN_USERNAME.to_string()
}

fn default_password() -> String {
    DEFAULT_ADMIN_PASSWORD.to_string()
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            password: default_password(),
        }
    }
}

/// Generate a default wardrobe.toml config file.
pub fn generate_default_config(store_name: &str) -> String {
    format!(
        r#"# Wardrobe store configuration

[store]
store_name = "{store_name}"
store_description = "Beautiful jewellery and accessories for sisters everywhere"
currency = "INR"
tax_rate = 18.0
low_stock_threshold = 5
enable_low_stock_alerts = true
# Hide products with no stock instead of products marked unavailable.
enable_out_of_stock_hiding = false
enable_email_notifications = true
auto_approve_reviews = false
maintenance_mode = false

[admin]
username = "admin"
password = "admin123"

# Leave out [[products]] to use the sample catalog.
# [[products]]
# id = "1"
# name = "Rose Gold Pearl Earrings"
# category = "earrings"
# price = {{ amount_minor = 199999, currency = "INR" }}
# stock = 15

# Leave out [[discount_codes]] to use the seeded codes.
# [[discount_codes]]
# code = "WELCOME10"
# value = {{ type = "percentage", value = 10.0 }}
"#,
        store_name = store_name
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use wardrobe_commerce::cart::DiscountValue;

    #[test]
    fn test_generated_config_parses() {
        let config: StoreConfig = toml::from_str(&generate_default_config("Test Store")).unwrap();
        assert_eq!(config.store.store_name, "Test Store");
        assert_eq!(config.admin.username, "admin");
        assert!(config.products.is_none());
        assert!(config.problems().is_empty());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: StoreConfig = toml::from_str("[store]\nlow_stock_threshold = 2\n").unwrap();
        assert_eq!(config.store.low_stock_threshold, 2);
        assert_eq!(config.store.tax_rate, 18.0);

        let store = config.storefront(Utc::now()).unwrap();
        assert_eq!(store.products().len(), 8);
        assert_eq!(store.discount_codes().len(), 2);
    }

    #[test]
    fn test_problems_reports_every_section() {
        let mut config = StoreConfig::default();
        config.store.tax_rate = 150.0;
        config.admin.username = String::new();
        config.discount_codes = vec![DiscountCodeDraft::new(
            "BAD",
            DiscountValue::Percentage(0.0),
        )];
        assert_eq!(config.problems().len(), 3);
        assert!(config.storefront(Utc::now()).is_err());
    }

    #[test]
    fn test_store_currency_must_match_catalog() {
        let config: StoreConfig = toml::from_str("[store]\ncurrency = \"USD\"\n").unwrap();
        let problems = config.problems();
        assert!(problems.iter().any(|p| p.starts_with("products:")));
        assert!(problems.iter().any(|p| p.contains("SISTER20")));
        assert!(config.storefront(Utc::now()).is_err());
    }

    #[test]
    fn test_configured_codes_replace_seeded() {
        let config = StoreConfig {
            discount_codes: vec![DiscountCodeDraft::new(
                "welcome10",
                DiscountValue::Percentage(10.0),
            )],
            ..StoreConfig::default()
        };
        let store = config.storefront(Utc::now()).unwrap();
        assert_eq!(store.discount_codes().len(), 1);
        assert!(store.discount_codes().find_by_code("WELCOME10").is_some());
    }
}
