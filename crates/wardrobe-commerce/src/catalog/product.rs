//! Product types.

use crate::catalog::{classify_stock, Category, NewArrivalWindow, ProductDiscount, StockStatus};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=300&width=300";

fn placeholder_image() -> String {
    PLACEHOLDER_IMAGE.to_string()
}

fn default_true() -> bool {
    true
}

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Listing description.
    #[serde(default)]
    pub description: String,
    /// Current selling price.
    pub price: Money,
    /// Price before markdown; present only while the product is on sale.
    #[serde(default)]
    pub original_price: Option<Money>,
    /// Image reference.
    #[serde(default = "placeholder_image")]
    pub image: String,
    /// Catalog category.
    pub category: Category,
    /// Average rating (0.0 - 5.0).
    #[serde(default)]
    pub rating: f64,
    /// Number of reviews.
    #[serde(default)]
    pub reviews: u32,
    /// Flagged as a new arrival.
    #[serde(default)]
    pub is_new: bool,
    /// Flagged as a bestseller.
    #[serde(default)]
    pub is_bestseller: bool,
    /// Available colors (no duplicates).
    #[serde(default)]
    pub colors: Vec<String>,
    /// Search tags (no duplicates).
    #[serde(default)]
    pub tags: Vec<String>,
    /// Units on hand.
    #[serde(default)]
    pub stock: u32,
    /// Merchandising switch, independent of stock.
    #[serde(default = "default_true")]
    pub is_available: bool,
    /// Active per-product markdown.
    #[serde(default)]
    pub discount: Option<ProductDiscount>,
    /// New-arrival promotion window.
    #[serde(default)]
    pub new_arrival: Option<NewArrivalWindow>,
    /// When the product entered the catalog.
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Create a new available product with no stock.
    pub fn new(name: impl Into<String>, price: Money, category: Category) -> Self {
        Self {
            id: ProductId::generate(),
            name: name.into(),
            description: String::new(),
            price,
            original_price: None,
            image: placeholder_image(),
            category,
            rating: 0.0,
            reviews: 0,
            is_new: false,
            is_bestseller: false,
            colors: Vec::new(),
            tags: Vec::new(),
            stock: 0,
            is_available: true,
            discount: None,
            new_arrival: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_id(mut self, id: impl Into<ProductId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_original_price(mut self, original_price: Money) -> Self {
        self.original_price = Some(original_price);
        self
    }

    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = stock;
        self
    }

    pub fn with_rating(mut self, rating: f64, reviews: u32) -> Self {
        self.rating = rating;
        self.reviews = reviews;
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for tag in tags {
            self.add_tag(tag);
        }
        self
    }

    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for color in colors {
            self.add_color(color);
        }
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn new_arrival(mut self) -> Self {
        self.is_new = true;
        self
    }

    pub fn bestseller(mut self) -> Self {
        self.is_bestseller = true;
        self
    }

    /// Mark the product as hidden from the storefront.
    pub fn unavailable(mut self) -> Self {
        self.is_available = false;
        self
    }

    /// Add a tag to this product.
    pub fn add_tag(&mut self, tag: impl Into<String>) {
        let tag = tag.into().trim().to_string();
        if !tag.is_empty() && !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }

    /// Add a color to this product.
    pub fn add_color(&mut self, color: impl Into<String>) {
        let color = color.into();
        if !color.is_empty() && !self.colors.contains(&color) {
            self.colors.push(color);
        }
    }

    /// Check the price invariant: a sale price never exceeds its reference price.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.name.trim().is_empty() {
            return Err(CommerceError::ValidationError(
                "product name is required".to_string(),
            ));
        }
        if self.price.is_negative() {
            return Err(CommerceError::ValidationError(format!(
                "price of {} cannot be negative",
                self.name
            )));
        }
        if let Some(original) = self.original_price {
            if original.currency != self.price.currency {
                return Err(CommerceError::CurrencyMismatch {
                    expected: self.price.currency.code().to_string(),
                    got: original.currency.code().to_string(),
                });
            }
            if self.price.amount_minor > original.amount_minor {
                return Err(CommerceError::ValidationError(format!(
                    "price {} of {} exceeds original price {}",
                    self.price, self.name, original
                )));
            }
        }
        Ok(())
    }

    /// Check if this product is on sale.
    pub fn is_on_sale(&self) -> bool {
        self.original_price
            .map(|original| original.amount_minor > self.price.amount_minor)
            .unwrap_or(false)
    }

    /// Amount saved against the original price, if on sale.
    pub fn savings(&self) -> Option<Money> {
        self.original_price
            .filter(|_| self.is_on_sale())
            .and_then(|original| original.try_subtract(&self.price))
    }

    /// Check if the product is in stock.
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Classify stock against the store's low-stock threshold.
    pub fn stock_status(&self, low_stock_threshold: u32) -> StockStatus {
        classify_stock(self.stock, low_stock_threshold)
    }

    /// Lowercased text the storefront search matches against.
    pub fn searchable_text(&self) -> String {
        let mut parts: Vec<&str> = vec![&self.name, &self.description, self.category.as_str()];
        parts.extend(self.tags.iter().map(String::as_str));
        parts.extend(self.colors.iter().map(String::as_str));
        parts.join(" ").to_lowercase()
    }
}
