//! Commerce error types.

use thiserror::Error;

/// Errors raised when a storefront mutation is rejected.
///
/// Every variant is a validation rejection: the operation that produced it
/// left the state untouched, and the `Display` text is suitable for showing
/// to the shopper or admin.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Item not in cart.
    #[error("Item not in cart: {0}")]
    ItemNotInCart(String),

    /// Requested quantity exceeds current stock.
    #[error("Not enough stock available for {product_id}: requested {requested}, available {available}")]
    InsufficientStock {
        product_id: String,
        requested: u32,
        available: u32,
    },

    /// Product has no stock at all.
    #[error("Product is out of stock: {0}")]
    OutOfStock(String),

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// Checkout attempted with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Per-product discount input rejected.
    #[error("Invalid discount: {0}")]
    InvalidDiscount(String),

    /// Discount code not found.
    #[error("Discount code not found: {0}")]
    DiscountCodeNotFound(String),

    /// Discount code already exists.
    #[error("Discount code already exists: {0}")]
    DuplicateDiscountCode(String),

    /// Discount code is deactivated.
    #[error("Discount code is inactive: {0}")]
    DiscountInactive(String),

    /// Discount code outside its validity window.
    #[error("Discount code is not valid at this time: {0}")]
    DiscountNotInWindow(String),

    /// Discount usage limit reached.
    #[error("Discount usage limit reached: {0}")]
    DiscountUsageLimitReached(String),

    /// Order amount below the code's minimum.
    #[error("Order total {total} is below the minimum {minimum} for {code}")]
    DiscountMinimumNotMet {
        code: String,
        minimum: String,
        total: String,
    },

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Validation error.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl CommerceError {
    /// Check if this is a stock rejection.
    pub fn is_stock_error(&self) -> bool {
        matches!(
            self,
            CommerceError::InsufficientStock { .. } | CommerceError::OutOfStock(_)
        )
    }

    /// Check if this rejection came from discount code validation.
    pub fn is_discount_code_error(&self) -> bool {
        matches!(
            self,
            CommerceError::DiscountCodeNotFound(_)
                | CommerceError::DiscountInactive(_)
                | CommerceError::DiscountNotInWindow(_)
                | CommerceError::DiscountUsageLimitReached(_)
                | CommerceError::DiscountMinimumNotMet { .. }
        )
    }
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
