//! Storefront error type.

use thiserror::Error;
use wardrobe_auth::AuthError;
use wardrobe_commerce::CommerceError;

/// Any rejection a storefront operation can produce.
///
/// The storefront is unchanged whenever one of these is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error(transparent)]
    Commerce(#[from] CommerceError),

    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl StoreError {
    /// Requested quantity exceeded stock, or the product had none.
    pub fn is_stock_error(&self) -> bool {
        matches!(self, StoreError::Commerce(e) if e.is_stock_error())
    }

    /// A sign-in or admin session was missing or rejected.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, StoreError::Auth(e) if e.is_auth_failure() || e.is_permission_error())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StoreError::Commerce(
                CommerceError::ProductNotFound(_) | CommerceError::DiscountCodeNotFound(_)
            )
        )
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
