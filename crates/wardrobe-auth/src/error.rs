//! Authentication errors.

use thiserror::Error;

/// Authentication error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Invalid credentials provided.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// A required sign-in field was left blank.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Customer action attempted without a customer session.
    #[error("please sign in to continue")]
    SignInRequired,

    /// Admin action attempted without an admin session.
    #[error("admin sign-in required")]
    AdminRequired,

    /// New password and its confirmation differ.
    #[error("new passwords don't match")]
    PasswordMismatch,

    /// Password too weak.
    #[error("password too weak: {0}")]
    WeakPassword(String),
}

impl AuthError {
    /// Check if this is an authentication failure.
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            AuthError::InvalidCredentials | AuthError::SignInRequired
        )
    }

    /// Check if this is a permission error.
    pub fn is_permission_error(&self) -> bool {
        matches!(self, AuthError::AdminRequired)
    }

    /// Check if the rejection came from password-change validation.
    pub fn is_password_error(&self) -> bool {
        matches!(
            self,
            AuthError::PasswordMismatch | AuthError::WeakPassword(_)
        )
    }
}
