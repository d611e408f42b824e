//! Demo authentication for the Wardrobe storefront.
//!
//! Provides customer sessions, the admin login, and password-change rules.
//! Credentials are checked in memory only.

mod error;
mod password;
mod session;
mod user;

pub use error::AuthError;
pub use password::{Password, PasswordChange, MIN_PASSWORD_LENGTH};
pub use session::{
    AdminCredentials, AdminSession, CustomerSession, DEFAULT_ADMIN_PASSWORD,
    DEFAULT_ADMIN_USERNAME, DEMO_CUSTOMER_PASSWORD,
};
pub use user::{display_name_for, CustomerProfile};
