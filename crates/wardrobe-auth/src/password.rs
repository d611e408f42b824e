//! Demo password storage and password-change validation.
//!
//! Passwords live in memory for the length of a run and are compared in
//! constant time. Nothing here is meant to stand in for real credential
//! storage.

use crate::AuthError;
use std::fmt;

/// Minimum length for a new password.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// An in-memory password.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn new(password: impl Into<String>) -> Self {
        Self(password.into())
    }

    /// Compare against a candidate without short-circuiting on the first
    /// differing byte.
    pub fn matches(&self, candidate: &str) -> bool {
        constant_time_compare(self.0.as_bytes(), candidate.as_bytes())
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(****)")
    }
}

/// A password-change form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordChange {
    pub current: String,
    pub new: String,
    pub confirm: String,
}

impl PasswordChange {
    pub fn new(
        current: impl Into<String>,
        new: impl Into<String>,
        confirm: impl Into<String>,
    ) -> Self {
        Self {
            current: current.into(),
            new: new.into(),
            confirm: confirm.into(),
        }
    }

    /// Validate the form and apply it to `password`.
    ///
    /// Checks run in order: confirmation mismatch, minimum length, then the
    /// current password. `password` is untouched on any error.
    pub fn apply(&self, password: &mut Password) -> Result<(), AuthError> {
        if self.new != self.confirm {
            return Err(AuthError::PasswordMismatch);
        }
        if self.new.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AuthError::WeakPassword(format!(
                "password must be at least {} characters long",
                MIN_PASSWORD_LENGTH
            )));
        }
        if !password.matches(&self.current) {
            return Err(AuthError::InvalidCredentials);
        }
        *password = Password::new(self.new.clone());
        Ok(())
    }
}

/// Constant-time comparison to prevent timing attacks.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}
