//! Customer and admin sessions.

use crate::password::{Password, PasswordChange};
use crate::user::CustomerProfile;
use crate::AuthError;
use chrono::{DateTime, Utc};

/// Password every demo customer account starts with.
pub const DEMO_CUSTOMER_PASSWORD: &str = "password123";

/// Default admin username.
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";

/// Default admin password.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// A signed-in shopper.
#[derive(Debug, Clone)]
pub struct CustomerSession {
    /// The shopper's profile.
    pub profile: CustomerProfile,
    password: Password,
    /// When the session started.
    pub signed_in_at: DateTime<Utc>,
}

impl CustomerSession {
    /// Sign in with any non-blank email and password.
    pub fn sign_in(email: &str, password: &str, now: DateTime<Utc>) -> Result<Self, AuthError> {
        let email = require("email", email)?;
        require("password", password)?;
        Ok(Self::start(CustomerProfile::from_email(email), now))
    }

    /// Create an account with an explicit display name.
    pub fn sign_up(
        email: &str,
        password: &str,
        name: &str,
        now: DateTime<Utc>,
    ) -> Result<Self, AuthError> {
        let email = require("email", email)?;
        require("password", password)?;
        let name = require("name", name)?;
        Ok(Self::start(CustomerProfile::named(email, name), now))
    }

    fn start(profile: CustomerProfile, now: DateTime<Utc>) -> Self {
        Self {
            profile,
            password: Password::new(DEMO_CUSTOMER_PASSWORD),
            signed_in_at: now,
        }
    }

    pub fn name(&self) -> &str {
        &self.profile.name
    }

    pub fn email(&self) -> &str {
        &self.profile.email
    }

    /// Change the account password.
    pub fn change_password(&mut self, change: &PasswordChange) -> Result<(), AuthError> {
        change.apply(&mut self.password)
    }

    /// Update the editable profile fields. The email stays fixed.
    pub fn update_profile(&mut self, name: &str, phone: Option<String>) -> Result<(), AuthError> {
        let name = require("name", name)?;
        self.profile.name = name.to_string();
        self.profile.phone = phone.filter(|p| !p.trim().is_empty());
        Ok(())
    }
}

/// The single admin login, changeable in memory.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    username: String,
    password: Password,
}

impl Default for AdminCredentials {
    fn default() -> Self {
        Self::new(DEFAULT_ADMIN_USERNAME, DEFAULT_ADMIN_PASSWORD)
    }
}

impl AdminCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: Password::new(password),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Check a login attempt and open an admin session.
    pub fn sign_in(
        &self,
        username: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<AdminSession, AuthError> {
        let username_ok = username == self.username;
        let password_ok = self.password.matches(password);
        if !(username_ok && password_ok) {
            return Err(AuthError::InvalidCredentials);
        }
        Ok(AdminSession {
            username: self.username.clone(),
            signed_in_at: now,
        })
    }

    /// Change the admin password; later sign-ins use the new one.
    pub fn change_password(&mut self, change: &PasswordChange) -> Result<(), AuthError> {
        change.apply(&mut self.password)
    }
}

/// A signed-in admin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSession {
    pub username: String,
    pub signed_in_at: DateTime<Utc>,
}

fn require<'a>(field: &'static str, value: &'a str) -> Result<&'a str, AuthError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AuthError::MissingField(field));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_sign_in() {
        let session = CustomerSession::sign_in("meera@example.com", "anything", Utc::now()).unwrap();
        assert_eq!(session.name(), "meera");
        assert_eq!(session.email(), "meera@example.com");
    }

    #[test]
    fn test_customer_sign_in_requires_fields() {
        assert_eq!(
            CustomerSession::sign_in("  ", "pw", Utc::now()).unwrap_err(),
            AuthError::MissingField("email")
        );
        assert_eq!(
            CustomerSession::sign_in("a@b.c", "", Utc::now()).unwrap_err(),
            AuthError::MissingField("password")
        );
    }

    #[test]
    fn test_customer_password_change_uses_demo_password() {
        let mut session = CustomerSession::sign_up("a@b.c", "pw", "Anu", Utc::now()).unwrap();
        assert_eq!(session.name(), "Anu");
        let wrong = PasswordChange::new("nope", "freshpw", "freshpw");
        assert_eq!(session.change_password(&wrong), Err(AuthError::InvalidCredentials));

        let change = PasswordChange::new(DEMO_CUSTOMER_PASSWORD, "freshpw", "freshpw");
        session.change_password(&change).unwrap();
        let again = PasswordChange::new(DEMO_CUSTOMER_PASSWORD, "other12", "other12");
        assert_eq!(session.change_password(&again), Err(AuthError::InvalidCredentials));
    }

    #[test]
    fn test_update_profile() {
        let mut session = CustomerSession::sign_in("a@b.c", "pw", Utc::now()).unwrap();
        session.update_profile("Anu", Some("98765".to_string())).unwrap();
        assert_eq!(session.profile.name, "Anu");
        assert_eq!(session.profile.phone.as_deref(), Some("98765"));
        assert!(session.update_profile(" ", None).is_err());
    }

    #[test]
    fn test_admin_sign_in() {
        let credentials = AdminCredentials::default();
        assert!(credentials.sign_in("admin", "admin123", Utc::now()).is_ok());
        assert_eq!(
            credentials.sign_in("admin", "wrong", Utc::now()).unwrap_err(),
            AuthError::InvalidCredentials
        );
        assert!(credentials.sign_in("root", "admin123", Utc::now()).is_err());
    }

    #[test]
    fn test_admin_password_change_affects_sign_in() {
        let mut credentials = AdminCredentials::default();
        credentials
            .change_password(&PasswordChange::new("admin123", "s3cret!", "s3cret!"))
            .unwrap();
        assert!(credentials.sign_in("admin", "admin123", Utc::now()).is_err());
        assert!(credentials.sign_in("admin", "s3cret!", Utc::now()).is_ok());
    }
}
