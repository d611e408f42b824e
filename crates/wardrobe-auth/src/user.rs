//! Customer types.

use serde::{Deserialize, Serialize};
use wardrobe_commerce::ids::UserId;

/// The signed-in shopper's profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomerProfile {
    /// User ID.
    pub id: UserId,
    /// Email address.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Contact phone number.
    #[serde(default)]
    pub phone: Option<String>,
}

impl CustomerProfile {
    /// Profile for an email sign-in, named after the email's local part.
    pub fn from_email(email: impl Into<String>) -> Self {
        let email = email.into();
        let name = display_name_for(&email);
        Self::named(email, name)
    }

    /// Profile with an explicit display name (sign-up).
    pub fn named(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: UserId::generate(),
            email: email.into(),
            name: name.into(),
            phone: None,
        }
    }
}

/// The part of an email before `@`, or the whole string if there is none.
pub fn display_name_for(email: &str) -> String {
    email.split('@').next().unwrap_or(email).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_from_email() {
        let profile = CustomerProfile::from_email("asha@example.com");
        assert_eq!(profile.name, "asha");
        assert_eq!(profile.email, "asha@example.com");
    }

    #[test]
    fn test_name_without_at_sign() {
        assert_eq!(display_name_for("asha"), "asha");
    }

    #[test]
    fn test_sign_up_name() {
        let profile = CustomerProfile::named("asha@example.com", "Asha R");
        assert_eq!(profile.name, "Asha R");
    }
}
