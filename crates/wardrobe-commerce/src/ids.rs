//! Identifier newtypes.
//!
//! Seeded records use short numeric ids (`"1"`, `"2"`); records created at
//! runtime get a generated id with a per-type prefix.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// A fresh id such as `prod-18f2c3a1b00-3`.
            pub fn generate() -> Self {
                Self(generate_id($prefix))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

define_id!(ProductId, "prod");
define_id!(OrderId, "ORD");
define_id!(DiscountCodeId, "code");
define_id!(UserId, "user");

impl OrderId {
    /// Order ids carry the checkout time in milliseconds (e.g. `ORD-1718000000000`).
    pub fn from_timestamp(at: DateTime<Utc>) -> Self {
        Self(format!("ORD-{}", at.timestamp_millis()))
    }
}

static NEXT_SEQUENCE: AtomicU64 = AtomicU64::new(0);

// Millisecond clock plus a process-wide sequence, so ids minted in the same
// millisecond still differ.
fn generate_id(prefix: &str) -> String {
    let sequence = NEXT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("{}-{:x}-{}", prefix, Utc::now().timestamp_millis(), sequence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_generated_ids_are_distinct() {
        let first = ProductId::generate();
        let second = ProductId::generate();
        assert_ne!(first, second);
        assert!(first.as_str().starts_with("prod-"));
        assert!(DiscountCodeId::generate().as_str().starts_with("code-"));
    }

    #[test]
    fn test_seed_ids_serialize_as_plain_strings() {
        let id: ProductId = "7".into();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"7\"");
        assert_eq!(id.to_string(), "7");
    }

    #[test]
    fn test_order_id_from_timestamp() {
        let at = Utc.timestamp_millis_opt(1_718_000_000_123).unwrap();
        assert_eq!(OrderId::from_timestamp(at).as_str(), "ORD-1718000000123");
    }
}
