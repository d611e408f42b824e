//! Discount code types.
//!
//! Codes are checked against an order amount and can be previewed against a
//! cart, but placing an order never redeems one.

use crate::error::CommerceError;
use crate::ids::DiscountCodeId;
use crate::money::{Currency, Money};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Usage limit given to a new code when the admin leaves it blank.
pub const DEFAULT_USAGE_LIMIT: u32 = 100;

/// Validity of a new code when the admin leaves the dates blank.
pub const DEFAULT_CODE_VALIDITY_DAYS: i64 = 30;

/// Type of discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountKind {
    /// Percentage off.
    Percentage,
    /// Fixed amount off.
    Fixed,
}

impl DiscountKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscountKind::Percentage => "percentage",
            DiscountKind::Fixed => "fixed",
        }
    }
}

/// Value of the discount.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum DiscountValue {
    /// Percentage off (0.0 - 100.0).
    Percentage(f64),
    /// Fixed amount off.
    Fixed(Money),
}

impl DiscountValue {
    pub fn kind(&self) -> DiscountKind {
        match self {
            DiscountValue::Percentage(_) => DiscountKind::Percentage,
            DiscountValue::Fixed(_) => DiscountKind::Fixed,
        }
    }

    fn validate(&self) -> Result<(), CommerceError> {
        match self {
            DiscountValue::Percentage(percent) => crate::catalog::validate_percentage(*percent),
            DiscountValue::Fixed(amount) if !amount.is_positive() => Err(
                CommerceError::InvalidDiscount("fixed amount must be positive".to_string()),
            ),
            DiscountValue::Fixed(_) => Ok(()),
        }
    }

    /// Short label such as `20%` or `₹500.00`.
    pub fn label(&self) -> String {
        match self {
            DiscountValue::Percentage(percent) => format!("{}%", percent),
            DiscountValue::Fixed(amount) => amount.display(),
        }
    }
}

/// A discount code managed from the admin panel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiscountCode {
    pub id: DiscountCodeId,
    /// Code the shopper types, stored uppercase.
    pub code: String,
    pub value: DiscountValue,
    /// Order amount required before the code applies.
    pub min_order_amount: Money,
    /// Cap on what a percentage code can take off.
    #[serde(default)]
    pub max_discount: Option<Money>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub usage_limit: u32,
    #[serde(default)]
    pub used_count: u32,
    pub is_active: bool,
}

impl DiscountCode {
    pub fn kind(&self) -> DiscountKind {
        self.value.kind()
    }

    /// Currency the code's amounts are in.
    pub fn currency(&self) -> Currency {
        self.min_order_amount.currency
    }

    /// Check whether the code can be used on an order of `order_total`.
    ///
    /// Checked in order: currency, active flag, validity window, usage
    /// limit, minimum order amount.
    pub fn check(&self, now: DateTime<Utc>, order_total: Money) -> Result<(), CommerceError> {
        if order_total.currency != self.currency() {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency().code().to_string(),
                got: order_total.currency.code().to_string(),
            });
        }
        if !self.is_active {
            return Err(CommerceError::DiscountInactive(self.code.clone()));
        }
        if now < self.starts_at || now > self.ends_at {
            return Err(CommerceError::DiscountNotInWindow(self.code.clone()));
        }
        if self.used_count >= self.usage_limit {
            return Err(CommerceError::DiscountUsageLimitReached(self.code.clone()));
        }
        if order_total.amount_minor < self.min_order_amount.amount_minor {
            return Err(CommerceError::DiscountMinimumNotMet {
                code: self.code.clone(),
                minimum: self.min_order_amount.display(),
                total: order_total.display(),
            });
        }
        Ok(())
    }

    /// Amount this code takes off `order_total`, never more than the total.
    ///
    /// `order_total` is assumed to have passed [`check`](Self::check).
    pub fn amount_for(&self, order_total: Money) -> Money {
        let amount = match self.value {
            DiscountValue::Percentage(percent) => {
                let raw = order_total.percentage(percent);
                match self.max_discount {
                    Some(cap) => raw.min(cap),
                    None => raw,
                }
            }
            DiscountValue::Fixed(amount) => amount,
        };
        amount.min(order_total)
    }

    /// Uses left before the limit is hit.
    pub fn remaining_uses(&self) -> u32 {
        self.usage_limit.saturating_sub(self.used_count)
    }
}

/// Admin input for a new code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountCodeDraft {
    pub code: String,
    pub value: DiscountValue,
    #[serde(default)]
    pub min_order_amount: Option<Money>,
    #[serde(default)]
    pub max_discount: Option<Money>,
    #[serde(default)]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub ends_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub usage_limit: Option<u32>,
}

impl DiscountCodeDraft {
    pub fn new(code: impl Into<String>, value: DiscountValue) -> Self {
        Self {
            code: code.into(),
            value,
            min_order_amount: None,
            max_discount: None,
            starts_at: None,
            ends_at: None,
            usage_limit: None,
        }
    }

    pub fn with_min_order_amount(mut self, amount: Money) -> Self {
        self.min_order_amount = Some(amount);
        self
    }

    pub fn with_max_discount(mut self, amount: Money) -> Self {
        self.max_discount = Some(amount);
        self
    }

    pub fn with_window(mut self, starts_at: DateTime<Utc>, ends_at: DateTime<Utc>) -> Self {
        self.starts_at = Some(starts_at);
        self.ends_at = Some(ends_at);
        self
    }

    pub fn with_usage_limit(mut self, limit: u32) -> Self {
        self.usage_limit = Some(limit);
        self
    }
}

/// Every discount code in the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DiscountCodeBook {
    codes: Vec<DiscountCode>,
}

impl DiscountCodeBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// The two demo codes, valid from `now`.
    pub fn seeded(now: DateTime<Utc>) -> Self {
        let inr = |amount| Money::from_major(amount, Currency::INR);
        Self {
            codes: vec![
                DiscountCode {
                    id: DiscountCodeId::new("1"),
                    code: "SISTER20".to_string(),
                    value: DiscountValue::Percentage(20.0),
                    min_order_amount: inr(2000),
                    max_discount: Some(inr(1000)),
                    starts_at: now,
                    ends_at: now + Duration::days(30),
                    usage_limit: 100,
                    used_count: 15,
                    is_active: true,
                },
                DiscountCode {
                    id: DiscountCodeId::new("2"),
                    code: "FLAT500".to_string(),
                    value: DiscountValue::Fixed(inr(500)),
                    min_order_amount: inr(3000),
                    max_discount: None,
                    starts_at: now,
                    ends_at: now + Duration::days(15),
                    usage_limit: 50,
                    used_count: 8,
                    is_active: true,
                },
            ],
        }
    }

    /// Create a code from admin input.
    pub fn create(
        &mut self,
        draft: DiscountCodeDraft,
        now: DateTime<Utc>,
    ) -> Result<&DiscountCode, CommerceError> {
        let code = draft.code.trim().to_uppercase();
        if code.is_empty() {
            return Err(CommerceError::ValidationError(
                "discount code is required".to_string(),
            ));
        }
        draft.value.validate()?;
        if self.find_by_code(&code).is_some() {
            return Err(CommerceError::DuplicateDiscountCode(code));
        }

        let starts_at = draft.starts_at.unwrap_or(now);
        let ends_at = draft
            .ends_at
            .unwrap_or(starts_at + Duration::days(DEFAULT_CODE_VALIDITY_DAYS));
        if ends_at < starts_at {
            return Err(CommerceError::InvalidDiscount(format!(
                "{} ends before it starts",
                code
            )));
        }

        let currency = match draft.value {
            DiscountValue::Fixed(amount) => amount.currency,
            DiscountValue::Percentage(_) => draft
                .min_order_amount
                .or(draft.max_discount)
                .map_or(Currency::INR, |m| m.currency),
        };
        let amounts = draft.min_order_amount.iter().chain(draft.max_discount.iter());
        if let Some(other) = amounts.map(|m| m.currency).find(|c| *c != currency) {
            return Err(CommerceError::CurrencyMismatch {
                expected: currency.code().to_string(),
                got: other.code().to_string(),
            });
        }
        self.codes.push(DiscountCode {
            id: DiscountCodeId::generate(),
            code,
            value: draft.value,
            min_order_amount: draft.min_order_amount.unwrap_or(Money::zero(currency)),
            max_discount: draft.max_discount,
            starts_at,
            ends_at,
            usage_limit: draft.usage_limit.filter(|l| *l > 0).unwrap_or(DEFAULT_USAGE_LIMIT),
            used_count: 0,
            is_active: true,
        });
        self.codes
            .last()
            .ok_or_else(|| CommerceError::ValidationError("code was not stored".to_string()))
    }

    /// Flip the active flag. Returns the new state.
    pub fn toggle_active(&mut self, id: &DiscountCodeId) -> Result<bool, CommerceError> {
        let code = self
            .codes
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or_else(|| CommerceError::DiscountCodeNotFound(id.to_string()))?;
        code.is_active = !code.is_active;
        Ok(code.is_active)
    }

    pub fn delete(&mut self, id: &DiscountCodeId) -> Result<DiscountCode, CommerceError> {
        let index = self
            .codes
            .iter()
            .position(|c| &c.id == id)
            .ok_or_else(|| CommerceError::DiscountCodeNotFound(id.to_string()))?;
        Ok(self.codes.remove(index))
    }

    /// Look up a code case-insensitively.
    pub fn find_by_code(&self, code: &str) -> Option<&DiscountCode> {
        let code = code.trim();
        self.codes.iter().find(|c| c.code.eq_ignore_ascii_case(code))
    }

    pub fn get(&self, id: &DiscountCodeId) -> Option<&DiscountCode> {
        self.codes.iter().find(|c| &c.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiscountCode> {
        self.codes.iter()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 10, 0, 0).unwrap()
    }

    fn inr(amount: i64) -> Money {
        Money::from_major(amount, Currency::INR)
    }

    #[test]
    fn test_seeded_codes() {
        let book = DiscountCodeBook::seeded(now());
        assert_eq!(book.len(), 2);
        let sister = book.find_by_code("sister20").unwrap();
        assert_eq!(sister.kind(), DiscountKind::Percentage);
        assert_eq!(sister.remaining_uses(), 85);
    }

    #[test]
    fn test_check_minimum_and_cap() {
        let book = DiscountCodeBook::seeded(now());
        let sister = book.find_by_code("SISTER20").unwrap();

        assert!(matches!(
            sister.check(now(), inr(1500)),
            Err(CommerceError::DiscountMinimumNotMet { .. })
        ));
        assert!(sister.check(now(), inr(2500)).is_ok());
        assert_eq!(sister.amount_for(inr(2500)), inr(500));
        // 20% of 8000 is 1600, capped at 1000.
        assert_eq!(sister.amount_for(inr(8000)), inr(1000));
    }

    #[test]
    fn test_check_window_and_active() {
        let mut book = DiscountCodeBook::seeded(now());
        let flat = book.find_by_code("FLAT500").unwrap().clone();
        assert_eq!(
            flat.check(now() + Duration::days(16), inr(4000)),
            Err(CommerceError::DiscountNotInWindow("FLAT500".to_string()))
        );

        book.toggle_active(&flat.id).unwrap();
        let err = book
            .find_by_code("FLAT500")
            .unwrap()
            .check(now(), inr(4000))
            .unwrap_err();
        assert!(err.is_discount_code_error());
        assert_eq!(err, CommerceError::DiscountInactive("FLAT500".to_string()));
    }

    #[test]
    fn test_usage_limit() {
        let mut code = DiscountCodeBook::seeded(now())
            .find_by_code("FLAT500")
            .unwrap()
            .clone();
        code.used_count = code.usage_limit;
        assert_eq!(
            code.check(now(), inr(4000)),
            Err(CommerceError::DiscountUsageLimitReached("FLAT500".to_string()))
        );
    }

    #[test]
    fn test_fixed_amount_capped_at_total() {
        let book = DiscountCodeBook::seeded(now());
        let flat = book.find_by_code("FLAT500").unwrap();
        assert_eq!(flat.amount_for(inr(300)), inr(300));
    }

    #[test]
    fn test_create_requires_code_and_value() {
        let mut book = DiscountCodeBook::new();
        assert!(book
            .create(DiscountCodeDraft::new("  ", DiscountValue::Percentage(10.0)), now())
            .is_err());
        assert!(book
            .create(DiscountCodeDraft::new("ZERO", DiscountValue::Percentage(0.0)), now())
            .is_err());
        assert!(book.is_empty());

        let created = book
            .create(DiscountCodeDraft::new("summer15", DiscountValue::Percentage(15.0)), now())
            .unwrap();
        assert_eq!(created.code, "SUMMER15");
        assert_eq!(created.usage_limit, DEFAULT_USAGE_LIMIT);
        assert_eq!(created.ends_at, now() + Duration::days(DEFAULT_CODE_VALIDITY_DAYS));
        assert_eq!(created.used_count, 0);
        assert!(created.is_active);
    }

    #[test]
    fn test_create_keeps_draft_limits() {
        let mut book = DiscountCodeBook::new();
        let draft = DiscountCodeDraft::new("vip", DiscountValue::Fixed(inr(250)))
            .with_min_order_amount(inr(1000))
            .with_usage_limit(3)
            .with_window(now(), now() + Duration::days(2));
        let created = book.create(draft, now()).unwrap();
        assert_eq!(created.usage_limit, 3);
        assert_eq!(created.remaining_uses(), 3);
        assert!(created.check(now(), inr(999)).is_err());
        assert!(created.check(now() + Duration::days(1), inr(1000)).is_ok());
    }

    #[test]
    fn test_create_rejects_reversed_window() {
        let mut book = DiscountCodeBook::new();
        let draft = DiscountCodeDraft::new("late", DiscountValue::Percentage(5.0))
            .with_window(now(), now() - Duration::days(1));
        assert!(matches!(
            book.create(draft, now()),
            Err(CommerceError::InvalidDiscount(_))
        ));
    }

    #[test]
    fn test_check_rejects_other_currency() {
        let book = DiscountCodeBook::seeded(now());
        let sister = book.find_by_code("SISTER20").unwrap();
        let usd = Money::from_major(5000, Currency::USD);
        assert_eq!(
            sister.check(now(), usd),
            Err(CommerceError::CurrencyMismatch {
                expected: "INR".to_string(),
                got: "USD".to_string(),
            })
        );
    }

    #[test]
    fn test_create_rejects_mixed_currency_limits() {
        let mut book = DiscountCodeBook::new();
        let draft = DiscountCodeDraft::new("mixed", DiscountValue::Fixed(inr(100)))
            .with_min_order_amount(Money::from_major(50, Currency::USD));
        assert!(matches!(
            book.create(draft, now()),
            Err(CommerceError::CurrencyMismatch { .. })
        ));
        assert!(book.is_empty());

        let draft = DiscountCodeDraft::new("usd10", DiscountValue::Percentage(10.0))
            .with_max_discount(Money::from_major(20, Currency::USD));
        assert_eq!(book.create(draft, now()).unwrap().currency(), Currency::USD);
    }

    #[test]
    fn test_create_rejects_duplicate() {
        let mut book = DiscountCodeBook::seeded(now());
        assert_eq!(
            book.create(DiscountCodeDraft::new("flat500", DiscountValue::Fixed(inr(100))), now())
                .unwrap_err(),
            CommerceError::DuplicateDiscountCode("FLAT500".to_string())
        );
    }

    #[test]
    fn test_delete() {
        let mut book = DiscountCodeBook::seeded(now());
        let removed = book.delete(&DiscountCodeId::new("1")).unwrap();
        assert_eq!(removed.code, "SISTER20");
        assert_eq!(book.len(), 1);
        assert!(book.delete(&DiscountCodeId::new("1")).is_err());
    }
}
