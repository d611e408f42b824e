//! New-arrival promotion windows.

use crate::catalog::Product;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Products created within this many days count as recent.
pub const RECENT_PRODUCT_DAYS: i64 = 7;

/// Default promotion length when bulk-marking without an end date.
pub const DEFAULT_PROMOTION_DAYS: i64 = 30;

/// Promotion window for a product flagged as new.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewArrivalWindow {
    pub starts_at: DateTime<Utc>,
    #[serde(default)]
    pub ends_at: Option<DateTime<Utc>>,
}

impl NewArrivalWindow {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.ends_at.map_or(false, |end| end < now)
    }
}

impl Product {
    /// Flag or unflag the product as a new arrival starting at `now`.
    pub fn set_new_arrival(
        &mut self,
        is_new: bool,
        ends_at: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) {
        self.is_new = is_new;
        self.new_arrival = is_new.then_some(NewArrivalWindow {
            starts_at: now,
            ends_at,
        });
    }

    /// Whether the product was created in the last week.
    pub fn is_recent(&self, now: DateTime<Utc>) -> bool {
        self.created_at >= now - Duration::days(RECENT_PRODUCT_DAYS)
    }
}

/// Flag every recent product that is not already new. Returns how many changed.
pub fn mark_recent_new_arrivals(
    products: &mut [Product],
    starts_at: DateTime<Utc>,
    ends_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> usize {
    let ends_at = ends_at.unwrap_or(starts_at + Duration::days(DEFAULT_PROMOTION_DAYS));
    let mut marked = 0;
    for product in products.iter_mut().filter(|p| !p.is_new && p.is_recent(now)) {
        product.is_new = true;
        product.new_arrival = Some(NewArrivalWindow {
            starts_at,
            ends_at: Some(ends_at),
        });
        marked += 1;
    }
    marked
}

/// Clear the flag on products whose promotion window has ended.
pub fn remove_expired_new_arrivals(products: &mut [Product], now: DateTime<Utc>) -> usize {
    let mut cleared = 0;
    for product in products.iter_mut() {
        let expired = product
            .new_arrival
            .map_or(false, |window| window.is_expired_at(now));
        if product.is_new && expired {
            product.is_new = false;
            product.new_arrival = None;
            cleared += 1;
        }
    }
    cleared
}
