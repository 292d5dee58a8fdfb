use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Payment;

/// Response from `GET /api/v1/history` and `GET /api/v1/scheduled`.
///
/// `total` counts every record in the underlying set as of fetch time. It is
/// advisory: the set is append-only and concurrently written, so the value
/// may differ between fetches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentsPage {
    pub payments: Vec<Payment>,
    pub total: u64,
}

/// Ordering key of the schedule view.
///
/// Schedule entries are ordered by `scheduled_at` ascending, with `id` as
/// the secondary key so that records sharing a timestamp still have one
/// deterministic position. The derived `Ord` is lexicographic in field
/// order, which is exactly that comparison.
///
/// On the wire the two halves travel as separate query parameters
/// (`after`/`afterId`, `before`/`beforeId`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleKey {
    pub scheduled_at: DateTime<Utc>,
    pub id: u64,
}

impl ScheduleKey {
    pub fn new(scheduled_at: DateTime<Utc>, id: u64) -> Self {
        Self { scheduled_at, id }
    }

    pub fn of(payment: &Payment) -> Self {
        Self {
            scheduled_at: payment.scheduled_at,
            id: payment.id,
        }
    }
}
