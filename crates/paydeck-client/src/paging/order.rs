use std::fmt::Debug;

use paydeck_common::{Payment, ScheduleKey};

/// Display ordering of one paginated view.
///
/// Keyset fetches use strict comparisons on the key, so `key_of` must be
/// injective over the record set, which is why the schedule key carries the
/// id tiebreak alongside the timestamp.
pub trait ViewOrdering {
    type Key: Clone + Copy + PartialEq + Debug;

    fn key_of(payment: &Payment) -> Self::Key;

    /// Whether `a` comes strictly before `b` in display order.
    fn precedes(a: Self::Key, b: Self::Key) -> bool;
}

/// Payment history: newest first, descending by insertion id.
pub struct HistoryOrder;

impl ViewOrdering for HistoryOrder {
    type Key = u64;

    fn key_of(payment: &Payment) -> u64 {
        payment.id
    }

    fn precedes(a: u64, b: u64) -> bool {
        a > b
    }
}

/// Payment schedule: ascending by `(scheduled_at, id)`.
pub struct ScheduleOrder;

impl ViewOrdering for ScheduleOrder {
    type Key = ScheduleKey;

    fn key_of(payment: &Payment) -> ScheduleKey {
        ScheduleKey::of(payment)
    }

    fn precedes(a: ScheduleKey, b: ScheduleKey) -> bool {
        a < b
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_history_order_is_descending() {
        assert!(HistoryOrder::precedes(10, 9));
        assert!(!HistoryOrder::precedes(9, 10));
        assert!(!HistoryOrder::precedes(9, 9));
    }

    #[test]
    fn test_schedule_order_breaks_ties_by_id() {
        let t = Utc.with_ymd_and_hms(2026, 5, 1, 12, 0, 0).unwrap();
        let a = ScheduleKey::new(t, 3);
        let b = ScheduleKey::new(t, 4);
        assert!(ScheduleOrder::precedes(a, b));
        assert!(!ScheduleOrder::precedes(b, a));
        assert!(!ScheduleOrder::precedes(a, a));
    }
}
