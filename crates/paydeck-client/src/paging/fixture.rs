//! In-memory data source implementing the exact keyset contract the server
//! is assumed to provide: records selected by strict comparison against the
//! cursor key, returned in display order, at most `limit` of them, plus the
//! set's total. Test-only.

use chrono::{Duration, TimeZone, Utc};
use paydeck_common::{Payment, PaymentStatus, PaymentsPage, ScheduleKey};

use super::source::PageSource;
use super::PageRequest;
use crate::error::Result;

/// A payment with the given id, scheduled `minutes` past a fixed epoch.
/// Distinct ids may share a timestamp to exercise the schedule tiebreak.
pub fn payment(id: u64, minutes: i64) -> Payment {
    let epoch = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    Payment {
        id,
        scheduled_at: epoch + Duration::minutes(minutes),
        submitted_at: epoch,
        status: PaymentStatus::Scheduled,
        from_account: format!("acct-{}", id % 7),
        to_account: "utility-co".to_string(),
        amount_cents: 1_000 + id as i64,
        currency: "USD".to_string(),
        memo: None,
    }
}

/// `n` payments with ids `1..=n`, scheduled a minute apart (no ties).
pub fn fixture(n: u64) -> FixtureSource {
    FixtureSource::new((1..=n).map(|id| payment(id, id as i64)).collect())
}

pub struct FixtureSource {
    payments: Vec<Payment>,
}

impl FixtureSource {
    pub fn new(payments: Vec<Payment>) -> Self {
        Self { payments }
    }

    /// Simulates a concurrent insert by another actor.
    pub fn push(&mut self, payment: Payment) {
        self.payments.push(payment);
    }

    fn ordered_desc_by_id(&self) -> Vec<Payment> {
        let mut ordered = self.payments.clone();
        ordered.sort_by(|a, b| b.id.cmp(&a.id));
        ordered
    }

    fn ordered_asc_by_schedule(&self) -> Vec<Payment> {
        let mut ordered = self.payments.clone();
        ordered.sort_by_key(ScheduleKey::of);
        ordered
    }

    /// Full display order of the history view; lets tests state expected
    /// pages as slices.
    pub fn history_order(&self) -> Vec<u64> {
        self.ordered_desc_by_id().iter().map(|p| p.id).collect()
    }

    /// Full display order of the schedule view, as ids.
    pub fn schedule_order(&self) -> Vec<u64> {
        self.ordered_asc_by_schedule().iter().map(|p| p.id).collect()
    }
}

/// `Before` semantics: of everything preceding the key in display order,
/// the `limit` records closest to it, still in display order.
fn tail(mut preceding: Vec<Payment>, limit: usize) -> Vec<Payment> {
    let skip = preceding.len().saturating_sub(limit);
    preceding.split_off(skip)
}

impl PageSource<u64> for FixtureSource {
    fn fetch(&self, request: &PageRequest<u64>) -> Result<PaymentsPage> {
        let ordered = self.ordered_desc_by_id();
        let total = ordered.len() as u64;
        let payments = match *request {
            PageRequest::Top { limit } => ordered.into_iter().take(limit).collect(),
            PageRequest::After { key, limit } => ordered
                .into_iter()
                .filter(|p| p.id < key)
                .take(limit)
                .collect(),
            PageRequest::Before { key, limit } => tail(
                ordered.into_iter().filter(|p| p.id > key).collect(),
                limit,
            ),
        };
        Ok(PaymentsPage { payments, total })
    }
}

impl PageSource<ScheduleKey> for FixtureSource {
    fn fetch(&self, request: &PageRequest<ScheduleKey>) -> Result<PaymentsPage> {
        let ordered = self.ordered_asc_by_schedule();
        let total = ordered.len() as u64;
        let payments = match *request {
            PageRequest::Top { limit } => ordered.into_iter().take(limit).collect(),
            PageRequest::After { key, limit } => ordered
                .into_iter()
                .filter(|p| ScheduleKey::of(p) > key)
                .take(limit)
                .collect(),
            PageRequest::Before { key, limit } => tail(
                ordered
                    .into_iter()
                    .filter(|p| ScheduleKey::of(p) < key)
                    .collect(),
                limit,
            ),
        };
        Ok(PaymentsPage { payments, total })
    }
}
