use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CommonError;

/// A single payment record as the server reports it.
///
/// Records are immutable and server-owned: `id` is assigned in insertion
/// order, is unique, and is never reused. The paginator only ever looks at
/// `id` and `scheduled_at`; everything else is display data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: u64,

    /// When the payment is (or was) scheduled to execute.
    /// Primary ordering key of the schedule view; not necessarily unique.
    pub scheduled_at: DateTime<Utc>,

    /// When the payment was submitted by the payer.
    pub submitted_at: DateTime<Utc>,

    pub status: PaymentStatus,

    pub from_account: String,

    pub to_account: String,

    /// Amount in minor units (cents).
    pub amount_cents: i64,

    #[serde(default = "default_currency")]
    pub currency: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Payment {
    /// Formats the amount as a decimal string, e.g. `12.50`.
    pub fn amount_display(&self) -> String {
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        let abs = self.amount_cents.unsigned_abs();
        format!("{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

/// Lifecycle state of a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Scheduled,
    Completed,
    Failed,
    Cancelled,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Scheduled => "scheduled",
            PaymentStatus::Completed => "completed",
            PaymentStatus::Failed => "failed",
            PaymentStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = CommonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(PaymentStatus::Pending),
            "scheduled" => Ok(PaymentStatus::Scheduled),
            "completed" => Ok(PaymentStatus::Completed),
            "failed" => Ok(PaymentStatus::Failed),
            "cancelled" => Ok(PaymentStatus::Cancelled),
            other => Err(CommonError::UnknownStatus(other.to_string())),
        }
    }
}
