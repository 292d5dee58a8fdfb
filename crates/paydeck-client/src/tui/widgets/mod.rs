pub mod history_view;
pub mod schedule_view;
pub mod status_bar;

use chrono::{DateTime, Utc};
use ratatui::widgets::{Cell, Row};

use paydeck_common::Payment;

use super::theme::TuiTheme;

/// One table row for a payment; `when` is the view's timestamp column.
fn payment_row<'a>(theme: &TuiTheme, payment: &'a Payment, when: DateTime<Utc>) -> Row<'a> {
    Row::new(vec![
        Cell::from(payment.id.to_string()).style(theme.muted),
        Cell::from(when.format("%Y-%m-%d %H:%M").to_string()),
        Cell::from(payment.status.as_str()).style(theme.status_style(payment.status)),
        Cell::from(payment.from_account.as_str()),
        Cell::from(payment.to_account.as_str()),
        Cell::from(format!(
            "{} {}",
            payment.amount_display(),
            payment.currency
        )),
    ])
}
