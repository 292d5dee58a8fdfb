use chrono::{DateTime, Utc};
use colored::Colorize;

use paydeck_common::{Payment, PaymentStatus, PaymentsPage};

use crate::api_client::ApiClient;
use crate::error::Result;
use crate::paging::PageRequest;

/// `paydeck history`: print the freshest history page and exit.
pub fn show_history(client: &ApiClient, limit: usize) -> Result<()> {
    let page = client.history(&PageRequest::Top { limit })?;
    print_page("Payment history", &page, |p| p.submitted_at);
    Ok(())
}

/// `paydeck schedule`: print the upcoming schedule page and exit.
pub fn show_schedule(client: &ApiClient, limit: usize) -> Result<()> {
    let page = client.scheduled(&PageRequest::Top { limit })?;
    print_page("Payment schedule", &page, |p| p.scheduled_at);
    Ok(())
}

fn print_page(title: &str, page: &PaymentsPage, when: fn(&Payment) -> DateTime<Utc>) {
    println!("\n  {}", title.underline());

    if page.payments.is_empty() {
        println!("  {}", "No payments to show".dimmed());
        return;
    }

    for payment in &page.payments {
        println!("{}", format_payment(payment, when(payment)));
    }

    println!(
        "\n  {}",
        format!(
            "Showing 1\u{2013}{} of {}",
            page.payments.len(),
            page.total
        )
        .dimmed()
    );
}

fn format_payment(payment: &Payment, when: DateTime<Utc>) -> String {
    let id = format!("{:>6}.", payment.id).dimmed();
    let date = when.format("%Y-%m-%d %H:%M").to_string();
    let route = format!("{} \u{2192} {}", payment.from_account, payment.to_account);
    let amount = format!("{:>12} {}", payment.amount_display(), payment.currency);
    format!(
        "  {} {}  {:<20} {:<40} {}",
        id,
        date.dimmed(),
        color_status(payment.status),
        route,
        amount.bold()
    )
}

fn color_status(status: PaymentStatus) -> String {
    let s = status.as_str();
    match status {
        PaymentStatus::Completed => s.green().to_string(),
        PaymentStatus::Pending => s.yellow().to_string(),
        PaymentStatus::Failed => s.red().to_string(),
        PaymentStatus::Scheduled => s.blue().to_string(),
        PaymentStatus::Cancelled => s.dimmed().to_string(),
    }
}
