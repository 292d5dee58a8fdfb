use ratatui::{
    layout::{Constraint, Rect},
    widgets::{Paragraph, Row, Table},
    Frame,
};

use crate::tui::app::App;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    match app.history.view() {
        Some(view) if !view.records.is_empty() => {
            let rows: Vec<Row> = view
                .records
                .iter()
                .map(|p| super::payment_row(&app.theme, p, p.submitted_at))
                .collect();
            let table = Table::new(
                rows,
                [
                    Constraint::Length(8),
                    Constraint::Length(17),
                    Constraint::Length(10),
                    Constraint::Percentage(20),
                    Constraint::Percentage(20),
                    Constraint::Min(16),
                ],
            )
            .header(
                Row::new(["ID", "SUBMITTED", "STATUS", "FROM", "TO", "AMOUNT"])
                    .style(app.theme.header),
            )
            .column_spacing(2);
            frame.render_widget(table, area);
        }
        Some(_) => {
            frame.render_widget(
                Paragraph::new("  No payments yet").style(app.theme.muted),
                area,
            );
        }
        None => {
            let (text, style) = if app.history.is_failed() {
                ("  Could not load payment history", app.theme.error)
            } else {
                ("  Loading\u{2026}", app.theme.muted)
            };
            frame.render_widget(Paragraph::new(text).style(style), area);
        }
    }
}
