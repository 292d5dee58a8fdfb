use ratatui::{
    layout::{Constraint, Rect},
    widgets::{Paragraph, Row, Table},
    Frame,
};

use crate::tui::app::App;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    match app.schedule.view() {
        Some(view) if !view.records.is_empty() => {
            let rows: Vec<Row> = view
                .records
                .iter()
                .map(|p| super::payment_row(&app.theme, p, p.scheduled_at))
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
                Row::new(["ID", "SCHEDULED", "STATUS", "FROM", "TO", "AMOUNT"])
                    .style(app.theme.header),
            )
            .column_spacing(2);
            frame.render_widget(table, area);
        }
        Some(_) => {
            frame.render_widget(
                Paragraph::new("  Nothing scheduled").style(app.theme.muted),
                area,
            );
        }
        None => {
            let (text, style) = if app.schedule.is_failed() {
                ("  Could not load payment schedule", app.theme.error)
            } else {
                ("  Loading\u{2026}", app.theme.muted)
            };
            frame.render_widget(Paragraph::new(text).style(style), area);
        }
    }
}
