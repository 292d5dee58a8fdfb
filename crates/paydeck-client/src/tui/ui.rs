use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::app::{App, ViewMode};
use super::widgets;

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_tab_bar(frame, app, chunks[0]);
    match app.view {
        ViewMode::History => widgets::history_view::render(frame, app, chunks[1]),
        ViewMode::Schedule => widgets::schedule_view::render(frame, app, chunks[1]),
    }
    widgets::status_bar::render(frame, app, chunks[2]);
}

fn render_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::styled("  paydeck ", app.theme.header)];
    for (key, mode) in [("1", ViewMode::History), ("2", ViewMode::Schedule)] {
        let style = if app.view == mode {
            app.theme.header
        } else {
            app.theme.muted
        };
        spans.push(Span::styled(format!("  [{key}] {}", mode.title()), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
