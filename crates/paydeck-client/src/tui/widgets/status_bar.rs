use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, StatusKind, ViewMode};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    // The two controllers have different key types; pull out just the
    // window and flags, which are type-independent.
    let summary = match app.view {
        ViewMode::History => app
            .history
            .view()
            .map(|v| (v.window, v.back_enabled, v.forward_enabled)),
        ViewMode::Schedule => app
            .schedule
            .view()
            .map(|v| (v.window, v.back_enabled, v.forward_enabled)),
    };
    let loading = match app.view {
        ViewMode::History => app.history.is_loading(),
        ViewMode::Schedule => app.schedule.is_loading(),
    };

    let mut spans: Vec<Span> = Vec::new();
    if let Some((window, back_enabled, forward_enabled)) = summary {
        let back_style = if back_enabled && !loading {
            app.theme.info
        } else {
            app.theme.muted
        };
        let forward_style = if forward_enabled && !loading {
            app.theme.info
        } else {
            app.theme.muted
        };
        spans.push(Span::styled("  \u{2190} prev  ", back_style));
        spans.push(Span::raw(window.label()));
        spans.push(Span::styled("  next \u{2192}", forward_style));
    }
    if loading {
        spans.push(Span::styled("   fetching\u{2026}", app.theme.muted));
    }
    if let Some(msg) = &app.status_message {
        let style = match msg.kind {
            StatusKind::Error => app.theme.error,
            StatusKind::Info => app.theme.info,
        };
        spans.push(Span::raw("   "));
        spans.push(Span::styled(msg.text.clone(), style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
