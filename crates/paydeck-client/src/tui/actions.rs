use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::paging::Direction;

use super::app::{App, ViewMode};

pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Left | KeyCode::Char('h') => app.page(Direction::Backward),
        KeyCode::Right | KeyCode::Char('l') => app.page(Direction::Forward),
        KeyCode::Char('1') => app.set_view(ViewMode::History),
        KeyCode::Char('2') => app.set_view(ViewMode::Schedule),
        KeyCode::Tab => app.set_view(app.view.other()),
        KeyCode::Char('r') => app.activate_current(),
        _ => {}
    }
}
