mod actions;
mod app;
mod event;
mod theme;
mod ui;
pub mod widgets;

pub use app::{App, ViewMode};

use std::io;
use std::sync::Arc;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::api_client::ApiClient;
use crate::config::Config;
use crate::error::{PaydeckError, Result};

/// Run the dashboard
pub fn run(config: Config, client: Arc<ApiClient>) -> Result<()> {
    // Setup terminal
    enable_raw_mode().map_err(|e| PaydeckError::Tui(e.to_string()))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| PaydeckError::Tui(e.to_string()))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| PaydeckError::Tui(e.to_string()))?;

    let events = event::EventHandler::new(250);
    let mut app = App::new(&config, client, events.sender());
    app.activate_current();
    let res = run_app(&mut terminal, &mut app, &events);

    // Restore terminal
    disable_raw_mode().map_err(|e| PaydeckError::Tui(e.to_string()))?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .map_err(|e| PaydeckError::Tui(e.to_string()))?;
    terminal
        .show_cursor()
        .map_err(|e| PaydeckError::Tui(e.to_string()))?;

    res
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &event::EventHandler,
) -> Result<()> {
    while app.running {
        terminal
            .draw(|f| ui::render(f, app))
            .map_err(|e| PaydeckError::Tui(e.to_string()))?;

        match events.next()? {
            event::Event::Key(key) => actions::handle_key_event(app, key),
            event::Event::Tick => app.tick(),
            event::Event::Resize(_, _) => {}
            event::Event::PageLoaded { view, seq, result } => {
                app.on_page_loaded(view, seq, result);
            }
        }
    }

    Ok(())
}
