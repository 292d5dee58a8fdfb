use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use paydeck_common::{PaymentsPage, ScheduleKey};

use crate::api_client::{ApiClient, HistorySource, ScheduleSource};
use crate::config::Config;
use crate::error::Result;
use crate::paging::{
    Direction, FetchCommand, FetchOutcome, HistoryOrder, PageController, PageSource,
    ScheduleOrder,
};

use super::event::Event;
use super::theme::TuiTheme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    History,
    Schedule,
}

impl ViewMode {
    pub fn title(&self) -> &'static str {
        match self {
            ViewMode::History => "History",
            ViewMode::Schedule => "Schedule",
        }
    }

    pub fn other(&self) -> Self {
        match self {
            ViewMode::History => ViewMode::Schedule,
            ViewMode::Schedule => ViewMode::History,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    pub expires_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
pub enum StatusKind {
    Error,
    Info,
}

/// Main application state.
///
/// Each view owns its pagination session exclusively; nothing is shared
/// between them, and fetch completions are routed back to the controller
/// that issued them via the event channel.
pub struct App {
    pub view: ViewMode,
    pub history: PageController<HistoryOrder>,
    pub schedule: PageController<ScheduleOrder>,
    pub status_message: Option<StatusMessage>,
    pub running: bool,
    pub theme: TuiTheme,
    client: Arc<ApiClient>,
    events: mpsc::Sender<Event>,
}

impl App {
    pub fn new(config: &Config, client: Arc<ApiClient>, events: mpsc::Sender<Event>) -> Self {
        Self {
            view: ViewMode::History,
            history: PageController::new(config.history_page_size),
            schedule: PageController::new(config.schedule_page_size),
            status_message: None,
            running: true,
            theme: TuiTheme::from(&config.theme),
            client,
            events,
        }
    }

    /// Start (or restart) the active view's pagination session from the
    /// freshest page. Also serves as the refresh action.
    pub fn activate_current(&mut self) {
        match self.view {
            ViewMode::History => {
                let command = self.history.activate();
                self.spawn_history_fetch(command);
            }
            ViewMode::Schedule => {
                let command = self.schedule.activate();
                self.spawn_schedule_fetch(command);
            }
        }
    }

    /// Switch views. The outgoing view discards its cursors entirely; the
    /// incoming one starts a fresh session from the top.
    pub fn set_view(&mut self, view: ViewMode) {
        if self.view == view {
            return;
        }
        match self.view {
            ViewMode::History => self.history.deactivate(),
            ViewMode::Schedule => self.schedule.deactivate(),
        }
        self.view = view;
        self.activate_current();
    }

    /// Page the active view. A no-op while a fetch is in flight or when the
    /// direction is exhausted; the controller decides.
    pub fn page(&mut self, direction: Direction) {
        match self.view {
            ViewMode::History => {
                if let Some(command) = self.history.page(direction) {
                    self.spawn_history_fetch(command);
                }
            }
            ViewMode::Schedule => {
                if let Some(command) = self.schedule.page(direction) {
                    self.spawn_schedule_fetch(command);
                }
            }
        }
    }

    fn spawn_history_fetch(&self, command: FetchCommand<u64>) {
        let source = HistorySource::new(Arc::clone(&self.client));
        let events = self.events.clone();
        thread::spawn(move || {
            let result = source.fetch(&command.request);
            let _ = events.send(Event::PageLoaded {
                view: ViewMode::History,
                seq: command.seq,
                result,
            });
        });
    }

    fn spawn_schedule_fetch(&self, command: FetchCommand<ScheduleKey>) {
        let source = ScheduleSource::new(Arc::clone(&self.client));
        let events = self.events.clone();
        thread::spawn(move || {
            let result = source.fetch(&command.request);
            let _ = events.send(Event::PageLoaded {
                view: ViewMode::Schedule,
                seq: command.seq,
                result,
            });
        });
    }

    /// Route a completed fetch to the controller that issued it.
    pub fn on_page_loaded(&mut self, view: ViewMode, seq: u64, result: Result<PaymentsPage>) {
        let outcome = match view {
            ViewMode::History => self.history.apply(seq, result),
            ViewMode::Schedule => self.schedule.apply(seq, result),
        };
        match outcome {
            // Reaching the end just disables that direction; no notice.
            FetchOutcome::Rendered | FetchOutcome::Stale | FetchOutcome::EndOfData(_) => {}
            FetchOutcome::Failed { error, .. } => {
                self.set_status(error.to_string(), StatusKind::Error);
            }
        }
    }

    /// Set status message
    pub fn set_status(&mut self, text: String, kind: StatusKind) {
        self.status_message = Some(StatusMessage {
            text,
            kind,
            expires_at: Instant::now() + Duration::from_secs(4),
        });
    }

    /// Tick - called periodically for time-based updates
    pub fn tick(&mut self) {
        if let Some(ref msg) = self.status_message {
            if Instant::now() >= msg.expires_at {
                self.status_message = None;
            }
        }
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.running = false;
    }
}
