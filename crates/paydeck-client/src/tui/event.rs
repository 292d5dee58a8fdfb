use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, KeyEvent};

use paydeck_common::PaymentsPage;

use super::app::ViewMode;
use crate::error::{PaydeckError, Result};

/// Events delivered to the main loop over a single channel: terminal input,
/// periodic ticks, and completed page fetches posted by worker threads.
#[derive(Debug)]
pub enum Event {
    /// Keyboard input
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Periodic tick for UI updates
    Tick,
    /// A fetch finished for `view`. `seq` identifies the request so the
    /// controller can discard results that were superseded in flight.
    PageLoaded {
        view: ViewMode,
        seq: u64,
        result: Result<PaymentsPage>,
    },
}

/// Event handler with a background input-polling thread.
pub struct EventHandler {
    sender: mpsc::Sender<Event>,
    receiver: mpsc::Receiver<Event>,
    #[allow(dead_code)]
    handler: thread::JoinHandle<()>,
}

impl EventHandler {
    /// Create a new event handler with the given tick rate in milliseconds
    pub fn new(tick_rate: u64) -> Self {
        let tick_rate = Duration::from_millis(tick_rate);
        let (sender, receiver) = mpsc::channel();
        let input_sender = sender.clone();

        let handler = thread::spawn(move || loop {
            if event::poll(tick_rate).unwrap_or(false) {
                match event::read() {
                    Ok(event::Event::Key(key)) => {
                        if input_sender.send(Event::Key(key)).is_err() {
                            break;
                        }
                    }
                    Ok(event::Event::Resize(width, height)) => {
                        if input_sender.send(Event::Resize(width, height)).is_err() {
                            break;
                        }
                    }
                    _ => {}
                }
            } else if input_sender.send(Event::Tick).is_err() {
                break;
            }
        });

        Self {
            sender,
            receiver,
            handler,
        }
    }

    /// A sender handed to fetch threads for posting completions.
    pub fn sender(&self) -> mpsc::Sender<Event> {
        self.sender.clone()
    }

    /// Get the next event, blocking until one is available
    pub fn next(&self) -> Result<Event> {
        self.receiver
            .recv()
            .map_err(|e| PaydeckError::Tui(e.to_string()))
    }
}
