//! Keyset (cursor) pagination over the server's append-only record set.
//!
//! Offsets drift as other actors insert records, so paging never uses them.
//! Every fetch is anchored on the ordering key of a record at the edge of
//! the page the user is leaving; the server applies strict inequality on
//! that key, which keeps pages gap-free and duplicate-free even while the
//! set grows underneath us.

mod controller;
mod order;
mod source;

#[cfg(test)]
pub mod fixture;

pub use controller::{FetchCommand, FetchOutcome, PageController, PageView};
pub use order::{HistoryOrder, ScheduleOrder, ViewOrdering};
pub use source::PageSource;

/// One keyset query against a view's data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest<K> {
    /// Sentinel: fetch the freshest page. What "freshest" means is the
    /// server's call per view (highest ids for history, earliest upcoming
    /// entries for schedule); the client sends no cursor at all.
    Top { limit: usize },
    /// Records strictly past `key` in display order.
    After { key: K, limit: usize },
    /// The page immediately preceding `key` in display order.
    Before { key: K, limit: usize },
}

impl<K> PageRequest<K> {
    pub fn limit(&self) -> usize {
        match *self {
            PageRequest::Top { limit }
            | PageRequest::After { limit, .. }
            | PageRequest::Before { limit, .. } => limit,
        }
    }
}

/// Direction of travel relative to the currently displayed page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Backward,
    Forward,
}

/// 1-based `[start, end]` position of the displayed page within the full
/// ordered set, plus the set's total size as of the last fetch.
///
/// An empty view is represented as `start == end == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: u64,
    pub end: u64,
    pub total: u64,
}

impl Window {
    /// The "showing X–Y of Z" label.
    pub fn label(&self) -> String {
        if self.end == 0 {
            format!("0 of {}", self.total)
        } else {
            format!("{}\u{2013}{} of {}", self.start, self.end, self.total)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_label() {
        let w = Window {
            start: 101,
            end: 200,
            total: 250,
        };
        assert_eq!(w.label(), "101\u{2013}200 of 250");
    }

    #[test]
    fn test_window_label_empty() {
        let w = Window {
            start: 0,
            end: 0,
            total: 0,
        };
        assert_eq!(w.label(), "0 of 0");
    }

    #[test]
    fn test_request_limit() {
        assert_eq!(PageRequest::<u64>::Top { limit: 25 }.limit(), 25);
        assert_eq!(PageRequest::After { key: 9u64, limit: 10 }.limit(), 10);
    }
}
