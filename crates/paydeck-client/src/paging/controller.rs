use paydeck_common::{Payment, PaymentsPage};
use tracing::{debug, warn};

use super::order::ViewOrdering;
use super::{Direction, PageRequest, Window};
use crate::error::{PaydeckError, Result};

/// A fetch the environment should execute against the view's data source.
///
/// `seq` must be handed back to [`PageController::apply`] together with the
/// result; the controller uses it to discard results that were superseded
/// while in flight.
#[derive(Debug, Clone, Copy)]
pub struct FetchCommand<K> {
    pub seq: u64,
    pub request: PageRequest<K>,
}

/// What applying a fetch result did to the view.
#[derive(Debug)]
pub enum FetchOutcome {
    /// A fresh page is in place; redraw.
    Rendered,
    /// No more data in that direction. The current page stays, with that
    /// direction's navigation disabled.
    EndOfData(Direction),
    /// The fetch failed. `fatal` means there was no earlier page to fall
    /// back to and the view now shows nothing.
    Failed { error: PaydeckError, fatal: bool },
    /// The result belonged to a superseded request and was discarded.
    Stale,
}

/// One successfully fetched page plus everything derived from it: window
/// bounds, navigation enablement, and the keys the next fetches anchor on.
#[derive(Debug, Clone)]
pub struct PageView<K> {
    pub records: Vec<Payment>,
    pub window: Window,
    pub back_enabled: bool,
    pub forward_enabled: bool,
    /// Ordering keys of the first and last record; `None` for an empty set.
    bounds: Option<(K, K)>,
}

/// Where an in-flight fetch was issued from. Carries the cursor anchor (for
/// response validation) and the prior window position (for the new window
/// arithmetic).
#[derive(Debug, Clone, Copy)]
enum FetchOrigin<K> {
    Top,
    Forward {
        anchor: K,
        prior_start: u64,
        prior_len: usize,
    },
    Backward {
        anchor: K,
        prior_start: u64,
    },
}

#[derive(Debug)]
enum State<K> {
    Inactive,
    /// One fetch in flight. `prior` is the last good page, kept so a failed
    /// or end-of-data fetch has something to fall back to.
    Loading {
        seq: u64,
        origin: FetchOrigin<K>,
        prior: Option<PageView<K>>,
    },
    Rendered(PageView<K>),
    /// A top fetch failed; nothing to show until the view is reactivated.
    Failed,
}

/// Pagination session of a single view.
///
/// Owns the cursor/window state exclusively; nothing here is shared across
/// views. At most one fetch is outstanding at a time: paging commands are
/// refused while loading, and a result is applied only if its sequence
/// number matches the newest issued fetch.
pub struct PageController<O: ViewOrdering> {
    page_size: usize,
    /// Sequence number of the most recently issued fetch.
    seq: u64,
    state: State<O::Key>,
}

impl<O: ViewOrdering> PageController<O> {
    pub fn new(page_size: usize) -> Self {
        debug_assert!(page_size > 0);
        Self {
            page_size: page_size.max(1),
            seq: 0,
            state: State::Inactive,
        }
    }

    /// The currently rendered page, if any.
    pub fn view(&self) -> Option<&PageView<O::Key>> {
        match &self.state {
            State::Rendered(view) => Some(view),
            State::Loading { prior, .. } => prior.as_ref(),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, State::Loading { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.state, State::Failed)
    }

    /// Enter the view: discard any prior session and fetch the freshest
    /// page. Also serves as refresh. Cursors from an earlier activation are
    /// never reused; concurrent inserts may have shifted every logical
    /// position since then.
    pub fn activate(&mut self) -> FetchCommand<O::Key> {
        self.seq += 1;
        self.state = State::Loading {
            seq: self.seq,
            origin: FetchOrigin::Top,
            prior: None,
        };
        FetchCommand {
            seq: self.seq,
            request: PageRequest::Top {
                limit: self.page_size,
            },
        }
    }

    /// Leave the view, discarding all pagination state.
    pub fn deactivate(&mut self) {
        self.state = State::Inactive;
    }

    /// Request the adjacent page. Returns `None` when the controller is not
    /// showing a page, a fetch is already in flight, or that direction is
    /// exhausted; the caller simply ignores the keypress in those cases.
    pub fn page(&mut self, direction: Direction) -> Option<FetchCommand<O::Key>> {
        let view = match &self.state {
            State::Rendered(view) => view,
            _ => return None,
        };
        let enabled = match direction {
            Direction::Backward => view.back_enabled,
            Direction::Forward => view.forward_enabled,
        };
        if !enabled {
            return None;
        }
        let (first, last) = view.bounds?;
        let limit = self.page_size;

        let (request, origin) = match direction {
            Direction::Forward => (
                PageRequest::After { key: last, limit },
                FetchOrigin::Forward {
                    anchor: last,
                    prior_start: view.window.start,
                    prior_len: view.records.len(),
                },
            ),
            Direction::Backward => (
                PageRequest::Before { key: first, limit },
                FetchOrigin::Backward {
                    anchor: first,
                    prior_start: view.window.start,
                },
            ),
        };

        let prior = match std::mem::replace(&mut self.state, State::Inactive) {
            State::Rendered(view) => view,
            _ => return None,
        };
        self.seq += 1;
        self.state = State::Loading {
            seq: self.seq,
            origin,
            prior: Some(prior),
        };
        Some(FetchCommand {
            seq: self.seq,
            request,
        })
    }

    /// Apply a completed fetch. Results whose sequence number does not match
    /// the newest issued fetch are discarded: an older request resolving
    /// after a newer one must never clobber the newer render.
    pub fn apply(&mut self, seq: u64, result: Result<PaymentsPage>) -> FetchOutcome {
        match &self.state {
            State::Loading { seq: current, .. } if *current == seq => {}
            _ => {
                debug!(seq, "discarding stale fetch result");
                return FetchOutcome::Stale;
            }
        }
        let (origin, prior) = match std::mem::replace(&mut self.state, State::Inactive) {
            State::Loading { origin, prior, .. } => (origin, prior),
            _ => return FetchOutcome::Stale,
        };

        match result {
            Err(error) => self.fail(&origin, prior, error),
            Ok(page) => match Self::validate(&origin, &page, self.page_size) {
                Err(error) => self.fail(&origin, prior, error),
                Ok(()) => self.render(origin, prior, page),
            },
        }
    }

    fn fail(
        &mut self,
        origin: &FetchOrigin<O::Key>,
        prior: Option<PageView<O::Key>>,
        error: PaydeckError,
    ) -> FetchOutcome {
        warn!(%error, "page fetch failed");
        match (origin, prior) {
            (FetchOrigin::Top, _) | (_, None) => {
                self.state = State::Failed;
                FetchOutcome::Failed { error, fatal: true }
            }
            (_, Some(view)) => {
                self.state = State::Rendered(view);
                FetchOutcome::Failed {
                    error,
                    fatal: false,
                }
            }
        }
    }

    /// Shape checks before the page is trusted: size, internal ordering, and
    /// strict-inequality consistency with the cursor the fetch anchored on.
    fn validate(
        origin: &FetchOrigin<O::Key>,
        page: &PaymentsPage,
        page_size: usize,
    ) -> Result<()> {
        if page.payments.len() > page_size {
            return Err(PaydeckError::Malformed(format!(
                "{} records returned for a limit of {}",
                page.payments.len(),
                page_size
            )));
        }
        for pair in page.payments.windows(2) {
            if !O::precedes(O::key_of(&pair[0]), O::key_of(&pair[1])) {
                return Err(PaydeckError::Malformed(
                    "records out of order for this view".to_string(),
                ));
            }
        }
        if let (Some(first), Some(last)) = (page.payments.first(), page.payments.last()) {
            match *origin {
                FetchOrigin::Forward { anchor, .. } => {
                    if !O::precedes(anchor, O::key_of(first)) {
                        return Err(PaydeckError::Malformed(
                            "page overlaps its forward cursor".to_string(),
                        ));
                    }
                }
                FetchOrigin::Backward { anchor, .. } => {
                    if !O::precedes(O::key_of(last), anchor) {
                        return Err(PaydeckError::Malformed(
                            "page overlaps its backward cursor".to_string(),
                        ));
                    }
                }
                FetchOrigin::Top => {}
            }
        }
        Ok(())
    }

    fn render(
        &mut self,
        origin: FetchOrigin<O::Key>,
        prior: Option<PageView<O::Key>>,
        page: PaymentsPage,
    ) -> FetchOutcome {
        if page.payments.is_empty() {
            return self.render_empty(origin, prior, page.total);
        }

        let len = page.payments.len() as u64;
        let start = match origin {
            FetchOrigin::Top => 1,
            FetchOrigin::Forward {
                prior_start,
                prior_len,
                ..
            } => prior_start + prior_len as u64,
            // A short backward page means the top of the order was reached;
            // in an append-only set nothing else can shorten it.
            FetchOrigin::Backward { prior_start, .. } => {
                prior_start.saturating_sub(len).max(1)
            }
        };
        let end = start + len - 1;

        let first = O::key_of(&page.payments[0]);
        let last = O::key_of(&page.payments[page.payments.len() - 1]);

        self.state = State::Rendered(PageView {
            records: page.payments,
            window: Window {
                start,
                end,
                total: page.total,
            },
            back_enabled: start > 1,
            forward_enabled: end < page.total,
            bounds: Some((first, last)),
        });
        FetchOutcome::Rendered
    }

    fn render_empty(
        &mut self,
        origin: FetchOrigin<O::Key>,
        prior: Option<PageView<O::Key>>,
        total: u64,
    ) -> FetchOutcome {
        match origin {
            FetchOrigin::Top => {
                if total > 0 {
                    // The server claims records exist but sent none; showing
                    // a guessed window would lie to the user.
                    return self.fail(
                        &FetchOrigin::Top,
                        prior,
                        PaydeckError::Malformed(format!(
                            "empty top page but total is {total}"
                        )),
                    );
                }
                self.state = State::Rendered(PageView {
                    records: Vec::new(),
                    window: Window {
                        start: 0,
                        end: 0,
                        total: 0,
                    },
                    back_enabled: false,
                    forward_enabled: false,
                    bounds: None,
                });
                FetchOutcome::Rendered
            }
            // Ran past the edge (the advisory total was stale): keep the
            // page we have and stop offering that direction.
            FetchOrigin::Forward { .. } | FetchOrigin::Backward { .. } => {
                let direction = match origin {
                    FetchOrigin::Forward { .. } => Direction::Forward,
                    _ => Direction::Backward,
                };
                match prior {
                    Some(mut view) => {
                        match direction {
                            Direction::Forward => view.forward_enabled = false,
                            Direction::Backward => view.back_enabled = false,
                        }
                        view.window.total = total;
                        self.state = State::Rendered(view);
                        FetchOutcome::EndOfData(direction)
                    }
                    None => {
                        self.state = State::Failed;
                        FetchOutcome::Failed {
                            error: PaydeckError::Malformed(
                                "empty page with no page to fall back to".to_string(),
                            ),
                            fatal: true,
                        }
                    }
                }
            }
        }
    }
}
