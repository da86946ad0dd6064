use ratatui::widgets::ListState;
use tracing::{debug, error, warn};

use crate::feed::{Feed, FetchKind};
use crate::poll::{FetchHandle, PollMsg};
use crate::source::DisplayRecord;

/// Moving the selection this close to the end of the list loads more.
pub const LOAD_MORE_THRESHOLD: usize = 5;

pub struct App {
    /// Accumulated photos and the in-flight guard.
    pub feed: Feed,
    /// List selection state for scrolling.
    pub list_state: ListState,
    /// Whether the user has requested to quit.
    pub quit: bool,
    /// Last fetch status message.
    pub status: String,
    /// Error notice shown over the list until dismissed.
    pub error: Option<String>,
    fetcher: FetchHandle,
}

impl App {
    pub fn new(fetcher: FetchHandle) -> Self {
        Self {
            feed: Feed::new(),
            list_state: ListState::default(),
            quit: false,
            status: "Starting…".into(),
            error: None,
            fetcher,
        }
    }

    pub fn records(&self) -> &[DisplayRecord] {
        self.feed.records()
    }

    pub fn selected_record(&self) -> Option<&DisplayRecord> {
        self.list_state
            .selected()
            .and_then(|i| self.feed.records().get(i))
    }

    pub fn is_loading(&self) -> bool {
        self.feed.in_flight().is_some()
    }

    // -- fetching ------------------------------------------------------------

    /// Ask the worker for the next batch.
    ///
    /// Returns `false` without sending anything if a fetch is already in
    /// flight.  The result arrives later as a [`PollMsg`] for [`apply`].
    ///
    /// [`apply`]: App::apply
    pub fn fetch_next_batch(&mut self, is_refresh: bool) -> bool {
        let kind = FetchKind::from_refresh(is_refresh);
        if !self.feed.begin(kind) {
            debug!(?kind, "fetch already in flight, trigger ignored");
            return false;
        }

        if !self.fetcher.request(kind) {
            warn!("fetch worker is gone");
            self.feed.abort();
            self.status = "Fetch worker stopped".into();
            return false;
        }

        self.status = match kind {
            FetchKind::Append => "Loading more photos…".into(),
            FetchKind::Refresh => "Refreshing…".into(),
        };
        true
    }

    pub fn refresh(&mut self) {
        self.fetch_next_batch(true);
    }

    /// Apply a finished fetch.  Must be called from the UI loop.
    pub fn apply(&mut self, msg: PollMsg) {
        let PollMsg { kind, term, result } = msg;
        let kind = self.feed.in_flight().unwrap_or(kind);

        match self.feed.complete(kind, result) {
            Ok(count) => {
                self.status = format!("Fetched {count} photos for \"{term}\"");
                if kind == FetchKind::Refresh {
                    let first = (!self.feed.is_empty()).then_some(0);
                    self.list_state.select(first);
                }
            }
            Err(e) => {
                error!(term = %term, kind = e.kind(), error = %e, "failed to load photos");
                self.status = format!("Error: {}", e.kind());
                self.error = Some(format!("Unable to load NASA photos ({e}). Please try again."));
            }
        }
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Trigger an append once the selection nears the end of a non-empty list.
    fn load_more_if_needed(&mut self) {
        let len = self.feed.len();
        if len == 0 || self.is_loading() {
            return;
        }
        if let Some(i) = self.list_state.selected() {
            if len - 1 - i <= LOAD_MORE_THRESHOLD {
                self.fetch_next_batch(false);
            }
        }
    }

    // -- navigation ----------------------------------------------------------

    pub fn select_next(&mut self) {
        if self.feed.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1).min(self.feed.len() - 1),
            None => 0,
        };
        self.list_state.select(Some(i));
        self.load_more_if_needed();
    }

    pub fn select_previous(&mut self) {
        if self.feed.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn select_first(&mut self) {
        if !self.feed.is_empty() {
            self.list_state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        if !self.feed.is_empty() {
            self.list_state.select(Some(self.feed.len() - 1));
            self.load_more_if_needed();
        }
    }
}
