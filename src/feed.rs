//! The growing photo collection and its in-flight guard.
//!
//! [`Feed`] does no I/O.  It decides whether a trigger may start a fetch and
//! applies finished batches; the fetch itself runs on the worker spawned by
//! [`crate::poll`].  Keeping this logic free of channels and tasks makes the
//! append/refresh rules easy to test.

use crate::source::{DisplayRecord, FetchError};

/// What a fetch was started for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    /// Load more: the batch is appended.
    Append,
    /// Start over: the batch replaces everything.
    Refresh,
}

impl FetchKind {
    pub fn from_refresh(is_refresh: bool) -> Self {
        if is_refresh {
            FetchKind::Refresh
        } else {
            FetchKind::Append
        }
    }
}

#[derive(Debug, Default)]
pub struct Feed {
    records: Vec<DisplayRecord>,
    in_flight: Option<FetchKind>,
}

impl Feed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[DisplayRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn in_flight(&self) -> Option<FetchKind> {
        self.in_flight
    }

    /// Try to start a fetch.
    ///
    /// Returns `false` (and changes nothing) when a fetch is already
    /// outstanding; such triggers are dropped, not queued.
    pub fn begin(&mut self, kind: FetchKind) -> bool {
        if self.in_flight.is_some() {
            return false;
        }
        self.in_flight = Some(kind);
        true
    }

    /// Clear the guard without a result, for a fetch that never started.
    pub fn abort(&mut self) {
        self.in_flight = None;
    }

    /// Apply the outcome of the outstanding fetch and clear the guard.
    ///
    /// The kind recorded by [`begin`](Self::begin) decides how the batch is
    /// applied; `kind` is only used when no fetch was begun.
    ///
    /// On success returns the number of records received.  On failure the
    /// collection is untouched and the error is handed back to the caller.
    pub fn complete(
        &mut self,
        kind: FetchKind,
        result: Result<Vec<DisplayRecord>, FetchError>,
    ) -> Result<usize, FetchError> {
        let kind = self.in_flight.take().unwrap_or(kind);

        let batch = result?;
        let count = batch.len();
        match kind {
            FetchKind::Append => self.records.extend(batch),
            FetchKind::Refresh => self.records = batch,
        }
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str) -> DisplayRecord {
        DisplayRecord {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    fn titles(feed: &Feed) -> Vec<&str> {
        feed.records().iter().map(|r| r.display_title()).collect()
    }

    fn feed_with(titles: &[&str]) -> Feed {
        let mut feed = Feed::new();
        assert!(feed.begin(FetchKind::Append));
        feed.complete(
            FetchKind::Append,
            Ok(titles.iter().map(|t| record(t)).collect()),
        )
        .unwrap();
        feed
    }

    #[test]
    fn append_concatenates_in_order() {
        let mut feed = feed_with(&["a", "b"]);

        assert!(feed.begin(FetchKind::Append));
        let count = feed
            .complete(FetchKind::Append, Ok(vec![record("c"), record("d")]))
            .unwrap();

        assert_eq!(count, 2);
        assert_eq!(titles(&feed), ["a", "b", "c", "d"]);
    }

    #[test]
    fn refresh_replaces() {
        let mut feed = feed_with(&["a", "b"]);

        assert!(feed.begin(FetchKind::Refresh));
        feed.complete(FetchKind::Refresh, Ok(vec![record("c"), record("d")]))
            .unwrap();

        assert_eq!(titles(&feed), ["c", "d"]);
    }

    #[test]
    fn duplicates_across_batches_are_kept() {
        let mut feed = feed_with(&["a"]);

        feed.begin(FetchKind::Append);
        feed.complete(FetchKind::Append, Ok(vec![record("a")])).unwrap();

        assert_eq!(titles(&feed), ["a", "a"]);
    }

    #[test]
    fn second_begin_while_in_flight_is_ignored() {
        let mut feed = Feed::new();

        assert!(feed.begin(FetchKind::Append));
        assert!(!feed.begin(FetchKind::Refresh));
        assert_eq!(feed.in_flight(), Some(FetchKind::Append));
    }

    #[test]
    fn failure_leaves_collection_unchanged_and_clears_guard() {
        let mut feed = feed_with(&["a", "b"]);

        assert!(feed.begin(FetchKind::Refresh));
        let err = feed
            .complete(FetchKind::Refresh, Err(FetchError::EmptyResponse))
            .unwrap_err();

        assert!(matches!(err, FetchError::EmptyResponse));
        assert_eq!(titles(&feed), ["a", "b"]);
        assert!(feed.in_flight().is_none());
        assert!(feed.begin(FetchKind::Append), "caller may re-trigger");
    }

    #[test]
    fn empty_refresh_clears_collection() {
        let mut feed = feed_with(&["a"]);

        feed.begin(FetchKind::Refresh);
        feed.complete(FetchKind::Refresh, Ok(vec![])).unwrap();

        assert!(feed.is_empty());
    }

    #[test]
    fn completion_uses_kind_recorded_at_begin() {
        let mut feed = feed_with(&["a", "b"]);

        assert!(feed.begin(FetchKind::Refresh));
        feed.complete(FetchKind::Append, Ok(vec![record("c")])).unwrap();

        assert_eq!(titles(&feed), ["c"]);
        assert!(feed.in_flight().is_none());
    }

    #[test]
    fn from_refresh_maps_flag() {
        assert_eq!(FetchKind::from_refresh(true), FetchKind::Refresh);
        assert_eq!(FetchKind::from_refresh(false), FetchKind::Append);
    }
}
