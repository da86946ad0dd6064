//! Background fetch worker.
//!
//! A single tokio task owns the [`PhotoFeedFetcher`] (and with it the term
//! rotation).  The UI loop sends it [`FetchKind`] requests and drains
//! [`PollMsg`] completions on its own tick, so feed state is only ever
//! mutated on the UI side.
//!
//! ## For contributors
//!
//! The worker handles one request at a time, in order.  It does not guard
//! against overlapping requests itself; [`crate::feed::Feed`] makes sure the
//! UI never sends a second one while the first is outstanding.

use tokio::sync::mpsc;
use tracing::debug;

use crate::feed::FetchKind;
use crate::source::{DisplayRecord, FetchError, PhotoFeedFetcher};

/// A finished fetch, sent from the worker to the UI loop.
#[derive(Debug)]
pub struct PollMsg {
    pub kind: FetchKind,
    /// Term that was searched for.
    pub term: String,
    pub result: Result<Vec<DisplayRecord>, FetchError>,
}

/// Sending half of the worker's request queue.
#[derive(Clone)]
pub struct FetchHandle {
    tx: mpsc::UnboundedSender<FetchKind>,
}

impl FetchHandle {
    /// Queue a fetch.  Returns `false` if the worker has stopped.
    pub fn request(&self, kind: FetchKind) -> bool {
        self.tx.send(kind).is_ok()
    }

    /// A handle with no worker behind it; the test reads requests directly.
    #[cfg(test)]
    pub fn detached() -> (Self, mpsc::UnboundedReceiver<FetchKind>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

/// Spawn the fetch worker on the current tokio runtime.
///
/// Returns the request handle and the receiver the UI loop should drain on
/// every tick.  The task exits once either side is dropped.
pub fn spawn(mut fetcher: PhotoFeedFetcher) -> (FetchHandle, mpsc::UnboundedReceiver<PollMsg>) {
    let (req_tx, mut req_rx) = mpsc::unbounded_channel::<FetchKind>();
    let (msg_tx, msg_rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        while let Some(kind) = req_rx.recv().await {
            let term = fetcher.rotator().peek().to_owned();
            let result = fetcher.fetch_batch().await;
            // If the receiver is gone the UI loop has exited; stop quietly.
            if msg_tx.send(PollMsg { kind, term, result }).is_err() {
                break;
            }
        }
        debug!("fetch worker stopped");
    });

    (FetchHandle { tx: req_tx }, msg_rx)
}
