//! NASA image-library fetcher.
//!
//! [`PhotoFeedFetcher`] turns "give me the next page" into one search
//! request: it takes the next term from its [`SearchTermRotator`], builds
//! `{base_url}/search?q={term}&media_type=image&page_size=25`, issues it
//! through the injected [`Transport`], and maps the decoded items into
//! [`DisplayRecord`]s in source order.
//!
//! There is no retry, no caching and no timeout beyond the transport's own.
//! A failed call makes exactly one request and reports exactly one error.

use tracing::{info, warn};
use url::Url;

use super::schema::SearchEnvelope;
use super::{DisplayRecord, FetchError, SearchTermRotator, Transport};

/// Results requested per search.  Fixed; never varies between pages.
pub const PAGE_SIZE: u32 = 25;

/// Only still images are requested.
pub const MEDIA_TYPE: &str = "image";

pub struct PhotoFeedFetcher {
    base_url: String,
    rotator: SearchTermRotator,
    transport: Box<dyn Transport>,
}

impl PhotoFeedFetcher {
    /// Create a fetcher.
    ///
    /// # Arguments
    ///
    /// * `base_url` — API root, e.g. `https://images-api.nasa.gov`.  A
    ///   trailing `/` is fine.
    /// * `rotator` — the term cycle; the fetcher takes ownership so that only
    ///   one caller can ever advance it.
    /// * `transport` — performs the GET.
    pub fn new(
        base_url: impl Into<String>,
        rotator: SearchTermRotator,
        transport: Box<dyn Transport>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            rotator,
            transport,
        }
    }

    pub fn rotator(&self) -> &SearchTermRotator {
        &self.rotator
    }

    /// Fetch the next "page": a search for the next term in the rotation.
    ///
    /// The rotation advances even when the call fails.
    pub async fn fetch_batch(&mut self) -> Result<Vec<DisplayRecord>, FetchError> {
        let term = self.rotator.next().to_owned();
        self.fetch_term(&term).await
    }

    /// Run one search for `term` without touching the rotation.
    pub async fn fetch_term(&self, term: &str) -> Result<Vec<DisplayRecord>, FetchError> {
        let url = self.build_search_url(term)?;
        info!(term, %url, "fetching batch");

        let result = match self.transport.get(&url).await {
            Ok(body) => Self::parse_body(&body),
            Err(e) => Err(FetchError::TransportFailure(e)),
        };

        match &result {
            Ok(records) => info!(term, count = records.len(), "batch fetched"),
            Err(e) => warn!(term, kind = e.kind(), error = %e, "batch failed"),
        }
        result
    }

    /// Build the search URL for `term`.
    ///
    /// The term is query-encoded, so any text is accepted except a blank one.
    /// An unusable base URL is also reported here, before any I/O.
    pub fn build_search_url(&self, term: &str) -> Result<Url, FetchError> {
        if term.trim().is_empty() {
            return Err(FetchError::InvalidRequest("blank search term".into()));
        }

        let base = self.base_url.trim_end_matches('/');
        let mut url = Url::parse(base)
            .map_err(|e| FetchError::InvalidRequest(format!("bad base URL {base:?}: {e}")))?;

        url.path_segments_mut()
            .map_err(|()| FetchError::InvalidRequest(format!("base URL {base:?} cannot carry a path")))?
            .pop_if_empty()
            .push("search");

        url.query_pairs_mut()
            .append_pair("q", term)
            .append_pair("media_type", MEDIA_TYPE)
            .append_pair("page_size", &PAGE_SIZE.to_string());

        Ok(url)
    }

    /// Decode a response body into records.
    ///
    /// This is a pure function (no I/O) so that tests can exercise the
    /// decoding and mapping without a transport.
    pub fn parse_body(body: &[u8]) -> Result<Vec<DisplayRecord>, FetchError> {
        if body.is_empty() {
            return Err(FetchError::EmptyResponse);
        }

        let envelope: SearchEnvelope =
            serde_json::from_slice(body).map_err(FetchError::MalformedResponse)?;

        Ok(envelope
            .collection
            .items
            .iter()
            .map(DisplayRecord::from_item)
            .collect())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
