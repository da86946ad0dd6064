//! Photo source layer.
//!
//! This module defines the [`Transport`] trait the fetcher talks through and
//! re-exports the feed's data types.  Concrete pieces live in sub-modules:
//!
//! * [`schema`] — wire types for the search response.
//! * [`display_record`] — the flat record the UI keeps, and the total
//!   mapping into it.
//! * [`rotator`] — the search-term cycle that stands in for pagination.
//! * [`nasa`] — [`PhotoFeedFetcher`], which ties the above together.
//! * [`http`] — the production [`Transport`] on top of `reqwest`.
//!
//! ## For contributors — swapping the transport
//!
//! The fetcher never touches the network directly.  Tests hand it a scripted
//! transport; `main.rs` hands it a [`ReqwestTransport`] built once at
//! startup.  To point the feed at something else (a proxy, a recorded
//! fixture set), implement [`Transport`] and pass it to
//! [`PhotoFeedFetcher::new`].

mod display_record;
mod error;
mod http;
mod nasa;
mod rotator;
pub mod schema;

#[cfg(test)]
pub mod testing;

pub use display_record::DisplayRecord;
pub use error::FetchError;
pub use http::ReqwestTransport;
pub use nasa::PhotoFeedFetcher;
pub use rotator::{SearchTermRotator, DEFAULT_SEARCH_TERMS};

use anyhow::Result;
use async_trait::async_trait;
use url::Url;

/// A minimal HTTP GET.
///
/// Implementations return the raw response body, whatever the status.  Only
/// a failure to obtain a body at all (connection refused, reset, timeout) is
/// an `Err`; an empty body is a successful, empty `Vec`.
///
/// ## Implementing a new transport
///
/// ```ignore
/// pub struct MyTransport { /* connection state */ }
///
/// #[async_trait]
/// impl Transport for MyTransport {
///     async fn get(&self, url: &Url) -> Result<Vec<u8>> {
///         todo!()
///     }
/// }
/// ```
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &Url) -> Result<Vec<u8>>;
}
