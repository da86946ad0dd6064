use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

use super::Transport;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// [`Transport`] backed by a shared [`reqwest::Client`].
///
/// Build one at startup and hand it to the fetcher.  The client keeps its
/// default timeouts; requests are never retried.
///
/// The HTTP status is logged but not acted on: whatever body comes back is
/// handed to the decoder, so an error page surfaces as a malformed response.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &Url) -> Result<Vec<u8>> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if status.is_success() {
            debug!(%url, %status, "response received");
        } else {
            warn!(%url, %status, "non-success status, decoding body anyway");
        }

        Ok(response.bytes().await?.to_vec())
    }
}
