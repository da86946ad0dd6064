//! In-memory [`Transport`] for tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use tokio::sync::Semaphore;
use url::Url;

use super::schema::{Collection, Item, ItemData, ItemLink, SearchEnvelope};
use super::Transport;

/// Serve a `{"collection":{"items":[...]}}` body with one item per title.
///
/// Each item links to `https://images.example.com/{title}.jpg`.
pub fn envelope_json(titles: &[&str]) -> String {
    let items = titles
        .iter()
        .map(|title| Item {
            data: vec![ItemData {
                title: title.to_string(),
                description: None,
                date_created: None,
                center: None,
            }],
            links: Some(vec![ItemLink {
                href: format!("https://images.example.com/{title}.jpg"),
                rel: None,
                render: None,
            }]),
        })
        .collect();

    serde_json::to_string(&SearchEnvelope {
        collection: Collection { items },
    })
    .unwrap()
}

/// Shared view of the URLs a [`ScriptedTransport`] was asked for.
#[derive(Clone, Default)]
pub struct RequestLog(Arc<Mutex<Vec<Url>>>);

impl RequestLog {
    pub fn urls(&self) -> Vec<Url> {
        self.0.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.0.lock().unwrap().len()
    }
}

/// Replays a fixed script of responses, one per request.
///
/// When the script runs out every further request fails.  With
/// [`gated`](Self::gated), each response waits for a permit on the returned
/// semaphore, which lets a test hold a fetch in flight.
pub struct ScriptedTransport {
    script: Mutex<VecDeque<Result<Vec<u8>>>>,
    log: RequestLog,
    gate: Option<Arc<Semaphore>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            log: RequestLog::default(),
            gate: None,
        }
    }

    pub fn respond_with(self, body: impl Into<Vec<u8>>) -> Self {
        self.script.lock().unwrap().push_back(Ok(body.into()));
        self
    }

    pub fn fail_with(self, message: &str) -> Self {
        self.script
            .lock()
            .unwrap()
            .push_back(Err(anyhow!(message.to_string())));
        self
    }

    /// Hold every response until a permit is added to the returned gate.
    pub fn gated(mut self) -> (Self, Arc<Semaphore>) {
        let gate = Arc::new(Semaphore::new(0));
        self.gate = Some(Arc::clone(&gate));
        (self, gate)
    }

    pub fn request_log(&self) -> RequestLog {
        self.log.clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn get(&self, url: &Url) -> Result<Vec<u8>> {
        self.log.0.lock().unwrap().push(url.clone());

        if let Some(gate) = &self.gate {
            gate.acquire().await?.forget();
        }

        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(anyhow!("no scripted response left for {url}")))
    }
}
