use thiserror::Error;

/// Why a single fetch produced no records.
///
/// Every kind is recoverable: the caller decides whether to show it and
/// whether to try again.  None of them carries partial data.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("transport failure: {0:#}")]
    TransportFailure(#[source] anyhow::Error),

    #[error("empty response body")]
    EmptyResponse,

    #[error("malformed response: {0}")]
    MalformedResponse(#[source] serde_json::Error),
}

impl FetchError {
    /// Short label for the error kind, used in logs and the error notice.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::InvalidRequest(_) => "invalid request",
            FetchError::TransportFailure(_) => "transport failure",
            FetchError::EmptyResponse => "empty response",
            FetchError::MalformedResponse(_) => "malformed response",
        }
    }
}
