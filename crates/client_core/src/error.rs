use shared::error::{ApiError, ErrorCode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid catalog url '{url}': {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        source: reqwest::Error,
    },
    #[error("{url} responded with status {status} ({code:?}): {message}")]
    Status {
        url: String,
        status: u16,
        code: ErrorCode,
        message: String,
    },
    #[error("could not decode catalog payload from {url}: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },
}

impl CatalogError {
    /// Builds a status error, preferring the server's own message when the
    /// body carries one.
    pub fn from_status(url: impl Into<String>, status: u16, body: &str) -> Self {
        let parsed = ApiError::from_body(body);
        let code = parsed
            .as_ref()
            .and_then(|err| err.code)
            .unwrap_or_else(|| ErrorCode::from_status(status));
        let message = parsed
            .map(|err| err.message)
            .unwrap_or_else(|| "no error details".to_string());
        CatalogError::Status {
            url: url.into(),
            status,
            code,
            message,
        }
    }
}
