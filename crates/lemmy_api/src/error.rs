use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LemmyApiError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}: {message}")]
    Status {
        status: StatusCode,
        url: String,
        message: String,
    },

    #[error("failed to decode {what}: {source}")]
    Decode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("runtime error: {0}")]
    Runtime(String),
}

impl LemmyApiError {
    /// Classify a transport failure, splitting timeouts out of generic request errors.
    pub fn from_request(error: reqwest::Error, url: &str) -> Self {
        if error.is_timeout() {
            Self::Timeout {
                url: url.to_string(),
            }
        } else {
            Self::Request(error)
        }
    }

    /// Whether the payload arrived but did not have the expected shape.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

/// Lemmy reports failures as `{"error": "<code>"}`, sometimes with a `message`.
#[derive(Debug, Deserialize)]
struct ErrorPayload {
    error: Option<String>,
    message: Option<String>,
}

/// Best human-readable message for a non-success response.
pub fn parse_error_message(status: StatusCode, body: &str) -> String {
    let fallback = || {
        if body.trim().is_empty() {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        } else {
            body.trim().to_string()
        }
    };

    let Ok(payload) = serde_json::from_str::<ErrorPayload>(body) else {
        return fallback();
    };

    payload
        .message
        .or(payload.error)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(fallback)
}
