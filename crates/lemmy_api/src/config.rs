use std::collections::BTreeMap;
use std::time::Duration;

use crate::url::DEFAULT_LEMMY_BASE_URL;

/// Request timeout applied unless the caller overrides it.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Transport configuration for Lemmy API requests.
#[derive(Debug, Clone)]
pub struct LemmyApiConfig {
    /// Instance URL; normalized to its `/api/v3` base by the client.
    pub base_url: String,
    /// Optional `User-Agent` override.
    pub user_agent: Option<String>,
    /// Additional headers merged into request headers.
    pub extra_headers: BTreeMap<String, String>,
    /// Whole-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for LemmyApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_LEMMY_BASE_URL.to_string(),
            user_agent: None,
            extra_headers: BTreeMap::new(),
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }
}

impl LemmyApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn without_timeout(mut self) -> Self {
        self.timeout = None;
        self
    }

    pub fn insert_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers.insert(key.into(), value.into());
        self
    }
}
