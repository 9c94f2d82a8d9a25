//! Application configuration read from the environment.

use std::time::Duration;

use lemmy_api::config::DEFAULT_TIMEOUT;
use lemmy_api::{LemmyApiConfig, DEFAULT_LEMMY_BASE_URL};
use lemmy_tui::config::env_string_opt;
use thiserror::Error;

use crate::view::ViewKind;

/// Communities offered by the picker.
pub const DEFAULT_COMMUNITIES: [&str; 2] = ["linux", "green"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("LEMMY_BROWSER_TIMEOUT_SEC must be a positive number of seconds, got `{0}`")]
    InvalidTimeout(String),
    #[error("LEMMY_BROWSER_START must be `communities` or `frontpage`, got `{0}`")]
    InvalidStart(String),
}

/// Which view the session opens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StartView {
    #[default]
    Communities,
    FrontPage,
}

impl StartView {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "communities" => Some(StartView::Communities),
            "frontpage" | "front-page" => Some(StartView::FrontPage),
            _ => None,
        }
    }

    pub fn root_kind(self) -> ViewKind {
        match self {
            StartView::Communities => ViewKind::CommunityPicker,
            StartView::FrontPage => ViewKind::FrontPage,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub start: StartView,
    pub communities: Vec<String>,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_LEMMY_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            start: StartView::default(),
            communities: DEFAULT_COMMUNITIES.iter().map(|name| name.to_string()).collect(),
        }
    }
}

impl BrowserConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(base_url) = env_string_opt("LEMMY_BROWSER_BASE_URL") {
            config.base_url = base_url.trim().to_string();
        }
        if let Some(raw) = env_string_opt("LEMMY_BROWSER_TIMEOUT_SEC") {
            config.timeout = parse_timeout(&raw).ok_or(ConfigError::InvalidTimeout(raw))?;
        }
        if let Some(raw) = env_string_opt("LEMMY_BROWSER_START") {
            config.start = StartView::parse(&raw).ok_or(ConfigError::InvalidStart(raw))?;
        }
        Ok(config)
    }

    pub fn api_config(&self) -> LemmyApiConfig {
        LemmyApiConfig::new(&self.base_url).with_timeout(self.timeout)
    }
}

fn parse_timeout(raw: &str) -> Option<Duration> {
    let seconds: f64 = raw.trim().parse().ok()?;
    if seconds <= 0.0 {
        return None;
    }
    Duration::try_from_secs_f64(seconds).ok()
}
