//! Environment configuration.

use std::env;

use log::LevelFilter;

use crate::logging::parse_level;
use crate::runtime::DEFAULT_PREVIEW_ROWS;

#[derive(Debug, Clone)]
pub struct EnvConfig {
    pub log_path: Option<String>,
    pub log_level: LevelFilter,
    pub preview_rows: usize,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        Self {
            log_path: env_string_opt("LEMMY_TUI_LOG"),
            log_level: env_string_opt("LEMMY_TUI_LOG_LEVEL")
                .and_then(|value| parse_level(&value))
                .unwrap_or(LevelFilter::Info),
            preview_rows: env_usize("LEMMY_TUI_PREVIEW_ROWS").unwrap_or(DEFAULT_PREVIEW_ROWS),
        }
    }
}

pub fn env_string_opt(key: &str) -> Option<String> {
    env::var(key).ok().and_then(|value| {
        if value.trim().is_empty() {
            None
        } else {
            Some(value)
        }
    })
}

pub fn env_usize(key: &str) -> Option<usize> {
    env_string_opt(key).and_then(|value| value.trim().parse().ok())
}
