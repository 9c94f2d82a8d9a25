//! Transport-only Lemmy v3 API client primitives.
//!
//! This crate owns request building, response decoding and the content models for the two
//! listing endpoints the browser reads. It contains no auth code and no UI coupling; callers
//! bring their own async runtime.

pub mod client;
pub mod config;
pub mod error;
pub mod headers;
pub mod models;
pub mod payload;
pub mod query;
pub mod url;

pub use client::LemmyApiClient;
pub use config::LemmyApiConfig;
pub use error::LemmyApiError;
pub use models::{Comment, CommunityRef, Post, PostContent};
pub use query::{CommentQuery, CommentSort, PostQuery, PostSort};
pub use url::{normalize_api_base, DEFAULT_LEMMY_BASE_URL};
