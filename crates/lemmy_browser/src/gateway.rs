//! Remote content access behind a blocking trait.

use lemmy_api::{
    Comment, CommentQuery, LemmyApiClient, LemmyApiConfig, LemmyApiError, Post, PostQuery,
};
use log::debug;
use thiserror::Error;
use tokio::runtime::{Builder, Runtime};

/// Why a listing could not be loaded. Both kinds are shown to the user and recovered from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl From<LemmyApiError> for FetchError {
    fn from(error: LemmyApiError) -> Self {
        if error.is_decode() {
            FetchError::Decode(error.to_string())
        } else {
            FetchError::Network(error.to_string())
        }
    }
}

/// Blocking source of posts and comments.
pub trait ContentGateway {
    fn fetch_posts(&self, query: &PostQuery) -> Result<Vec<Post>, FetchError>;
    fn fetch_comments(&self, query: &CommentQuery) -> Result<Vec<Comment>, FetchError>;
}

impl<G: ContentGateway + ?Sized> ContentGateway for &G {
    fn fetch_posts(&self, query: &PostQuery) -> Result<Vec<Post>, FetchError> {
        (**self).fetch_posts(query)
    }

    fn fetch_comments(&self, query: &CommentQuery) -> Result<Vec<Comment>, FetchError> {
        (**self).fetch_comments(query)
    }
}

/// [`ContentGateway`] over the HTTP client, driven on a private current-thread runtime.
#[derive(Debug)]
pub struct LemmyGateway {
    client: LemmyApiClient,
    runtime: Runtime,
}

impl LemmyGateway {
    pub fn new(config: LemmyApiConfig) -> Result<Self, LemmyApiError> {
        let client = LemmyApiClient::new(config)?;
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|error| {
                LemmyApiError::Runtime(format!("failed to initialize tokio runtime: {error}"))
            })?;
        Ok(Self { client, runtime })
    }

    pub fn client(&self) -> &LemmyApiClient {
        &self.client
    }
}

impl ContentGateway for LemmyGateway {
    fn fetch_posts(&self, query: &PostQuery) -> Result<Vec<Post>, FetchError> {
        debug!("GET post/list {:?}", query.query_pairs());
        Ok(self.runtime.block_on(self.client.fetch_posts(query))?)
    }

    fn fetch_comments(&self, query: &CommentQuery) -> Result<Vec<Comment>, FetchError> {
        debug!("GET comment/list {:?}", query.query_pairs());
        Ok(self.runtime.block_on(self.client.fetch_comments(query))?)
    }
}
