use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use crate::config::LemmyApiConfig;
use crate::error::{parse_error_message, LemmyApiError};
use crate::headers::build_headers;
use crate::models::{Comment, Post};
use crate::payload::{CommentListResponse, PostListResponse};
use crate::query::{CommentQuery, PostQuery};
use crate::url::{endpoint, normalize_api_base};

const POST_LIST_PATH: &str = "post/list";
const COMMENT_LIST_PATH: &str = "comment/list";

#[derive(Debug)]
pub struct LemmyApiClient {
    http: Client,
    config: LemmyApiConfig,
    api_base: String,
}

impl LemmyApiClient {
    pub fn new(config: LemmyApiConfig) -> Result<Self, LemmyApiError> {
        let api_base = normalize_api_base(&config.base_url);
        let parsed = Url::parse(&api_base)
            .map_err(|error| LemmyApiError::InvalidBaseUrl(format!("{api_base}: {error}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(LemmyApiError::InvalidBaseUrl(format!(
                "{api_base}: unsupported scheme {}",
                parsed.scheme()
            )));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(LemmyApiError::from)?;
        Ok(Self {
            http,
            config,
            api_base,
        })
    }

    pub fn config(&self) -> &LemmyApiConfig {
        &self.config
    }

    /// The normalized `.../api/v3` base every endpoint hangs off.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub fn build_headers(&self) -> Result<HeaderMap, LemmyApiError> {
        let mut out = HeaderMap::new();
        for (key, value) in build_headers(&self.config) {
            out.insert(
                HeaderName::from_bytes(key.as_bytes()).map_err(|_| {
                    LemmyApiError::InvalidBaseUrl(format!("invalid header key: {key}"))
                })?,
                HeaderValue::from_str(&value).map_err(|_| {
                    LemmyApiError::InvalidBaseUrl(format!("invalid header value for {key}"))
                })?,
            );
        }
        Ok(out)
    }

    pub fn build_posts_request(&self, query: &PostQuery) -> Result<RequestBuilder, LemmyApiError> {
        Ok(self
            .http
            .get(endpoint(&self.api_base, POST_LIST_PATH))
            .headers(self.build_headers()?)
            .query(&query.query_pairs()))
    }

    pub fn build_comments_request(
        &self,
        query: &CommentQuery,
    ) -> Result<RequestBuilder, LemmyApiError> {
        Ok(self
            .http
            .get(endpoint(&self.api_base, COMMENT_LIST_PATH))
            .headers(self.build_headers()?)
            .query(&query.query_pairs()))
    }

    pub async fn fetch_posts(&self, query: &PostQuery) -> Result<Vec<Post>, LemmyApiError> {
        let response: PostListResponse = self
            .get_json(self.build_posts_request(query)?, "post list")
            .await?;
        Ok(response.into_posts())
    }

    pub async fn fetch_comments(
        &self,
        query: &CommentQuery,
    ) -> Result<Vec<Comment>, LemmyApiError> {
        let response: CommentListResponse = self
            .get_json(self.build_comments_request(query)?, "comment list")
            .await?;
        Ok(response.into_comments())
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        what: &'static str,
    ) -> Result<T, LemmyApiError> {
        let request = request.build()?;
        let url = request.url().to_string();

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|error| LemmyApiError::from_request(error, &url))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|error| LemmyApiError::from_request(error, &url))?;

        if !status.is_success() {
            return Err(LemmyApiError::Status {
                status,
                url,
                message: parse_error_message(status, &body),
            });
        }

        serde_json::from_str(&body).map_err(|source| LemmyApiError::Decode { what, source })
    }
}
