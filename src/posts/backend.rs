//! The seam between the posts handlers and wherever posts actually live.

use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::BodyExt;
use http_body_util::combinators::UnsyncBoxBody;
use http_body_util::Full;

use super::model::PostWithoutId;

/// Streaming body of an upstream response.
pub type UpstreamBody = UnsyncBoxBody<Bytes, UpstreamError>;

/// Status, headers and a not-yet-read body, as the upstream API sent them.
pub type UpstreamResponse = http::Response<UpstreamBody>;

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("upstream request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    #[error("upstream request failed: {0}")]
    Transport(#[source] reqwest::Error),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout(e)
        } else {
            Self::Transport(e)
        }
    }
}

/// Source of truth for posts.
///
/// Production code talks to the placeholder API over HTTP
/// ([`JsonPlaceholder`](super::JsonPlaceholder)); tests hand the resource a
/// fixture that answers from memory.
#[async_trait]
pub trait PostsBackend: Send + Sync + 'static {
    /// `GET /posts` upstream.
    async fn get_posts(&self) -> Result<UpstreamResponse, UpstreamError>;

    /// `POST /posts` upstream, forwarding `post` as the JSON body.
    async fn create_post(&self, post: &PostWithoutId) -> Result<UpstreamResponse, UpstreamError>;
}

/// Builds an in-memory upstream response. Meant for fixtures.
pub fn upstream_response(status: u16, body: impl Into<Bytes>) -> UpstreamResponse {
    let body: UpstreamBody = Full::new(body.into())
        .map_err(|never| match never {})
        .boxed_unsync();
    let mut res = http::Response::new(body);
    *res.status_mut() = http::StatusCode::from_u16(status)
        .unwrap_or(http::StatusCode::INTERNAL_SERVER_ERROR);
    res
}
