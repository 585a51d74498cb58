use std::time::Duration;

use async_trait::async_trait;
use http_body_util::BodyExt;
use reqwest::Client;
use tracing::debug;

use super::backend::{PostsBackend, UpstreamError, UpstreamResponse};
use super::model::PostWithoutId;

/// [`PostsBackend`] backed by a JSONPlaceholder-style REST API.
pub struct JsonPlaceholder {
    client: Client,
    /// `{base}/posts`
    posts_url: String,
}

impl JsonPlaceholder {
    /// Creates a backend for the API rooted at `base_url`.
    ///
    /// `timeout` bounds each upstream call end to end, body included.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed (for
    /// example, when the TLS backend fails to initialise).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, UpstreamError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            posts_url: format!("{}/posts", base_url.trim_end_matches('/')),
        })
    }

    pub fn posts_url(&self) -> &str {
        &self.posts_url
    }
}

#[async_trait]
impl PostsBackend for JsonPlaceholder {
    async fn get_posts(&self) -> Result<UpstreamResponse, UpstreamError> {
        debug!(url = %self.posts_url, "GET upstream");
        let res = self.client.get(&self.posts_url).send().await?;
        Ok(into_upstream(res))
    }

    async fn create_post(&self, post: &PostWithoutId) -> Result<UpstreamResponse, UpstreamError> {
        debug!(url = %self.posts_url, "POST upstream");
        let res = self.client.post(&self.posts_url).json(post).send().await?;
        Ok(into_upstream(res))
    }
}

/// Keeps the body unread; the handler decides how much of it to consume.
fn into_upstream(res: reqwest::Response) -> UpstreamResponse {
    let res: http::Response<reqwest::Body> = res.into();
    res.map(|body| body.map_err(UpstreamError::from).boxed_unsync())
}
