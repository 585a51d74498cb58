//! The `/posts` resource.
//!
//! Two operations, both forwarded to a [`PostsBackend`]:
//!
//! | Route | Operation |
//! |---|---|
//! | `GET /` | [`PostsResource::list`] |
//! | `POST /` | [`PostsResource::create`] |
//!
//! Routes are relative; mount the sub-router wherever the resource lives:
//!
//! ```rust,no_run
//! # use std::time::Duration;
//! use postsgate::Router;
//! use postsgate::posts::{JsonPlaceholder, PostsResource};
//!
//! # fn main() -> Result<(), postsgate::posts::UpstreamError> {
//! let backend = JsonPlaceholder::new("https://jsonplaceholder.typicode.com", Duration::from_secs(5))?;
//! let app = Router::new().mount("/posts", PostsResource::new(backend).routes());
//! # Ok(())
//! # }
//! ```

mod backend;
mod model;
mod placeholder;

use std::sync::Arc;

use http_body_util::BodyExt;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{error, warn};

pub use backend::{upstream_response, PostsBackend, UpstreamBody, UpstreamError, UpstreamResponse};
pub use model::{Post, PostWithoutId};
pub use placeholder::JsonPlaceholder;

use crate::method::Method;
use crate::request::Request;
use crate::response::{IntoResponse, Json, Response};
use crate::router::Router;
use crate::status::Status;

/// Why a posts request could not be served.
#[derive(Debug, thiserror::Error)]
pub enum PostsError {
    #[error("expected application/json, got `{0}`")]
    UnsupportedMediaType(String),

    #[error("invalid request body: {0}")]
    InvalidBody(#[source] serde_json::Error),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error("upstream answered with status {0}")]
    UpstreamStatus(u16),

    #[error("malformed upstream response: {0}")]
    MalformedUpstream(#[source] serde_json::Error),
}

impl PostsError {
    pub fn status(&self) -> Status {
        match self {
            Self::UnsupportedMediaType(_) => Status::UnsupportedMediaType,
            Self::InvalidBody(_) => Status::BadRequest,
            Self::Upstream(UpstreamError::Timeout(_)) => Status::GatewayTimeout,
            Self::Upstream(_) | Self::UpstreamStatus(_) | Self::MalformedUpstream(_) => {
                Status::BadGateway
            }
        }
    }
}

impl IntoResponse for PostsError {
    fn into_response(self) -> Response {
        let status = self.status();
        if u16::from(status) >= 500 {
            error!("posts: {self}");
        } else {
            warn!("posts: {self}");
        }
        let body = json!({ "error": self.to_string() });
        Response::builder()
            .status(status)
            .json(body.to_string().into_bytes())
    }
}

/// The posts resource, holding the backend every request is forwarded to.
#[derive(Clone)]
pub struct PostsResource {
    backend: Arc<dyn PostsBackend>,
}

impl PostsResource {
    pub fn new(backend: impl PostsBackend) -> Self {
        Self { backend: Arc::new(backend) }
    }

    /// Sub-router with `GET /` and `POST /`.
    pub fn routes(self) -> Router {
        let list = self.clone();
        let create = self;
        Router::new()
            .on(Method::Get, "/", move |req: Request| {
                let resource = list.clone();
                async move { resource.list(req).await }
            })
            .on(Method::Post, "/", move |req: Request| {
                let resource = create.clone();
                async move { resource.create(req).await }
            })
    }

    /// Fetches every post upstream and relays it with the upstream status.
    pub async fn list(&self, _req: Request) -> Result<Response, PostsError> {
        let res = self.backend.get_posts().await?;
        let (status, posts) = read_json::<Vec<Post>>(res).await?;
        Ok((status, Json(posts)).into_response())
    }

    /// Creates a post upstream and returns it with its assigned id.
    pub async fn create(&self, req: Request) -> Result<Response, PostsError> {
        if let Some(content_type) = req.header("content-type") {
            if !is_json(content_type) {
                return Err(PostsError::UnsupportedMediaType(content_type.to_owned()));
            }
        }
        let new_post: PostWithoutId =
            serde_json::from_slice(req.body()).map_err(PostsError::InvalidBody)?;

        let res = self.backend.create_post(&new_post).await?;
        let (_, post) = read_json::<Post>(res).await?;
        Ok(Json(post).into_response())
    }
}

/// Drains a successful upstream response and decodes it as `T`.
async fn read_json<T: DeserializeOwned>(res: UpstreamResponse) -> Result<(u16, T), PostsError> {
    let status = res.status();
    if !status.is_success() {
        return Err(PostsError::UpstreamStatus(status.as_u16()));
    }
    let body = res.into_body().collect().await?.to_bytes();
    let value = serde_json::from_slice(&body).map_err(PostsError::MalformedUpstream)?;
    Ok((status.as_u16(), value))
}

fn is_json(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}
