//! The assembled application: root greeting, `/posts`, access log.

use crate::method::Method;
use crate::middleware::Logger;
use crate::posts::{PostsBackend, PostsResource};
use crate::request::Request;
use crate::response::Response;
use crate::router::Router;

/// Builds the full router around `backend`.
pub fn app(backend: impl PostsBackend) -> Router {
    Router::new()
        .on(Method::Get, "/", hello)
        .mount("/posts", PostsResource::new(backend).routes())
        .layer(Logger)
}

async fn hello(_req: Request) -> Response {
    Response::text("Hello World!")
}
