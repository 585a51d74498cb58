//! Request middleware.
//!
//! A middleware sees every request before the router does and every response
//! after. It hands control down the chain by calling [`Next::run`]:
//!
//! ```rust,no_run
//! use postsgate::middleware::{BoxFuture, Middleware, Next};
//! use postsgate::Request;
//!
//! struct SlowRequests;
//!
//! impl Middleware for SlowRequests {
//!     fn handle(&self, req: Request, next: Next) -> BoxFuture {
//!         Box::pin(async move {
//!             let path = req.path().to_owned();
//!             let start = std::time::Instant::now();
//!             let res = next.run(req).await;
//!             if start.elapsed().as_secs() >= 1 {
//!                 tracing::warn!(%path, "slow request");
//!             }
//!             res
//!         })
//!     }
//! }
//! ```

mod logger;

use std::sync::Arc;

pub use logger::Logger;
pub use crate::handler::BoxFuture;

use crate::handler::{BoxedHandler, Handler};
use crate::request::Request;
use crate::response::Response;
use crate::router::Router;

/// A layer around request handling. Install with [`Router::layer`].
pub trait Middleware: Send + Sync + 'static {
    fn handle(&self, req: Request, next: Next) -> BoxFuture;
}

/// What sits underneath the middleware chain.
pub(crate) enum Endpoint {
    /// Full routing, for the chain installed on the top-level router.
    Router(Arc<Router>),
    /// A single mounted handler, for the chain of a mounted sub-router.
    Handler(BoxedHandler),
}

/// The remainder of the middleware chain.
pub struct Next {
    chain: Arc<[Arc<dyn Middleware>]>,
    index: usize,
    endpoint: Endpoint,
}

impl Next {
    pub(crate) fn new(chain: Arc<[Arc<dyn Middleware>]>, endpoint: Endpoint) -> Self {
        Self { chain, index: 0, endpoint }
    }

    /// Pass `req` to the next middleware, or to the endpoint once the chain
    /// is exhausted.
    pub async fn run(mut self, req: Request) -> Response {
        match self.chain.get(self.index).cloned() {
            Some(middleware) => {
                self.index += 1;
                middleware.handle(req, self).await
            }
            None => match self.endpoint {
                Endpoint::Router(router) => router.route(req).await,
                Endpoint::Handler(handler) => handler.call(req).await,
            },
        }
    }
}

/// A mounted handler wrapped in its sub-router's middleware.
pub(crate) struct Layered {
    chain: Arc<[Arc<dyn Middleware>]>,
    inner: BoxedHandler,
}

impl Layered {
    pub(crate) fn new(chain: Arc<[Arc<dyn Middleware>]>, inner: BoxedHandler) -> Self {
        Self { chain, inner }
    }
}

impl Handler for Layered {
    fn call(&self, req: Request) -> BoxFuture {
        let next = Next::new(Arc::clone(&self.chain), Endpoint::Handler(Arc::clone(&self.inner)));
        Box::pin(next.run(req))
    }
}
