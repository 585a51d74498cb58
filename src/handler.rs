//! Route handlers.
//!
//! A handler is anything that turns a [`Request`] into a future of
//! something [`IntoResponse`]. In this crate that is either a plain
//! `async fn` (the root greeting) or a closure that clones captured state,
//! such as a posts backend, into an `async move` block:
//!
//! ```rust,no_run
//! # use std::sync::Arc;
//! # use postsgate::{Method, Request, Response, Router};
//! let greeting = Arc::new(String::from("hi"));
//! Router::new().on(Method::Get, "/", move |_req: Request| {
//!     let greeting = Arc::clone(&greeting);
//!     async move { Response::text(greeting.as_str()) }
//! });
//! ```
//!
//! The router stores every handler as one `Arc<dyn Handler>`, shared between
//! a sub-router and every prefix it is mounted under.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::request::Request;
use crate::response::{IntoResponse, Response};

/// A heap-allocated, type-erased future that resolves to a [`Response`].
pub type BoxFuture = Pin<Box<dyn Future<Output = Response> + Send + 'static>>;

/// A stored route handler.
pub(crate) type BoxedHandler = Arc<dyn Handler>;

/// Implemented for every valid route handler.
///
/// Object-safe, so the routing table can hold handlers of different types.
/// Closures and `async fn`s get it from the blanket impl below; middleware
/// wrappers implement it by hand.
pub trait Handler: Send + Sync + 'static {
    fn call(&self, req: Request) -> BoxFuture;
}

impl<F, Fut, R> Handler for F
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    fn call(&self, req: Request) -> BoxFuture {
        let fut = self(req);
        Box::pin(async move { fut.await.into_response() })
    }
}
