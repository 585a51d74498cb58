//! Radix-tree request router.
//!
//! One tree per HTTP method. O(path-length) lookup. Sub-routers are mounted
//! under a prefix by re-registering their routes, so a mounted tree costs
//! nothing extra at request time.

use std::collections::HashMap;
use std::sync::Arc;

use matchit::Router as MatchitRouter;

use crate::handler::{BoxedHandler, Handler};
use crate::method::Method;
use crate::middleware::{Endpoint, Layered, Middleware, Next};
use crate::request::Request;
use crate::response::{IntoResponse, Response};
use crate::status::Status;

/// The application router.
///
/// Build it once at startup; pass it to [`Server::serve`](crate::Server::serve).
/// Every builder method returns `self` so registrations chain naturally:
///
/// ```rust,no_run
/// # use postsgate::{Method, Request, Response, Router};
/// # async fn list(_: Request) -> Response { Response::text("") }
/// # async fn create(_: Request) -> Response { Response::text("") }
/// # async fn root(_: Request) -> Response { Response::text("") }
/// let posts = Router::new()
///     .on(Method::Get,  "/", list)
///     .on(Method::Post, "/", create);
///
/// Router::new()
///     .on(Method::Get, "/", root)
///     .mount("/posts", posts);
/// ```
pub struct Router {
    trees: HashMap<Method, MatchitRouter<BoxedHandler>>,
    // Registration order, kept so `mount` can replay routes under a prefix.
    routes: Vec<(Method, String, BoxedHandler)>,
    chain: Arc<[Arc<dyn Middleware>]>,
}

/// Why no handler matched a method + path.
pub(crate) enum Miss {
    MethodNotAllowed(Vec<Method>),
    NotFound,
}

impl Router {
    pub fn new() -> Self {
        Self { trees: HashMap::new(), routes: Vec::new(), chain: Arc::from(Vec::new()) }
    }

    /// Register a handler for a method + path pair.
    ///
    /// # Panics
    ///
    /// Panics if `path` is malformed or conflicts with an existing route.
    /// Routes are fixed at startup, so this is a programming error.
    pub fn on(self, method: Method, path: &str, handler: impl Handler) -> Self {
        self.add(method, path.to_owned(), Arc::new(handler))
    }

    /// Attach every route of `sub` under `prefix`.
    ///
    /// A sub-route registered at `/` answers on both `prefix` and `prefix/`.
    /// Middleware installed on `sub` wraps only the mounted routes.
    pub fn mount(mut self, prefix: &str, sub: Router) -> Self {
        let sub_chain = sub.chain;
        for (method, path, handler) in sub.routes {
            let handler = if sub_chain.is_empty() {
                handler
            } else {
                Arc::new(Layered::new(Arc::clone(&sub_chain), handler)) as BoxedHandler
            };
            for full in join_paths(prefix, &path) {
                self = self.add(method, full, Arc::clone(&handler));
            }
        }
        self
    }

    /// Install a middleware around every request this router handles,
    /// including ones that end in `404` or `405`.
    ///
    /// The first layer installed is the outermost.
    pub fn layer(mut self, middleware: impl Middleware) -> Self {
        let mut chain = self.chain.to_vec();
        chain.push(Arc::new(middleware));
        self.chain = chain.into();
        self
    }

    /// Run `req` through the middleware chain and the routing table.
    pub async fn dispatch(self: Arc<Self>, req: Request) -> Response {
        let chain = Arc::clone(&self.chain);
        Next::new(chain, Endpoint::Router(self)).run(req).await
    }

    fn add(mut self, method: Method, path: String, handler: BoxedHandler) -> Self {
        self.trees
            .entry(method)
            .or_default()
            .insert(path.clone(), Arc::clone(&handler))
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self.routes.push((method, path, handler));
        self
    }

    pub(crate) fn resolve(&self, method: Method, path: &str) -> Result<BoxedHandler, Miss> {
        match self.trees.get(&method).and_then(|t| t.at(path).ok()) {
            Some(matched) => Ok(Arc::clone(matched.value)),
            None => Err(self.miss(path)),
        }
    }

    /// Why nothing matched `path` under the requested method.
    fn miss(&self, path: &str) -> Miss {
        let mut allowed: Vec<Method> = self.trees.iter()
            .filter(|(_, tree)| tree.at(path).is_ok())
            .map(|(m, _)| *m)
            .collect();
        if allowed.is_empty() {
            return Miss::NotFound;
        }
        allowed.sort();
        Miss::MethodNotAllowed(allowed)
    }

    /// Answer for a request whose method the router cannot represent:
    /// `404` if no route has this path, otherwise `405` with `allow`.
    pub(crate) fn reject_method(&self, path: &str) -> Response {
        self.miss(path).into_response()
    }

    /// Terminal step of the middleware chain.
    pub(crate) async fn route(&self, req: Request) -> Response {
        match self.resolve(req.method(), req.path()) {
            Ok(handler) => handler.call(req).await,
            Err(miss) => miss.into_response(),
        }
    }
}

impl IntoResponse for Miss {
    fn into_response(self) -> Response {
        match self {
            Self::MethodNotAllowed(allowed) => {
                let allow = allowed.iter()
                    .map(|m| m.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                Response::builder()
                    .status(Status::MethodNotAllowed)
                    .header("allow", &allow)
                    .no_body()
            }
            Self::NotFound => Response::status(Status::NotFound),
        }
    }
}

impl Default for Router {
    fn default() -> Self { Self::new() }
}

fn join_paths(prefix: &str, path: &str) -> Vec<String> {
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        vec![path.to_owned()]
    } else if path == "/" {
        vec![prefix.to_owned(), format!("{prefix}/")]
    } else {
        vec![format!("{prefix}{path}")]
    }
}
