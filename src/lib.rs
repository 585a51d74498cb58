//! # postsgate
//!
//! A small HTTP service exposing a `/posts` resource backed by a
//! JSONPlaceholder-style REST API.
//!
//! | Route | Behaviour |
//! |---|---|
//! | `GET /` | `200`, `Hello World!` |
//! | `GET /posts` | upstream post list, relayed as JSON |
//! | `POST /posts` | creates a post upstream, returns it with its new `id` |
//!
//! Upstream failures come back as `502`/`504` with a JSON `{"error": …}`
//! body; malformed requests as `400`/`415`.
//!
//! The pieces underneath (router, middleware, request and response types,
//! server) are small enough to read in one sitting:
//!
//! - Radix-tree routing via [`matchit`], one tree per method, sub-routers
//!   mounted under a prefix
//! - hyper for the wire, tokio for I/O
//! - Graceful shutdown on SIGTERM / Ctrl-C
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use postsgate::{app, Config, Server};
//! use postsgate::posts::JsonPlaceholder;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), postsgate::Error> {
//!     let config = Config::from_env()?;
//!     let backend = JsonPlaceholder::new(&config.upstream_url, config.upstream_timeout)?;
//!
//!     Server::bind(config.listen_addr()).await?.serve(app(backend)).await
//! }
//! ```

mod app;
mod config;
mod error;
mod handler;
mod method;
mod request;
mod response;
mod router;
mod server;
mod status;

pub mod middleware;
pub mod posts;

pub use app::app;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use handler::Handler;
pub use method::{Method, UnknownMethod};
pub use request::Request;
pub use response::{IntoResponse, Json, Response, ResponseBuilder};
pub use router::Router;
pub use server::{Server, DRAIN_TIMEOUT, MAX_BODY_BYTES};
pub use status::Status;
