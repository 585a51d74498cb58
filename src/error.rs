//! Unified error type.

use crate::config::ConfigError;

/// The error type returned by postsgate's fallible infrastructure operations.
///
/// Application-level errors (404, 502, etc.) are expressed as HTTP
/// [`Response`](crate::Response) values, not as `Error`s. This type surfaces
/// failures that stop the process: bad configuration or a listener that
/// cannot be bound.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("config: {0}")]
    Config(#[from] ConfigError),

    #[error("upstream client: {0}")]
    Upstream(#[from] crate::posts::UpstreamError),
}
