//! HTTP status codes the service produces on its own.
//!
//! Statuses relayed from the upstream API are plain `u16` values; every
//! response constructor accepts `impl Into<u16>`, so both forms work:
//!
//! ```rust
//! use postsgate::{Response, Status};
//!
//! Response::status(Status::BadGateway);
//! Response::builder().status(201u16).json(b"{}".to_vec());
//! ```

/// Status codes named by this crate.
#[allow(clippy::enum_variant_names)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    // ── 2xx Success ───────────────────────────────────────────────────────────
    Ok,                   // 200

    // ── 4xx Client errors ─────────────────────────────────────────────────────
    BadRequest,           // 400
    NotFound,             // 404
    MethodNotAllowed,     // 405
    ContentTooLarge,      // 413
    UnsupportedMediaType, // 415

    // ── 5xx Server errors ─────────────────────────────────────────────────────
    InternalServerError,  // 500
    BadGateway,           // 502
    GatewayTimeout,       // 504
}

impl From<Status> for u16 {
    fn from(s: Status) -> u16 {
        match s {
            Status::Ok                   => 200,
            Status::BadRequest           => 400,
            Status::NotFound             => 404,
            Status::MethodNotAllowed     => 405,
            Status::ContentTooLarge      => 413,
            Status::UnsupportedMediaType => 415,
            Status::InternalServerError  => 500,
            Status::BadGateway           => 502,
            Status::GatewayTimeout       => 504,
        }
    }
}
