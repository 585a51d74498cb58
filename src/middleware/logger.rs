//! Per-request access log.

use std::time::{Duration, Instant};

use tracing::{info, warn};

use super::{BoxFuture, Middleware, Next};
use crate::request::Request;

/// Emits one `tracing` event per request once the response is ready.
///
/// Server errors are logged at `warn`, everything else at `info`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Logger;

impl Middleware for Logger {
    fn handle(&self, req: Request, next: Next) -> BoxFuture {
        Box::pin(async move {
            let method = req.method();
            let path = req.path().to_owned();
            let start = Instant::now();

            let res = next.run(req).await;

            let status = res.status_code();
            let elapsed_us = elapsed_micros(start.elapsed());
            if status >= 500 {
                warn!(%method, %path, status, elapsed_us, "request failed");
            } else {
                info!(%method, %path, status, elapsed_us, "request served");
            }
            res
        })
    }
}

fn elapsed_micros(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX)
}
