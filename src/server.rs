//! HTTP server and graceful shutdown.
//!
//! On SIGTERM or Ctrl-C the server:
//! 1. Stops `listener.accept()` immediately; no new connections are made.
//! 2. Tells every open connection to finish its current request and close.
//!    Idle keep-alive connections close right away.
//! 3. Waits up to [`DRAIN_TIMEOUT`] for them, aborts whatever is left, and
//!    returns from [`Server::serve`], which lets `main` exit cleanly.

use std::convert::Infallible;
use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use http_body_util::{BodyExt, Full, LengthLimitError, Limited};
use hyper::body::Incoming;
use hyper::service::service_fn;
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder as ConnBuilder;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use crate::error::Error;
use crate::method::Method;
use crate::request::Request;
use crate::response::Response;
use crate::router::Router;
use crate::status::Status;

/// Largest request body accepted, in bytes. Bigger bodies get `413`.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// How long shutdown waits for open connections before aborting them.
pub const DRAIN_TIMEOUT: Duration = Duration::from_secs(10);

// Pause after a transient accept error before trying again.
const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

/// The HTTP server.
pub struct Server {
    listener: TcpListener,
    addr: SocketAddr,
}

impl Server {
    /// Binds a listener on `addr`. Port `0` picks a free port; see
    /// [`local_addr`](Server::local_addr).
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be bound.
    pub async fn bind(addr: SocketAddr) -> Result<Self, Error> {
        let listener = TcpListener::bind(addr).await?;
        let addr = listener.local_addr()?;
        Ok(Self { listener, addr })
    }

    /// The address actually bound.
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Serves `router` until SIGTERM or Ctrl-C, then drains in-flight
    /// connections.
    pub async fn serve(self, router: Router) -> Result<(), Error> {
        self.serve_with_shutdown(router, shutdown_signal()).await
    }

    /// Serves `router` until `signal` resolves.
    ///
    /// # Errors
    ///
    /// Returns an error if accepting connections fails for a reason other
    /// than a single aborted handshake. Open connections are drained first.
    pub async fn serve_with_shutdown(
        self,
        router: Router,
        signal: impl Future<Output = ()> + Send,
    ) -> Result<(), Error> {
        let Self { listener, addr } = self;
        let router = Arc::new(router);

        info!(%addr, "listening");

        let mut tasks = tokio::task::JoinSet::new();
        let (stop_tx, stop_rx) = watch::channel(());
        let mut outcome = Ok(());

        tokio::pin!(signal);

        loop {
            tokio::select! {
                // Check shutdown first so a SIGTERM stops accepting new
                // connections even if more are queued.
                biased;

                () = &mut signal => {
                    info!(in_flight = tasks.len(), "shutdown signal received, draining connections");
                    break;
                }

                res = listener.accept() => {
                    let (stream, remote_addr) = match res {
                        Ok(v) => v,
                        Err(e) if is_transient_accept_error(&e) => {
                            warn!("accept error, retrying: {e}");
                            tokio::time::sleep(ACCEPT_BACKOFF).await;
                            continue;
                        }
                        Err(e) => {
                            error!(in_flight = tasks.len(), "accept failed, shutting down: {e}");
                            outcome = Err(Error::Io(e));
                            break;
                        }
                    };

                    let router = Arc::clone(&router);
                    let mut stop = stop_rx.clone();
                    let io = TokioIo::new(stream);

                    tasks.spawn(async move {
                        // Called once per request on the connection.
                        let svc = service_fn(move |req| {
                            let router = Arc::clone(&router);
                            async move { dispatch(router, req, remote_addr).await }
                        });

                        // HTTP/1.1 or HTTP/2, whatever the client negotiates.
                        let builder = ConnBuilder::new(TokioExecutor::new());
                        let conn = builder.serve_connection(io, svc);
                        tokio::pin!(conn);

                        let res = tokio::select! {
                            res = conn.as_mut() => res,
                            _ = stop.changed() => {
                                conn.as_mut().graceful_shutdown();
                                conn.await
                            }
                        };
                        if let Err(e) = res {
                            debug!(peer = %remote_addr, "connection error: {e}");
                        }
                    });
                }

                // Reap finished connection tasks.
                Some(_) = tasks.join_next(), if !tasks.is_empty() => {}
            }
        }

        drop(listener);
        stop_tx.send_replace(());

        let drain = async { while tasks.join_next().await.is_some() {} };
        if tokio::time::timeout(DRAIN_TIMEOUT, drain).await.is_err() {
            warn!(remaining = tasks.len(), "drain timed out, aborting connections");
            tasks.shutdown().await;
        }

        info!("stopped");
        outcome
    }
}

/// Accept errors that concern one half-open connection, not the listener.
fn is_transient_accept_error(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::ConnectionAborted
            | io::ErrorKind::ConnectionReset
            | io::ErrorKind::ConnectionRefused
            | io::ErrorKind::Interrupted
    )
}

/// Buffers one hyper request, routes it, and produces one response.
///
/// Never fails from hyper's point of view: every problem becomes a status.
/// If the peer disconnects, hyper drops this future, and with it any
/// upstream call still in flight.
async fn dispatch(
    router: Arc<Router>,
    req: hyper::Request<Incoming>,
    remote_addr: SocketAddr,
) -> Result<http::Response<Full<Bytes>>, Infallible> {
    let method = match Method::try_from(req.method()) {
        Ok(m) => m,
        Err(e) => {
            debug!(peer = %remote_addr, "{e}");
            return Ok(router.reject_method(req.uri().path()).into_inner());
        }
    };

    let (parts, body) = req.into_parts();
    let body = match Limited::new(body, MAX_BODY_BYTES).collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) if e.downcast_ref::<LengthLimitError>().is_some() => {
            debug!(peer = %remote_addr, limit = MAX_BODY_BYTES, "request body too large");
            return Ok(Response::status(Status::ContentTooLarge).into_inner());
        }
        Err(e) => {
            warn!(peer = %remote_addr, "failed to read request body: {e}");
            return Ok(Response::status(Status::BadRequest).into_inner());
        }
    };

    let req = parts.headers.iter()
        .filter_map(|(name, value)| value.to_str().ok().map(|v| (name.as_str(), v)))
        .fold(Request::new(method, parts.uri.path()), |req, (name, value)| {
            req.with_header(name, value)
        })
        .with_body(body);

    Ok(router.dispatch(req).await.into_inner())
}

/// Resolves on the first shutdown signal the process receives.
///
/// On Unix this listens for both SIGTERM and SIGINT (Ctrl-C).
/// If a handler cannot be installed, that signal is ignored.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("failed to install Ctrl-C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let sigterm = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c   => {}
        () = sigterm  => {}
    }
}
