use std::process::ExitCode;

use postsgate::posts::JsonPlaceholder;
use postsgate::{app, Config, Error, Server};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("fatal: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Error> {
    let config = Config::from_env()?;
    let backend = JsonPlaceholder::new(&config.upstream_url, config.upstream_timeout)?;

    info!("Starting up on http://localhost:{}", config.port);
    info!(upstream = %backend.posts_url(), timeout = ?config.upstream_timeout, "posts backend");

    Server::bind(config.listen_addr())
        .await?
        .serve(app(backend))
        .await
}

/// Human-readable logs filtered by `RUST_LOG`, `info` when unset.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
