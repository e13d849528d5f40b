//! Http command — run the scoring service.

use anyhow::Context;
use clap::Args;
use tracing::{info, instrument};

use seoscore_core::config::{Config, HttpConfig};

use crate::http::{AppState, router};

/// Arguments for the `http` subcommand.
#[derive(Args, Debug, Default)]
pub struct HttpArgs {
    /// Address to bind to (overrides `http.bind_address`).
    #[arg(long, value_name = "ADDR")]
    pub bind: Option<String>,

    /// Port to listen on (overrides `http.port`).
    #[arg(long)]
    pub port: Option<u16>,
}

impl HttpArgs {
    /// Apply flag overrides on top of the configured settings.
    pub fn resolve(&self, config: &HttpConfig) -> HttpConfig {
        HttpConfig {
            bind_address: self
                .bind
                .clone()
                .unwrap_or_else(|| config.bind_address.clone()),
            port: self.port.unwrap_or(config.port),
        }
    }
}

/// Serve `POST /v1/analyze` until interrupted.
#[instrument(name = "cmd_http", skip_all)]
pub async fn cmd_http(
    args: HttpArgs,
    max_input_bytes: Option<usize>,
    config: Config,
) -> anyhow::Result<()> {
    let http = args.resolve(&config.http);
    let addr = http.socket_addr();

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, max_input_bytes = ?max_input_bytes, "HTTP service listening");

    let app = router(AppState::new(config.scoring, max_input_bytes));
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP service failed")?;

    info!("HTTP service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
