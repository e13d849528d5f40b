//! Serve command — MCP server on stdio.

use anyhow::Context;
use clap::Args;
use rmcp::{ServiceExt, transport::stdio};
use tracing::{info, instrument};

use seoscore_core::Config;

use crate::server::ScoringServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {}

/// Run the MCP server until the client disconnects.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(
    _args: ServeArgs,
    max_input_bytes: Option<usize>,
    config: Config,
) -> anyhow::Result<()> {
    info!(max_input_bytes = ?max_input_bytes, "starting MCP server on stdio");

    let service = ScoringServer::new(config.scoring, max_input_bytes)
        .serve(stdio())
        .await
        .context("failed to start MCP server")?;

    let reason = service.waiting().await.context("MCP server task failed")?;
    info!(?reason, "MCP server stopped");
    Ok(())
}
