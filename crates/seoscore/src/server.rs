//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes the scoring engine over MCP so AI assistants can score drafts
//! via stdio transport.
//!
//! # Architecture
//!
//! The MCP server is a presentation layer: it wraps the same core library
//! that the CLI and HTTP service use. Each `#[tool]` method delegates to
//! `seoscore_core` and only converts errors to `McpError`.

use std::sync::Arc;

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use seoscore_core::input::check_size;
use seoscore_core::{AnalysisInput, ScoringConfig, analyze};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `get_scoring_config` tool.
#[derive(Debug, Default, serde::Deserialize, schemars::JsonSchema)]
pub struct GetScoringConfigParams {}

/// MCP server exposing the scoring engine to AI assistants.
#[derive(Clone)]
pub struct ScoringServer {
    scoring: Arc<ScoringConfig>,
    max_input_bytes: Option<usize>,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
}

impl Default for ScoringServer {
    fn default() -> Self {
        Self::new(ScoringConfig::default(), Some(seoscore_core::DEFAULT_MAX_INPUT_BYTES))
    }
}

#[tool_router]
impl ScoringServer {
    /// Create a server that scores with `scoring` and rejects inputs over
    /// `max_input_bytes`.
    pub fn new(scoring: ScoringConfig, max_input_bytes: Option<usize>) -> Self {
        Self {
            scoring: Arc::new(scoring),
            max_input_bytes,
            tool_router: Self::tool_router(),
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
        });

        let text = if params.format == "json" {
            serde_json::to_string_pretty(&info)
                .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Score a content item across all five dimensions.
    #[tool(
        description = "Score a content item (title, meta description, body, target keywords). Returns per-dimension scores, suggestions and an overall 0-100 score."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn analyze_content(
        &self,
        Parameters(params): Parameters<AnalysisInput>,
    ) -> Result<CallToolResult, McpError> {
        let size = payload_size(&params);
        tracing::debug!(tool = "analyze_content", size, "executing MCP tool");
        check_size(size, self.max_input_bytes)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        let report = analyze(&params, &self.scoring);
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(
            tool = "analyze_content",
            overall = report.overall,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Return the active scoring rules.
    #[tool(description = "Get the scoring rules in effect (length windows, domain keywords, density range, adjustments)")]
    #[tracing::instrument(skip(self, _params), fields(otel.kind = "server"))]
    fn get_scoring_config(
        &self,
        Parameters(_params): Parameters<GetScoringConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let json = serde_json::to_string_pretty(self.scoring.as_ref())
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

/// Text bytes carried by an input, used against the size limit.
fn payload_size(input: &AnalysisInput) -> usize {
    input.title.len()
        + input.description.len()
        + input.content.len()
        + input.keywords.iter().map(String::len).sum::<usize>()
}

#[tool_handler]
impl ServerHandler for ScoringServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Call analyze_content with title, description, content and keywords to score a draft.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
