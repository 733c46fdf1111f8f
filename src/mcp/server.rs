use std::path::Path;

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;

use super::types::{
    ComponentSummary, GetComponentParams, ListComponentsParams, ListComponentsResult, Pagination,
};
use crate::core::Manifest;

const DEFAULT_LIMIT: usize = 20;
const MAX_LIMIT: usize = 100;

#[derive(Clone)]
pub struct VuePactMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for VuePactMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl VuePactMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// List components in a manifest
    #[tool(
        description = "List components from a vuepact manifest with prop/emit/slot/diagnostic counts. Optional case-insensitive query on name or path. Returns paginated list."
    )]
    pub async fn list_components(
        &self,
        params: Parameters<ListComponentsParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let limit = params
            .limit
            .map(|v| v as usize)
            .unwrap_or(DEFAULT_LIMIT)
            .min(MAX_LIMIT);
        let offset = params.offset.map(|v| v as usize).unwrap_or(0);

        let manifest = load_manifest(&params.manifest_path)?;
        let matches = manifest.filter(params.query.as_deref().unwrap_or(""));
        let total_count = matches.len();

        let items: Vec<ComponentSummary> = matches
            .into_iter()
            .skip(offset)
            .take(limit)
            .map(ComponentSummary::from)
            .collect();
        let has_more = offset + items.len() < total_count;

        json_result(&ListComponentsResult {
            scanned_at: manifest.scanned_at.clone(),
            total_count,
            items,
            pagination: Pagination {
                offset,
                limit,
                has_more,
            },
        })
    }

    /// Get one component contract in full
    #[tool(
        description = "Get the full contract of one component (props with types/defaults, emits, slots, metrics, diagnostics). Matches the exact manifest path first, then the component name."
    )]
    pub async fn get_component(
        &self,
        params: Parameters<GetComponentParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let manifest = load_manifest(&params.manifest_path)?;

        let contract = manifest.find(&params.path).ok_or_else(|| {
            McpError::invalid_params(format!("No component matching '{}'", params.path), None)
        })?;

        json_result(contract)
    }
}

fn load_manifest(path: &str) -> Result<Manifest, McpError> {
    Manifest::load(Path::new(path))
        .map_err(|e| McpError::internal_error(format!("{:#}", e), None))
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;
    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

#[tool_handler]
impl ServerHandler for VuePactMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Vuepact MCP exposes the component contracts recorded by `vuepact scan`.\n\n\
                 Available tools:\n\
                 1. list_components - Find components by name or path (paginated)\n\
                 2. get_component - Get props, emits, slots, metrics and diagnostics of one component\n\n\
                 Both tools read an existing manifest and never re-analyze sources. \
                 Run `vuepact scan` first if the manifest is missing or stale."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = VuePactMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
