//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to the tool registry and the resource service.
//!
//! Tool failures never become protocol errors: every failure, including an
//! unknown tool name, is returned as an `isError` result. Resource failures
//! are protocol errors.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::config::Config;
use super::error::Result;
use super::upstream::UpstreamClient;
use crate::domains::resources::{ResourceError, ResourceService};
use crate::domains::tools::{ToolRegistry, error_result};

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp. Everything it
/// holds is built once in [`McpServer::new`] and shared read-only.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Registry of tool groups.
    tools: Arc<ToolRegistry>,

    /// Service for handling resource-related requests.
    resource_service: Arc<ResourceService>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Fails if the HTTP client cannot be built or the tool catalogs overlap.
    pub fn new(config: Config) -> Result<Self> {
        let config = Arc::new(config);
        let upstream = &config.upstream;

        let client = UpstreamClient::new(upstream)?;
        let tools = ToolRegistry::standard(client.clone(), &upstream.endpoints)?;
        let resource_service = ResourceService::new(client, &upstream.endpoints);

        Ok(Self {
            tools: Arc::new(tools),
            resource_service: Arc::new(resource_service),
            config,
        })
    }

    /// Every advertised tool.
    pub fn tools(&self) -> Vec<Tool> {
        self.tools.tools()
    }

    /// Run a tool call and render any failure as an error result.
    ///
    /// Arguments and results are logged at debug level when payload logging
    /// is enabled.
    pub async fn run_tool(&self, name: &str, arguments: Option<JsonObject>) -> CallToolResult {
        let arguments = arguments.unwrap_or_default();
        let log_payloads = self.config.upstream.log_payloads;

        debug!("Tool called: {}", name);
        if log_payloads {
            debug!("Tool {} arguments: {}", name, serde_json::Value::Object(arguments.clone()));
        }

        let result = match self.tools.dispatch(name, arguments).await {
            Ok(result) => {
                debug!("Tool {} succeeded", name);
                result
            }
            Err(e) => {
                warn!("Tool {} failed: {}", name, e);
                error_result(&e)
            }
        };

        if log_payloads {
            debug!("Tool {} result: {:?}", name, result.content);
        }
        result
    }

    /// Read a resource, mapping failures to protocol errors.
    pub async fn fetch_resource(&self, uri: &str) -> std::result::Result<ReadResourceResult, McpError> {
        self.resource_service
            .read_resource(uri)
            .await
            .map_err(|e| {
                let message = format!("Failed to read resource: {}", e);
                match e {
                    ResourceError::NotFound(_) => McpError::resource_not_found(message, None),
                    _ => McpError::internal_error(message, None),
                }
            })
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Default::default()
            },
            instructions: Some(
                "Game data for RuneScape: Grand Exchange prices and catalogue, \
                 player hiscores, and RuneScape Wiki pages."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: self.tools(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, request, _context), fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        Ok(self.run_tool(&request.name, request.arguments).await)
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        let resources = self.resource_service.list_resources().await;
        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.fetch_resource(&request.uri).await
    }
}
