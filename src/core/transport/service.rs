//! Transport service - starts the MCP server on its transport.

use tracing::info;

use super::TransportResult;
use crate::core::McpServer;

#[cfg(feature = "stdio")]
use super::stdio::StdioTransport;

#[cfg(not(feature = "stdio"))]
compile_error!("The `stdio` feature must be enabled: it is the only transport");

/// Transport service - manages the transport layer for the MCP server.
#[derive(Debug, Default)]
pub struct TransportService;

impl TransportService {
    /// Create a new transport service.
    pub fn new() -> Self {
        Self
    }

    /// Start the transport with the given MCP server.
    ///
    /// This method blocks until the transport is shut down.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        info!("Starting transport: STDIO (standard MCP mode)");
        StdioTransport::run(server).await
    }
}
