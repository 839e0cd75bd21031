//! RuneScape MCP Server Library
//!
//! A Model Context Protocol (MCP) server that exposes RuneScape game data:
//! Grand Exchange prices and catalogue, player hiscores, and RuneScape Wiki
//! page extracts. Every tool call maps to one request against a public API.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Configuration, error handling, the upstream HTTP client, the
//!   server handler and the stdio transport
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: Tool groups, the registry that dispatches between them, and
//!     the hiscore decoder
//!   - **resources**: Resources backed by upstream JSON documents
//!
//! # Example
//!
//! ```rust,no_run
//! use runescape_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     TransportService::new().run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

#[cfg(test)]
mod testing;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
