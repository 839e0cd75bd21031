//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the MCP server:
//! error handling, configuration, the upstream HTTP client, server lifecycle
//! management, and the transport layer.

pub mod config;
pub mod error;
pub mod server;
pub mod transport;
pub mod upstream;

pub use config::{ApiEndpoints, Config};
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::TransportService;
pub use upstream::{UpstreamClient, UpstreamError};
