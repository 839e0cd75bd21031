//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, a `.env` file, or defaults.

use serde::{Deserialize, Serialize};
use tracing::info;

/// Identifying header sent with every upstream request.
pub const DEFAULT_USER_AGENT: &str =
    "RuneScape Wiki MCP Server - github.com/user/runescape-wiki-mcp";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Upstream API configuration.
    pub upstream: UpstreamConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// How to reach the upstream APIs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// `User-Agent` header value.
    pub user_agent: String,

    /// Log full response bodies (very verbose).
    pub log_payloads: bool,

    /// Base URLs of the individual APIs.
    pub endpoints: ApiEndpoints,
}

/// Base URLs of the upstream APIs. No trailing slash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiEndpoints {
    /// Grand Exchange price index.
    pub prices: String,

    /// Grand Exchange catalogue.
    pub catalogue: String,

    /// Hiscore lite endpoint root.
    pub hiscores: String,

    /// MediaWiki `api.php`.
    pub wiki: String,
}

impl Default for ApiEndpoints {
    fn default() -> Self {
        Self {
            prices: "https://secure.runescape.com/m=itemdb_rs/api".to_string(),
            catalogue: "https://secure.runescape.com/m=itemdb_rs/api".to_string(),
            hiscores: "https://secure.runescape.com/m=hiscore".to_string(),
            wiki: "https://runescape.wiki/api.php".to_string(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_payloads: false,
            endpoints: ApiEndpoints::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "runescape-wiki-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            upstream: UpstreamConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_DEBUG`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        // Debug toggle wins over MCP_LOG_LEVEL
        if std::env::var("MCP_DEBUG").is_ok_and(|v| is_truthy(&v)) {
            config.logging.level = "debug".to_string();
            config.upstream.log_payloads = true;
        }

        if let Ok(user_agent) = std::env::var("MCP_USER_AGENT") {
            config.upstream.user_agent = user_agent;
        }

        let endpoints = &mut config.upstream.endpoints;
        override_url("MCP_PRICES_API", &mut endpoints.prices);
        override_url("MCP_CATALOGUE_API", &mut endpoints.catalogue);
        override_url("MCP_HISCORES_API", &mut endpoints.hiscores);
        override_url("MCP_WIKI_API", &mut endpoints.wiki);

        config
    }
}

fn override_url(var: &str, target: &mut String) {
    if let Ok(url) = std::env::var(var) {
        info!("{} overridden: {}", var, url);
        *target = url.trim_end_matches('/').to_string();
    }
}

/// Boolean-like environment values: `1`, `true`, `yes`, `on` (any case).
fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
