//! Tool Registry - central registration and dispatch for all tools.
//!
//! The registry holds the tool groups in priority order. It is built once at
//! startup, rejects duplicate tool names, and is read-only afterwards.

use std::collections::HashMap;
use std::sync::Arc;

use rmcp::model::{CallToolResult, JsonObject, Tool};
use tracing::{debug, info};

use super::definitions::{ItemTools, PlayerTools, PriceTools, WikiTools};
use super::error::{ToolError, ToolResult};
use super::group::ToolGroup;
use crate::core::config::ApiEndpoints;
use crate::core::upstream::UpstreamClient;

/// Tool registry - owns every tool group.
pub struct ToolRegistry {
    groups: Vec<Arc<dyn ToolGroup>>,
}

impl ToolRegistry {
    /// Create a registry from groups listed in priority order.
    ///
    /// Fails if two groups advertise the same tool name.
    pub fn new(groups: Vec<Arc<dyn ToolGroup>>) -> ToolResult<Self> {
        let mut owners: HashMap<&str, &'static str> = HashMap::new();

        for group in &groups {
            for tool in group.tools() {
                if let Some(first) = owners.insert(tool.name.as_ref(), group.name()) {
                    return Err(ToolError::DuplicateOperation {
                        name: tool.name.to_string(),
                        first,
                        second: group.name(),
                    });
                }
            }
        }

        info!(
            "Tool registry ready: {} tools in {} groups",
            owners.len(),
            groups.len()
        );

        Ok(Self { groups })
    }

    /// The standard groups: price, item, player, wiki.
    pub fn standard(client: UpstreamClient, endpoints: &ApiEndpoints) -> ToolResult<Self> {
        Self::new(vec![
            Arc::new(PriceTools::new(client.clone(), endpoints.clone())),
            Arc::new(ItemTools::new(client.clone(), endpoints.clone())),
            Arc::new(PlayerTools::new(client.clone(), endpoints.clone())),
            Arc::new(WikiTools::new(client, endpoints.clone())),
        ])
    }

    /// Every tool descriptor, in group priority order.
    pub fn tools(&self) -> Vec<Tool> {
        self.groups
            .iter()
            .flat_map(|group| group.tools().iter().cloned())
            .collect()
    }

    /// Every tool name, in group priority order.
    pub fn tool_names(&self) -> Vec<String> {
        self.groups
            .iter()
            .flat_map(|group| group.tools().iter().map(|t| t.name.to_string()))
            .collect()
    }

    /// Route a call to the first group that owns `name`.
    pub async fn dispatch(&self, name: &str, arguments: JsonObject) -> ToolResult<CallToolResult> {
        let group = self
            .groups
            .iter()
            .find(|group| group.owns(name))
            .ok_or_else(|| ToolError::unknown_tool(name))?;

        debug!("Dispatching {} to the {} group", name, group.name());
        group.handle(name, arguments).await
    }
}
