//! The tool group abstraction.
//!
//! A tool group is a fixed catalog of tool descriptors plus the handler that
//! executes them. Groups are built once at startup and never mutated.

use async_trait::async_trait;
use rmcp::model::{CallToolResult, JsonObject, Tool};

use super::error::ToolResult;

/// A catalog of related tools and their handler.
#[async_trait]
pub trait ToolGroup: Send + Sync {
    /// Short group name used in error messages ("price", "item", ...).
    fn name(&self) -> &'static str;

    /// Tools advertised by this group, in catalog order.
    fn tools(&self) -> &[Tool];

    /// Whether this group advertises a tool called `tool`.
    fn owns(&self, tool: &str) -> bool {
        self.tools().iter().any(|t| t.name == tool)
    }

    /// Execute one of this group's tools.
    async fn handle(&self, tool: &str, arguments: JsonObject) -> ToolResult<CallToolResult>;
}
