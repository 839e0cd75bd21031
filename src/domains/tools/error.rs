//! Tool-specific error types.

use thiserror::Error;

use crate::core::upstream::UpstreamError;

/// Result type for tool operations.
pub type ToolResult<T> = Result<T, ToolError>;

/// Errors that can occur during tool operations.
#[derive(Debug, Error)]
pub enum ToolError {
    /// No tool group advertises the requested tool.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// A tool group was asked for an operation it does not own.
    #[error("Unknown {group} tool: {name}")]
    UnknownOperation { group: &'static str, name: String },

    /// Two tool groups advertise the same tool name.
    #[error("Duplicate tool '{name}' in groups '{first}' and '{second}'")]
    DuplicateOperation {
        name: String,
        first: &'static str,
        second: &'static str,
    },

    /// A required parameter is absent or empty. Carries the parameter label.
    #[error("{0} is required")]
    MissingParameter(String),

    /// Arguments do not match the tool's parameter types.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The upstream API call failed.
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    /// Result data could not be serialized.
    #[error("Failed to serialize result: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ToolError {
    /// Create a new "unknown tool" error.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    /// Create a new "unknown operation" error for a tool group.
    pub fn unknown_operation(group: &'static str, name: impl Into<String>) -> Self {
        Self::UnknownOperation {
            group,
            name: name.into(),
        }
    }

    /// Create a new "missing parameter" error.
    pub fn missing_parameter(label: impl Into<String>) -> Self {
        Self::MissingParameter(label.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }
}
