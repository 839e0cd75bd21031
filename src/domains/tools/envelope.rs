//! Response envelopes shared by every tool.
//!
//! A tool call always answers with exactly one text block:
//! - success: `"<title>:\n\n<pretty JSON>"` (or raw text for wiki pages)
//! - failure: `"Error: <message>"` with `isError` set

use std::fmt::Display;

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;

use super::error::ToolResult;

/// Wrap serializable data under a title.
pub fn success_result<T: Serialize + ?Sized>(title: &str, data: &T) -> ToolResult<CallToolResult> {
    let json = serde_json::to_string_pretty(data)?;
    Ok(text_result(title, &json))
}

/// Wrap already-rendered text under a title.
pub fn text_result(title: &str, body: &str) -> CallToolResult {
    CallToolResult::success(vec![Content::text(format!("{}:\n\n{}", title, body))])
}

/// Create an error result from any displayable error.
pub fn error_result(error: &dyn Display) -> CallToolResult {
    CallToolResult::error(vec![Content::text(format!("Error: {}", error))])
}
