//! Tools domain module.
//!
//! Tools are the operations MCP clients call. They are organised in groups
//! (price, item, player, wiki); each group owns a fixed catalog and a handler.
//!
//! ## Architecture
//!
//! - `definitions/` - One file per tool group, plus the hiscore decoder
//! - `group.rs` - The `ToolGroup` trait every group implements
//! - `registry.rs` - Priority-ordered registry and dispatch
//! - `params.rs` - Schema-driven argument validation
//! - `envelope.rs` - Success and failure result envelopes
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Add a parameter struct deriving `Deserialize` and `JsonSchema`
//! 2. Add the descriptor to the group's `catalog()`
//! 3. Add a match arm to the group's `handle()`
//!
//! The registry and server pick the tool up automatically.

pub mod definitions;
pub mod envelope;
mod error;
mod group;
pub mod params;
mod registry;

pub use envelope::{error_result, success_result, text_result};
pub use error::{ToolError, ToolResult};
pub use group::ToolGroup;
pub use registry::ToolRegistry;
