//! Domains module containing business logic organized by bounded contexts.
//!
//! - **tools**: the price, item, player and wiki tool groups
//! - **resources**: read-only `runescape://` resources

pub mod resources;
pub mod tools;
