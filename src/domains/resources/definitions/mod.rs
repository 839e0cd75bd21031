//! Resource definitions module.
//!
//! Each resource is defined in its own file with its URI, metadata and the
//! upstream URL its content is fetched from.
//!
//! ## Adding a New Resource
//!
//! 1. Create a new file (e.g., `my_resource.rs`)
//! 2. Implement the `ResourceDefinition` trait
//! 3. Export it here
//! 4. Register in `registry.rs`

mod ge_info;
mod item_categories;

pub use ge_info::GeInfoResource;
pub use item_categories::ItemCategoriesResource;

use crate::core::config::ApiEndpoints;

/// Trait for resource definitions.
///
/// Every resource is a live view of one upstream JSON document.
pub trait ResourceDefinition {
    /// The unique URI of the resource.
    const URI: &'static str;

    /// The display name of the resource.
    const NAME: &'static str;

    /// A description of the resource.
    const DESCRIPTION: &'static str;

    /// The MIME type of the resource content.
    const MIME_TYPE: &'static str = "application/json";

    /// Where the content is fetched from.
    fn upstream_url(endpoints: &ApiEndpoints) -> String;
}
