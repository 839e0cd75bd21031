//! Resource Registry - central registration of all resources.
//!
//! When adding a new resource:
//! 1. Create the resource file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `get_all_resources()`

use rmcp::model::{AnnotateAble, RawResource};

use super::definitions::{GeInfoResource, ItemCategoriesResource, ResourceDefinition};
use super::service::ResourceEntry;
use crate::core::config::ApiEndpoints;

/// Helper function to create an annotated resource from a definition.
fn build_resource<R: ResourceDefinition>(endpoints: &ApiEndpoints) -> ResourceEntry {
    let mut raw = RawResource::new(R::URI, R::NAME);
    raw.description = Some(R::DESCRIPTION.to_string());
    raw.mime_type = Some(R::MIME_TYPE.to_string());

    ResourceEntry {
        resource: raw.no_annotation(),
        upstream_url: R::upstream_url(endpoints),
    }
}

/// Get all registered resources, in listing order.
pub fn get_all_resources(endpoints: &ApiEndpoints) -> Vec<ResourceEntry> {
    vec![
        build_resource::<GeInfoResource>(endpoints),
        build_resource::<ItemCategoriesResource>(endpoints),
    ]
}
