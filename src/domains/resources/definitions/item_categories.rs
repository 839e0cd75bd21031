//! Item categories resource definition.

use super::ResourceDefinition;
use crate::core::config::ApiEndpoints;

/// Alphabetical item counts for the first Grand Exchange category.
pub struct ItemCategoriesResource;

impl ResourceDefinition for ItemCategoriesResource {
    const URI: &'static str = "runescape://items/mapping";
    const NAME: &'static str = "Item Categories";
    const DESCRIPTION: &'static str = "Available item categories in the Grand Exchange";

    fn upstream_url(endpoints: &ApiEndpoints) -> String {
        format!("{}/catalogue/category.json?category=1", endpoints.prices)
    }
}
