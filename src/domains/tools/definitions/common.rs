//! Descriptor helpers and parameter types shared across tool groups.

use rmcp::handler::server::tool::schema_for_type;
use rmcp::model::Tool;
use schemars::JsonSchema;
use serde::Deserialize;

/// Build a tool descriptor whose input schema is generated from `P`.
pub fn describe<P: JsonSchema + 'static>(name: &'static str, description: &'static str) -> Tool {
    Tool {
        name: name.into(),
        description: Some(description.into()),
        input_schema: schema_for_type::<P>().into(),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

/// Parameters for tools that take none.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct NoParams {}

/// Parameters for single-item lookups.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemIdParams {
    #[schemars(title = "Item ID", description = "Grand Exchange item ID (e.g. 4151)")]
    pub item_id: u64,
}

/// Parameters for single-category lookups.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CategoryParams {
    #[schemars(title = "Category", description = "Category ID (see get_all_categories)")]
    pub category: u32,
}
