//! Grand Exchange catalogue tools: item details, price graphs and category browsing.

use async_trait::async_trait;
use rmcp::model::{CallToolResult, JsonObject, Tool};
use schemars::JsonSchema;
use serde::Deserialize;

use super::common::{ItemIdParams, describe};
use crate::core::config::ApiEndpoints;
use crate::core::upstream::UpstreamClient;
use crate::domains::tools::envelope::success_result;
use crate::domains::tools::error::{ToolError, ToolResult};
use crate::domains::tools::group::ToolGroup;
use crate::domains::tools::params::{alpha_param, default_page, effective_page, parse_params};

fn default_alpha() -> String {
    "a".to_string()
}

/// Parameters for `browse_items_by_category`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct BrowseItemsParams {
    #[schemars(title = "Category", description = "Category ID (0-43, see get_all_categories)")]
    pub category: u32,

    #[serde(default = "default_alpha")]
    #[schemars(description = "First letter of items to show (a-z, use # for numbers)")]
    pub alpha: String,

    #[serde(default = "default_page")]
    #[schemars(description = "Page number (starting from 1)")]
    pub page: u32,
}

/// Item tool group.
pub struct ItemTools {
    client: UpstreamClient,
    endpoints: ApiEndpoints,
    tools: Vec<Tool>,
}

impl ItemTools {
    pub const GROUP: &'static str = "item";

    pub const ITEM_DETAIL: &'static str = "get_item_detail";
    pub const ITEM_GRAPH: &'static str = "get_item_graph";
    pub const BROWSE_CATEGORY: &'static str = "browse_items_by_category";

    pub fn new(client: UpstreamClient, endpoints: ApiEndpoints) -> Self {
        Self {
            client,
            endpoints,
            tools: Self::catalog(),
        }
    }

    /// Descriptors for every item tool.
    ///
    /// `get_ge_info` is served by the price group only.
    pub fn catalog() -> Vec<Tool> {
        vec![
            describe::<ItemIdParams>(
                Self::ITEM_DETAIL,
                "Get detailed item information from the official Grand Exchange API including \
                 price trends, examine text, and metadata",
            ),
            describe::<ItemIdParams>(
                Self::ITEM_GRAPH,
                "Get historical price graph data for an item from the official Grand Exchange \
                 API (last 180 days)",
            ),
            describe::<BrowseItemsParams>(
                Self::BROWSE_CATEGORY,
                "Browse items by category from the official Grand Exchange catalogue",
            ),
        ]
    }

    pub fn item_detail_url(endpoints: &ApiEndpoints, item_id: u64) -> String {
        format!("{}/catalogue/detail.json?item={}", endpoints.catalogue, item_id)
    }

    pub fn item_graph_url(endpoints: &ApiEndpoints, item_id: u64) -> String {
        format!("{}/graph/{}.json", endpoints.catalogue, item_id)
    }

    pub fn browse_url(endpoints: &ApiEndpoints, category: u32, alpha: &str, page: u32) -> String {
        format!(
            "{}/catalogue/items.json?category={}&alpha={}&page={}",
            endpoints.catalogue,
            category,
            alpha_param(alpha),
            page
        )
    }

    async fn item_detail(&self, params: ItemIdParams) -> ToolResult<CallToolResult> {
        let url = Self::item_detail_url(&self.endpoints, params.item_id);
        let data = self.client.fetch_json(&url).await?;
        success_result(&format!("Item Detail for {}", params.item_id), &data)
    }

    async fn item_graph(&self, params: ItemIdParams) -> ToolResult<CallToolResult> {
        let url = Self::item_graph_url(&self.endpoints, params.item_id);
        let data = self.client.fetch_json(&url).await?;
        success_result(&format!("Price Graph for Item {}", params.item_id), &data)
    }

    async fn browse(&self, params: BrowseItemsParams) -> ToolResult<CallToolResult> {
        let alpha = if params.alpha.is_empty() {
            default_alpha()
        } else {
            params.alpha
        };
        let page = effective_page(params.page);

        let url = Self::browse_url(&self.endpoints, params.category, &alpha, page);
        let data = self.client.fetch_json(&url).await?;
        success_result(
            &format!("Items in Category {} ({}, Page {})", params.category, alpha, page),
            &data,
        )
    }
}

#[async_trait]
impl ToolGroup for ItemTools {
    fn name(&self) -> &'static str {
        Self::GROUP
    }

    fn tools(&self) -> &[Tool] {
        &self.tools
    }

    async fn handle(&self, tool: &str, arguments: JsonObject) -> ToolResult<CallToolResult> {
        match tool {
            Self::ITEM_DETAIL => self.item_detail(parse_params(arguments)?).await,
            Self::ITEM_GRAPH => self.item_graph(parse_params(arguments)?).await,
            Self::BROWSE_CATEGORY => self.browse(parse_params(arguments)?).await,
            _ => Err(ToolError::unknown_operation(Self::GROUP, tool)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FixtureServer, object, text_of};
    use serde_json::json;

    fn tools_for(server: &FixtureServer) -> ItemTools {
        ItemTools::new(server.client(), server.endpoints())
    }

    #[test]
    fn test_browse_schema_declares_defaults() {
        let catalog = ItemTools::catalog();
        let browse = catalog
            .iter()
            .find(|t| t.name == "browse_items_by_category")
            .unwrap();
        let schema = &browse.input_schema;
        assert_eq!(schema["required"], json!(["category"]));
        assert_eq!(schema["properties"]["alpha"]["default"], "a");
        assert_eq!(schema["properties"]["page"]["default"], 1);
    }

    #[test]
    fn test_browse_url_encodes_hash() {
        let endpoints = ApiEndpoints::default();
        assert_eq!(
            ItemTools::browse_url(&endpoints, 5, "#", 3),
            "https://secure.runescape.com/m=itemdb_rs/api/catalogue/items.json?category=5&alpha=%23&page=3"
        );
    }

    #[tokio::test]
    async fn test_get_item_detail() {
        let server = FixtureServer::builder()
            .json(
                "/m=itemdb_rs/api/catalogue/detail.json?item=4151",
                json!({ "item": { "id": 4151, "name": "Abyssal whip", "members": "true" } }),
            )
            .start()
            .await;

        let result = tools_for(&server)
            .handle("get_item_detail", object(json!({ "itemId": 4151 })))
            .await
            .unwrap();

        let text = text_of(&result);
        assert!(text.starts_with("Item Detail for 4151:"));
        assert!(text.contains("Abyssal whip"));
    }

    #[tokio::test]
    async fn test_get_item_detail_without_id_fails() {
        let server = FixtureServer::builder().start().await;
        let result = tools_for(&server)
            .handle("get_item_detail", JsonObject::new())
            .await;
        assert!(result.is_err());
        assert!(server.requests().is_empty());
    }

    #[tokio::test]
    async fn test_get_item_graph() {
        let server = FixtureServer::builder()
            .json(
                "/m=itemdb_rs/api/graph/4151.json",
                json!({
                    "daily": { "1640995200000": 2400000 },
                    "average": { "1640995200000": 2380000 }
                }),
            )
            .start()
            .await;

        let result = tools_for(&server)
            .handle("get_item_graph", object(json!({ "itemId": 4151 })))
            .await
            .unwrap();
        assert!(text_of(&result).starts_with("Price Graph for Item 4151:"));
    }

    #[tokio::test]
    async fn test_browse_uses_defaults() {
        let server = FixtureServer::builder()
            .json(
                "/m=itemdb_rs/api/catalogue/items.json?category=24&alpha=a&page=1",
                json!({ "total": 0, "items": [] }),
            )
            .start()
            .await;

        let result = tools_for(&server)
            .handle("browse_items_by_category", object(json!({ "category": 24 })))
            .await
            .unwrap();
        assert!(text_of(&result).starts_with("Items in Category 24 (a, Page 1):"));
    }

    #[tokio::test]
    async fn test_browse_null_alpha_and_page_use_defaults() {
        let server = FixtureServer::builder()
            .json(
                "/m=itemdb_rs/api/catalogue/items.json?category=1&alpha=a&page=1",
                json!({ "total": 0, "items": [] }),
            )
            .start()
            .await;

        let result = tools_for(&server)
            .handle(
                "browse_items_by_category",
                object(json!({ "category": 1, "alpha": null, "page": null })),
            )
            .await
            .unwrap();
        assert!(text_of(&result).starts_with("Items in Category 1 (a, Page 1):"));
    }

    #[tokio::test]
    async fn test_browse_custom_alpha_and_page() {
        let server = FixtureServer::builder()
            .json(
                "/m=itemdb_rs/api/catalogue/items.json?category=24&alpha=z&page=5",
                json!({ "total": 0, "items": [] }),
            )
            .start()
            .await;

        let result = tools_for(&server)
            .handle(
                "browse_items_by_category",
                object(json!({ "category": 24, "alpha": "z", "page": 5 })),
            )
            .await
            .unwrap();
        assert!(text_of(&result).starts_with("Items in Category 24 (z, Page 5):"));
    }

    #[tokio::test]
    async fn test_browse_hash_alpha_hits_encoded_url() {
        let server = FixtureServer::builder()
            .json(
                "/m=itemdb_rs/api/catalogue/items.json?category=1&alpha=%23&page=1",
                json!({ "total": 1, "items": [] }),
            )
            .start()
            .await;

        let result = tools_for(&server)
            .handle(
                "browse_items_by_category",
                object(json!({ "category": 1, "alpha": "#" })),
            )
            .await
            .unwrap();
        assert!(text_of(&result).starts_with("Items in Category 1 (#, Page 1):"));
        assert_eq!(
            server.requests()[0].path_and_query,
            "/m=itemdb_rs/api/catalogue/items.json?category=1&alpha=%23&page=1"
        );
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let server = FixtureServer::builder().start().await;
        let err = tools_for(&server)
            .handle("get_ge_info", JsonObject::new())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Unknown item tool: get_ge_info");
    }
}
