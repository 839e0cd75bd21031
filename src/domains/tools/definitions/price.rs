//! Grand Exchange price tools.
//!
//! Prices, database status and category listings from the Grand Exchange
//! price index, plus the catalogue search entry point.

use async_trait::async_trait;
use rmcp::model::{CallToolResult, JsonObject, Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::categories::GE_CATEGORIES;
use super::common::{CategoryParams, ItemIdParams, NoParams, describe};
use crate::core::config::ApiEndpoints;
use crate::core::upstream::UpstreamClient;
use crate::domains::tools::envelope::success_result;
use crate::domains::tools::error::{ToolError, ToolResult};
use crate::domains::tools::group::ToolGroup;
use crate::domains::tools::params::{alpha_param, default_page, effective_page, parse_params};

/// Sort orders accepted by `search_items`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    Name,
    Price,
    Trend,
}

/// Parameters for `search_items`.
///
/// Only the catalogue mode (`category` + `alpha`) is served upstream; every
/// other combination is echoed back as not yet implemented.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SearchItemsParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Full or partial item name to search for")]
    pub query: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Category ID (see get_all_categories, typically 0-43)")]
    pub category: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Starting letter (a-z) or # for numbers")]
    pub alpha: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Minimum price (inclusive)")]
    pub price_min: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Maximum price (inclusive)")]
    pub price_max: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Filter for members-only items")]
    pub members_only: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Sort results by name, price, or trend")]
    pub sort_by: Option<SortBy>,

    #[serde(default = "default_page")]
    #[schemars(description = "Page number (starting from 1)")]
    pub page: u32,
}

/// Price tool group.
pub struct PriceTools {
    client: UpstreamClient,
    endpoints: ApiEndpoints,
    tools: Vec<Tool>,
}

impl PriceTools {
    pub const GROUP: &'static str = "price";

    pub const ITEM_PRICE: &'static str = "get_item_price";
    pub const GE_INFO: &'static str = "get_ge_info";
    pub const CATEGORY_INFO: &'static str = "get_category_info";
    pub const ALL_CATEGORIES: &'static str = "get_all_categories";
    pub const SEARCH_ITEMS: &'static str = "search_items";

    const SEARCH_NOT_IMPLEMENTED: &'static str =
        "Advanced search is not yet implemented. Please use category and alpha for now.";

    pub fn new(client: UpstreamClient, endpoints: ApiEndpoints) -> Self {
        Self {
            client,
            endpoints,
            tools: Self::catalog(),
        }
    }

    /// Descriptors for every price tool.
    pub fn catalog() -> Vec<Tool> {
        vec![
            describe::<ItemIdParams>(
                Self::ITEM_PRICE,
                "Get the current Grand Exchange price and details for a specific item",
            ),
            describe::<NoParams>(
                Self::GE_INFO,
                "Get Grand Exchange Database information including last update date",
            ),
            describe::<CategoryParams>(
                Self::CATEGORY_INFO,
                "Get information about a specific item category",
            ),
            describe::<NoParams>(
                Self::ALL_CATEGORIES,
                "Get a list of all item categories with their IDs and names.",
            ),
            describe::<SearchItemsParams>(
                Self::SEARCH_ITEMS,
                "Search for items by name, category, starting letter, price, or membership. \
                 Supports full-text search and advanced filters. Use get_all_categories for \
                 category numbers.",
            ),
        ]
    }

    pub fn item_price_url(endpoints: &ApiEndpoints, item_id: u64) -> String {
        format!("{}/catalogue/detail.json?item={}", endpoints.prices, item_id)
    }

    pub fn ge_info_url(endpoints: &ApiEndpoints) -> String {
        format!("{}/info.json", endpoints.prices)
    }

    pub fn category_info_url(endpoints: &ApiEndpoints, category: u32) -> String {
        format!("{}/catalogue/category.json?category={}", endpoints.prices, category)
    }

    pub fn search_items_url(endpoints: &ApiEndpoints, category: u32, alpha: &str, page: u32) -> String {
        format!(
            "{}/catalogue/items.json?category={}&alpha={}&page={}",
            endpoints.prices,
            category,
            alpha_param(alpha),
            page
        )
    }

    async fn item_price(&self, params: ItemIdParams) -> ToolResult<CallToolResult> {
        let url = Self::item_price_url(&self.endpoints, params.item_id);
        let data = self.client.fetch_json(&url).await?;
        success_result(&format!("Item Detail for {}", params.item_id), &data)
    }

    async fn ge_info(&self) -> ToolResult<CallToolResult> {
        let data = self.client.fetch_json(&Self::ge_info_url(&self.endpoints)).await?;
        success_result("Grand Exchange Database Information", &data)
    }

    async fn category_info(&self, params: CategoryParams) -> ToolResult<CallToolResult> {
        let url = Self::category_info_url(&self.endpoints, params.category);
        let data = self.client.fetch_json(&url).await?;
        success_result(&format!("Category {} Information", params.category), &data)
    }

    async fn search_items(&self, mut params: SearchItemsParams) -> ToolResult<CallToolResult> {
        params.page = effective_page(params.page);

        // Category 0 and an empty alpha do not select the catalogue mode
        let category = params.category.filter(|c| *c != 0);
        let alpha = params.alpha.as_deref().filter(|a| !a.is_empty());

        match (category, alpha) {
            (Some(category), Some(alpha)) => {
                info!("Browsing category {} for '{}'", category, alpha);
                let url = Self::search_items_url(&self.endpoints, category, alpha, params.page);
                let data = self.client.fetch_json(&url).await?;
                success_result(
                    &format!(
                        "Items in Category {} starting with \"{}\" (Page {})",
                        category, alpha, params.page
                    ),
                    &data,
                )
            }
            _ => success_result(Self::SEARCH_NOT_IMPLEMENTED, &params),
        }
    }
}

#[async_trait]
impl ToolGroup for PriceTools {
    fn name(&self) -> &'static str {
        Self::GROUP
    }

    fn tools(&self) -> &[Tool] {
        &self.tools
    }

    async fn handle(&self, tool: &str, arguments: JsonObject) -> ToolResult<CallToolResult> {
        match tool {
            Self::ITEM_PRICE => self.item_price(parse_params(arguments)?).await,
            Self::GE_INFO => self.ge_info().await,
            Self::CATEGORY_INFO => self.category_info(parse_params(arguments)?).await,
            Self::ALL_CATEGORIES => success_result("All Item Categories", GE_CATEGORIES),
            Self::SEARCH_ITEMS => self.search_items(parse_params(arguments)?).await,
            _ => Err(ToolError::unknown_operation(Self::GROUP, tool)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FixtureServer, object, text_of};
    use serde_json::json;

    fn tools_for(server: &FixtureServer) -> PriceTools {
        PriceTools::new(server.client(), server.endpoints())
    }

    #[test]
    fn test_catalog_names() {
        let names: Vec<_> = PriceTools::catalog()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                "get_item_price",
                "get_ge_info",
                "get_category_info",
                "get_all_categories",
                "search_items"
            ]
        );
    }

    #[test]
    fn test_search_items_schema_requires_nothing() {
        let catalog = PriceTools::catalog();
        let search = catalog.iter().find(|t| t.name == "search_items").unwrap();
        assert!(search.input_schema.get("required").is_none());
        assert_eq!(search.input_schema["properties"]["page"]["default"], 1);
    }

    #[test]
    fn test_search_items_url_encodes_hash() {
        let endpoints = ApiEndpoints::default();
        assert_eq!(
            PriceTools::search_items_url(&endpoints, 1, "#", 1),
            "https://secure.runescape.com/m=itemdb_rs/api/catalogue/items.json?category=1&alpha=%23&page=1"
        );
    }

    #[tokio::test]
    async fn test_get_item_price() {
        let server = FixtureServer::builder()
            .json(
                "/m=itemdb_rs/api/catalogue/detail.json?item=4151",
                json!({ "item": { "id": 4151, "name": "Abyssal whip" } }),
            )
            .start()
            .await;

        let result = tools_for(&server)
            .handle("get_item_price", object(json!({ "itemId": 4151 })))
            .await
            .unwrap();

        let text = text_of(&result);
        assert!(text.starts_with("Item Detail for 4151:\n\n"));
        assert!(text.contains("Abyssal whip"));
    }

    #[tokio::test]
    async fn test_get_item_price_requires_item_id() {
        let server = FixtureServer::builder().start().await;
        let err = tools_for(&server)
            .handle("get_item_price", JsonObject::new())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Item ID is required");
        assert!(server.requests().is_empty());
    }

    #[tokio::test]
    async fn test_get_ge_info() {
        let server = FixtureServer::builder()
            .json("/m=itemdb_rs/api/info.json", json!({ "lastConfigUpdateRuneday": 8000 }))
            .start()
            .await;

        let result = tools_for(&server)
            .handle("get_ge_info", JsonObject::new())
            .await
            .unwrap();
        assert_eq!(
            text_of(&result),
            "Grand Exchange Database Information:\n\n{\n  \"lastConfigUpdateRuneday\": 8000\n}"
        );
    }

    #[tokio::test]
    async fn test_get_category_info() {
        let server = FixtureServer::builder()
            .json(
                "/m=itemdb_rs/api/catalogue/category.json?category=24",
                json!({ "types": [], "alpha": [{ "letter": "a", "items": 3 }] }),
            )
            .start()
            .await;

        let result = tools_for(&server)
            .handle("get_category_info", object(json!({ "category": 24 })))
            .await
            .unwrap();
        assert!(text_of(&result).starts_with("Category 24 Information:"));
    }

    #[tokio::test]
    async fn test_get_all_categories_is_static() {
        let server = FixtureServer::builder().start().await;
        let result = tools_for(&server)
            .handle("get_all_categories", JsonObject::new())
            .await
            .unwrap();

        let text = text_of(&result);
        assert!(text.starts_with("All Item Categories:"));
        assert!(text.contains("\"Necromancy armour\""));
        assert!(server.requests().is_empty());
    }

    #[tokio::test]
    async fn test_search_items_catalogue_mode() {
        let server = FixtureServer::builder()
            .json(
                "/m=itemdb_rs/api/catalogue/items.json?category=1&alpha=%23&page=2",
                json!({ "total": 1, "items": [{ "id": 5, "name": "3rd age arrows" }] }),
            )
            .start()
            .await;

        let result = tools_for(&server)
            .handle(
                "search_items",
                object(json!({ "category": 1, "alpha": "#", "page": 2 })),
            )
            .await
            .unwrap();

        let text = text_of(&result);
        assert!(text.starts_with("Items in Category 1 starting with \"#\" (Page 2):"));
        assert!(text.contains("3rd age arrows"));
    }

    #[tokio::test]
    async fn test_search_items_stub_echoes_filters() {
        let server = FixtureServer::builder().start().await;
        let result = tools_for(&server)
            .handle(
                "search_items",
                object(json!({ "query": "whip", "members_only": true, "sort_by": "price" })),
            )
            .await
            .unwrap();

        let expected = json!({
            "query": "whip",
            "members_only": true,
            "sort_by": "price",
            "page": 1
        });
        assert_eq!(
            text_of(&result),
            format!(
                "{}:\n\n{}",
                PriceTools::SEARCH_NOT_IMPLEMENTED,
                serde_json::to_string_pretty(&expected).unwrap()
            )
        );
        assert!(!result.is_error.unwrap_or(false));
        assert!(server.requests().is_empty());
    }

    #[tokio::test]
    async fn test_search_items_null_page_defaults_to_one() {
        let server = FixtureServer::builder().start().await;
        let result = tools_for(&server)
            .handle("search_items", object(json!({ "query": "whip", "page": null })))
            .await
            .unwrap();

        let expected = json!({ "query": "whip", "page": 1 });
        assert_eq!(
            text_of(&result),
            format!(
                "{}:\n\n{}",
                PriceTools::SEARCH_NOT_IMPLEMENTED,
                serde_json::to_string_pretty(&expected).unwrap()
            )
        );
    }

    #[tokio::test]
    async fn test_search_items_category_zero_is_stub() {
        let server = FixtureServer::builder().start().await;
        let result = tools_for(&server)
            .handle("search_items", object(json!({ "category": 0, "alpha": "a" })))
            .await
            .unwrap();
        assert!(text_of(&result).starts_with(PriceTools::SEARCH_NOT_IMPLEMENTED));
        assert!(server.requests().is_empty());
    }

    #[tokio::test]
    async fn test_search_items_rejects_unknown_sort() {
        let server = FixtureServer::builder().start().await;
        let err = tools_for(&server)
            .handle("search_items", object(json!({ "sort_by": "weight" })))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }

    #[tokio::test]
    async fn test_upstream_failure_propagates() {
        let server = FixtureServer::builder()
            .text("/m=itemdb_rs/api/info.json", 500, "Internal Server Error")
            .start()
            .await;

        let err = tools_for(&server)
            .handle("get_ge_info", JsonObject::new())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("API request failed: 500"));
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let server = FixtureServer::builder().start().await;
        let err = tools_for(&server)
            .handle("unknown_tool", JsonObject::new())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Unknown price tool: unknown_tool");
    }
}
