//! RuneScape Wiki page extracts.

use async_trait::async_trait;
use rmcp::model::{CallToolResult, JsonObject, Tool};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use super::common::describe;
use crate::core::config::ApiEndpoints;
use crate::core::upstream::UpstreamClient;
use crate::domains::tools::envelope::text_result;
use crate::domains::tools::error::{ToolError, ToolResult};
use crate::domains::tools::group::ToolGroup;
use crate::domains::tools::params::{encode_component, parse_params};

/// Body used when the wiki has no extract for the page.
pub const NO_CONTENT: &str = "(No content found)";

/// Parameters for `get_wiki_page_content`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WikiPageParams {
    #[schemars(title = "Page title", description = "Wiki page title")]
    pub page: String,
}

/// Wiki tool group.
pub struct WikiTools {
    client: UpstreamClient,
    endpoints: ApiEndpoints,
    tools: Vec<Tool>,
}

impl WikiTools {
    pub const GROUP: &'static str = "wiki";

    pub const PAGE_CONTENT: &'static str = "get_wiki_page_content";

    pub fn new(client: UpstreamClient, endpoints: ApiEndpoints) -> Self {
        Self {
            client,
            endpoints,
            tools: Self::catalog(),
        }
    }

    pub fn catalog() -> Vec<Tool> {
        vec![describe::<WikiPageParams>(
            Self::PAGE_CONTENT,
            "Fetch the plain text content of a RuneScape Wiki page (e.g., Mining, Smithing, etc.)",
        )]
    }

    pub fn page_content_url(endpoints: &ApiEndpoints, page: &str) -> String {
        format!(
            "{}?action=query&prop=extracts&format=json&explaintext=1&titles={}",
            endpoints.wiki,
            encode_component(page)
        )
    }

    /// Plain-text extract of the first page in a `prop=extracts` response.
    pub fn extract_text(response: &Value) -> &str {
        response
            .pointer("/query/pages")
            .and_then(Value::as_object)
            .and_then(|pages| pages.values().next())
            .and_then(|page| page.get("extract"))
            .and_then(Value::as_str)
            .unwrap_or(NO_CONTENT)
    }

    async fn page_content(&self, params: WikiPageParams) -> ToolResult<CallToolResult> {
        let url = Self::page_content_url(&self.endpoints, &params.page);
        let data = self.client.fetch_json(&url).await?;
        Ok(text_result(
            &format!("Wiki Page: {}", params.page),
            Self::extract_text(&data),
        ))
    }
}

#[async_trait]
impl ToolGroup for WikiTools {
    fn name(&self) -> &'static str {
        Self::GROUP
    }

    fn tools(&self) -> &[Tool] {
        &self.tools
    }

    async fn handle(&self, tool: &str, arguments: JsonObject) -> ToolResult<CallToolResult> {
        match tool {
            Self::PAGE_CONTENT => self.page_content(parse_params(arguments)?).await,
            _ => Err(ToolError::unknown_operation(Self::GROUP, tool)),
        }
    }
}
