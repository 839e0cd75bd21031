//! Hiscore lookups.

use std::fmt;

use async_trait::async_trait;
use rmcp::model::{CallToolResult, JsonObject, Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::common::describe;
use super::hiscore;
use crate::core::config::ApiEndpoints;
use crate::core::upstream::UpstreamClient;
use crate::domains::tools::envelope::success_result;
use crate::domains::tools::error::{ToolError, ToolResult};
use crate::domains::tools::group::ToolGroup;
use crate::domains::tools::params::{encode_component, parse_params};

/// Which hiscore table to query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    #[default]
    Normal,
    Ironman,
    Hardcore,
}

impl GameMode {
    /// Path of the lite CSV feed, relative to the hiscores base.
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Normal => "m=hiscore/index_lite.ws",
            Self::Ironman => "m=hiscore_ironman/index_lite.ws",
            Self::Hardcore => "m=hiscore_hardcore_ironman/index_lite.ws",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Ironman => "ironman",
            Self::Hardcore => "hardcore",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters for `get_player_stats`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PlayerStatsParams {
    #[schemars(title = "Username", description = "Player username")]
    pub username: String,

    #[serde(rename = "gameMode", default)]
    #[schemars(description = "Game mode (normal, ironman, hardcore)")]
    pub game_mode: GameMode,
}

/// Player tool group.
pub struct PlayerTools {
    client: UpstreamClient,
    endpoints: ApiEndpoints,
    tools: Vec<Tool>,
}

impl PlayerTools {
    pub const GROUP: &'static str = "player";

    pub const PLAYER_STATS: &'static str = "get_player_stats";

    pub fn new(client: UpstreamClient, endpoints: ApiEndpoints) -> Self {
        Self {
            client,
            endpoints,
            tools: Self::catalog(),
        }
    }

    pub fn catalog() -> Vec<Tool> {
        vec![describe::<PlayerStatsParams>(
            Self::PLAYER_STATS,
            "Get player statistics from RuneScape 3 hiscores",
        )]
    }

    pub fn player_stats_url(endpoints: &ApiEndpoints, username: &str, mode: GameMode) -> String {
        format!(
            "{}/{}?player={}",
            endpoints.hiscores,
            mode.endpoint(),
            encode_component(username)
        )
    }

    async fn player_stats(&self, params: PlayerStatsParams) -> ToolResult<CallToolResult> {
        let url = Self::player_stats_url(&self.endpoints, &params.username, params.game_mode);
        let body = self.client.fetch_text(&url).await?;

        let stats = hiscore::decode(&body);
        debug!(
            username = %params.username,
            mode = %params.game_mode,
            skills = stats.len(),
            "Decoded hiscore feed"
        );

        success_result(
            &format!("Player Stats for {} ({})", params.username, params.game_mode),
            &stats,
        )
    }
}

#[async_trait]
impl ToolGroup for PlayerTools {
    fn name(&self) -> &'static str {
        Self::GROUP
    }

    fn tools(&self) -> &[Tool] {
        &self.tools
    }

    async fn handle(&self, tool: &str, arguments: JsonObject) -> ToolResult<CallToolResult> {
        match tool {
            Self::PLAYER_STATS => self.player_stats(parse_params(arguments)?).await,
            _ => Err(ToolError::unknown_operation(Self::GROUP, tool)),
        }
    }
}
