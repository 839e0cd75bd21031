//! Grand Exchange database info resource definition.

use super::ResourceDefinition;
use crate::core::config::ApiEndpoints;

/// Runedate of the last Grand Exchange database update.
pub struct GeInfoResource;

impl ResourceDefinition for GeInfoResource {
    const URI: &'static str = "runescape://prices/latest";
    const NAME: &'static str = "Grand Exchange Database Info";
    const DESCRIPTION: &'static str =
        "Information about the Grand Exchange Database including last update";

    fn upstream_url(endpoints: &ApiEndpoints) -> String {
        format!("{}/info.json", endpoints.prices)
    }
}
