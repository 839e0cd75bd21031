//! Resource service implementation.
//!
//! The ResourceService lists the registered resources and reads them by
//! fetching their upstream document. Nothing is cached.
//!
//! Resources are defined in `definitions/` and registered via `registry.rs`.
//! Adding a new resource does NOT require modifying this file.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents};
use tracing::{debug, info};

use super::error::ResourceError;
use super::registry::get_all_resources;
use crate::core::config::ApiEndpoints;
use crate::core::upstream::UpstreamClient;

/// Service for listing and reading resources.
pub struct ResourceService {
    client: UpstreamClient,

    /// Registered resources, in listing order.
    resources: Vec<ResourceEntry>,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// Where the content is fetched from.
    pub upstream_url: String,
}

impl ResourceService {
    /// Create a ResourceService over the registered resources.
    pub fn new(client: UpstreamClient, endpoints: &ApiEndpoints) -> Self {
        let resources = get_all_resources(endpoints);
        for entry in &resources {
            info!("Registering resource: {}", entry.resource.raw.uri);
        }

        Self { client, resources }
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .iter()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let entry = self
            .resources
            .iter()
            .find(|entry| entry.resource.raw.uri == uri)
            .ok_or_else(|| ResourceError::not_found(uri))?;

        debug!("Reading resource {} from {}", uri, entry.upstream_url);
        let data = self.client.fetch_json(&entry.upstream_url).await?;

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::TextResourceContents {
                uri: uri.to_string(),
                mime_type: entry.resource.raw.mime_type.clone(),
                text: serde_json::to_string_pretty(&data)?,
                meta: None,
            }],
        })
    }
}
