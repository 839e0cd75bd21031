//! Test helpers.
//!
//! `FixtureServer` is an in-process HTTP server that stands in for the
//! upstream APIs. Routes are matched on the exact path and query string, so
//! tests also pin down the URLs the tools build.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use rmcp::model::{CallToolResult, JsonObject, RawContent};
use serde_json::Value;

use crate::core::config::{ApiEndpoints, UpstreamConfig};
use crate::core::upstream::UpstreamClient;

const TEST_USER_AGENT: &str = "runescape-mcp-tests";

/// A request observed by the fixture server.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path_and_query: String,
    pub user_agent: Option<String>,
}

#[derive(Default)]
struct Fixtures {
    routes: HashMap<String, (StatusCode, String)>,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// Builder for a [`FixtureServer`].
#[derive(Default)]
pub struct FixtureBuilder {
    routes: HashMap<String, (StatusCode, String)>,
}

impl FixtureBuilder {
    /// Answer `path_and_query` with a 200 JSON body.
    pub fn json(mut self, path_and_query: &str, body: Value) -> Self {
        self.routes
            .insert(path_and_query.to_string(), (StatusCode::OK, body.to_string()));
        self
    }

    /// Answer `path_and_query` with a raw body and status.
    pub fn text(mut self, path_and_query: &str, status: u16, body: &str) -> Self {
        let status = StatusCode::from_u16(status).expect("valid status code");
        self.routes
            .insert(path_and_query.to_string(), (status, body.to_string()));
        self
    }

    /// Bind to an ephemeral port and start serving.
    pub async fn start(self) -> FixtureServer {
        let state = Arc::new(Fixtures {
            routes: self.routes,
            requests: Mutex::default(),
        });
        let app = Router::new().fallback(respond).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind fixture server");
        let addr = listener.local_addr().expect("fixture server address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("fixture server");
        });

        FixtureServer {
            base_url: format!("http://{}", addr),
            state,
        }
    }
}

/// Running stand-in for the upstream APIs.
pub struct FixtureServer {
    base_url: String,
    state: Arc<Fixtures>,
}

impl FixtureServer {
    pub fn builder() -> FixtureBuilder {
        FixtureBuilder::default()
    }

    /// Absolute URL for a path on this server.
    pub fn url(&self, path_and_query: &str) -> String {
        format!("{}{}", self.base_url, path_and_query)
    }

    /// Endpoints laid out like the real APIs, rooted at this server.
    pub fn endpoints(&self) -> ApiEndpoints {
        endpoints_at(&self.base_url)
    }

    /// A client configured for this server.
    pub fn client(&self) -> UpstreamClient {
        UpstreamClient::new(&test_upstream_config(&self.base_url)).expect("test client")
    }

    /// Requests received so far, in arrival order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }
}

async fn respond(State(state): State<Arc<Fixtures>>, uri: Uri, headers: HeaderMap) -> Response {
    let key = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());

    state.requests.lock().unwrap().push(RecordedRequest {
        path_and_query: key.clone(),
        user_agent: headers
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    });

    match state.routes.get(&key) {
        Some((status, body)) => (*status, body.clone()).into_response(),
        None => (StatusCode::NOT_FOUND, format!("no fixture for {}", key)).into_response(),
    }
}

fn endpoints_at(base_url: &str) -> ApiEndpoints {
    ApiEndpoints {
        prices: format!("{}/m=itemdb_rs/api", base_url),
        catalogue: format!("{}/m=itemdb_rs/api", base_url),
        hiscores: format!("{}/m=hiscore", base_url),
        wiki: format!("{}/api.php", base_url),
    }
}

/// Upstream configuration pointing at `base_url`.
pub fn test_upstream_config(base_url: &str) -> UpstreamConfig {
    UpstreamConfig {
        user_agent: TEST_USER_AGENT.to_string(),
        log_payloads: true,
        endpoints: endpoints_at(base_url),
    }
}

/// Base URL of a local port nothing is listening on.
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind probe socket");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{}", addr)
}

/// Text of the single content block of a tool result.
pub fn text_of(result: &CallToolResult) -> String {
    match &result.content.first().expect("one content block").raw {
        RawContent::Text(text) => text.text.clone(),
        other => panic!("expected text content, got {:?}", other),
    }
}

/// Unwrap a `json!` object literal into tool arguments.
pub fn object(value: Value) -> JsonObject {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {}", other),
    }
}
