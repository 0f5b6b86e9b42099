//! Client for the dashboard's REST API.
//!
//! # Endpoints
//!
//! | Resource      | Method | Path             | Body          |
//! |---------------|--------|------------------|---------------|
//! | Market status | GET    | `/market-status` | object        |
//! | Indices       | GET    | `/indices`       | array         |
//! | Stocks        | GET    | `/stocks`        | array         |
//! | Bonds         | GET    | `/bonds`         | array         |
//! | News          | GET    | `/news`          | array         |
//!
//! Paths are relative to the configured base URL. Any non-2xx status is an
//! error; a request that gets no response at all is a transport error.
//! One attempt per call, no retries.

use std::time::Duration;

use brvm_core::Resource;
use brvm_core::error::{GatewayError, GatewayResult};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Join a base URL and a relative path with exactly one `/`.
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Build the shared HTTP client, with an optional per-request timeout.
pub fn build_http_client(timeout: Option<Duration>) -> GatewayResult<reqwest::Client> {
    let mut builder = reqwest::Client::builder();
    if let Some(t) = timeout {
        builder = builder.timeout(t);
    }
    builder
        .build()
        .map_err(|e| GatewayError::Config(format!("http client: {e}")))
}

pub struct RemoteClient {
    http: reqwest::Client,
    base_url: String,
}

impl RemoteClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self { http, base_url: base_url.into() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, resource: Resource) -> String {
        join_url(&self.base_url, resource.api_path())
    }

    /// GET the resource and decode its JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, resource: Resource) -> GatewayResult<T> {
        let url = self.url_for(resource);
        debug!("[remote] GET {url}");

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| GatewayError::transport(resource, format!("GET {url}: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(GatewayError::unavailable(resource, format!("GET {url}: HTTP {status}")));
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| GatewayError::transport(resource, format!("GET {url}: {e}")))?;

        serde_json::from_slice(&body).map_err(|e| GatewayError::parse(resource, e))
    }
}
