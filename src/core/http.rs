//! HTTP transport for the Stats API: one GET per call, no retries, no caching.

use super::config::ApiConfig;
use crate::error::{MlbError, Result};
use crate::models::decode::is_absent;
use reqwest::Client;
use serde_json::{Map, Value};
use tracing::{debug, warn};

#[cfg(test)]
mod tests;

/// Status, reason phrase and parsed body of one response.
#[derive(Debug, Clone, PartialEq)]
pub struct MlbResult {
    pub status_code: u16,
    pub message: String,
    pub data: Value,
}

impl MlbResult {
    /// True when the body carries nothing to decode (`null`, `{}` or `[]`).
    pub fn is_empty(&self) -> bool {
        match &self.data {
            Value::Array(items) => items.is_empty(),
            other => is_absent(other),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Transport {
    client: Client,
    base_url: String,
}

impl Transport {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `{base_url}/{endpoint}` with the given query parameters.
    ///
    /// 2xx bodies are parsed as JSON (an empty body reads as `null`). A 4xx
    /// is "no such resource": it is logged and comes back as an empty mapping.
    /// Any other status is an [`MlbError::Status`].
    pub async fn get(&self, endpoint: &str, query: &[(&str, String)]) -> Result<MlbResult> {
        let url = format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'));

        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();
        let reason = status.canonical_reason().unwrap_or_default().to_string();
        debug!(%url, status = status.as_u16(), %reason, "GET");

        if status.is_success() {
            let body = response.text().await?;
            let data = if body.trim().is_empty() {
                Value::Null
            } else {
                serde_json::from_str(&body)?
            };
            return Ok(MlbResult {
                status_code: status.as_u16(),
                message: reason,
                data,
            });
        }

        if status.is_client_error() {
            warn!(%url, status = status.as_u16(), %reason, "treating client error as no result");
            return Ok(MlbResult {
                status_code: status.as_u16(),
                message: reason,
                data: Value::Object(Map::new()),
            });
        }

        Err(MlbError::Status {
            url,
            status: status.as_u16(),
            reason,
        })
    }
}
