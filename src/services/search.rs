use crate::config::SearchSettings;
use crate::services::upstream::{ensure_success, UpstreamError};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    q: &'a str,
    gl: &'a str,
}

/// Web search API client
///
/// Results are restricted to the configured country (`gt` by default).
pub struct SearchClient {
    endpoint: String,
    api_key: String,
    country: String,
    client: Client,
}

impl SearchClient {
    pub fn new(settings: SearchSettings) -> Result<Self, UpstreamError> {
        let mut builder = Client::builder();
        if let Some(secs) = settings.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            endpoint: settings.endpoint,
            api_key: settings.api_key,
            country: settings.country,
            client: builder.build()?,
        })
    }

    /// Run the query and hand back the parsed body untouched
    pub async fn search_schools(&self, query: &str) -> Result<Value, UpstreamError> {
        tracing::debug!("Searching {} for: {}", self.endpoint, query);

        let response = self
            .client
            .post(&self.endpoint)
            .header("X-API-KEY", &self.api_key)
            .json(&SearchRequest {
                q: query,
                gl: &self.country,
            })
            .send()
            .await?;

        let response = ensure_success("search", response).await?;
        let body = response.text().await?;

        serde_json::from_str(&body)
            .map_err(|e| UpstreamError::Response(format!("Search body is not JSON: {}", e)))
    }
}
