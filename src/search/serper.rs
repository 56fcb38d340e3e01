use log::debug;
use serde::Deserialize;
use serde_json::json;

use crate::error::{FinderError, Result};
use crate::models::SearchResult;

use super::SearchTransport;

#[derive(Debug, Deserialize)]
struct SerperResponse {
    #[serde(default)]
    organic: Vec<SearchResult>,
}

/// POSTs `{q, num}` to the Serper search endpoint. Timeout is the client
/// default; only the page fetch carries an explicit one.
pub struct SerperTransport {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl SerperTransport {
    pub fn new(api_key: String, endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            endpoint,
        }
    }
}

impl SearchTransport for SerperTransport {
    async fn run_query(&self, query: &str, num: usize) -> Result<Vec<SearchResult>> {
        let body = json!({ "q": query, "num": num });

        let response = self
            .client
            .post(&self.endpoint)
            .header("X-API-KEY", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FinderError::SearchApi {
                status: status.as_u16(),
                body,
            });
        }

        let data: SerperResponse = response.json().await?;
        debug!("search returned {} organic results", data.organic.len());

        Ok(data.organic)
    }
}
