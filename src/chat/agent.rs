use std::sync::LazyLock;

use log::{debug, info};
use regex::Regex;
use serde_json::json;

use crate::error::{FinderError, Result};
use crate::models::RoleProfile;
use crate::pipeline::RoleExtractor;

const PROMPT_TEMPLATE: &str = include_str!("prompt_template.txt");

const REQUIRED_KEYS: [&str; 4] = [
    "company_name",
    "department",
    "target_manager_title",
    "team_keywords",
];

static CODE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```(?:json)?").unwrap()); // static pattern

/// Asks the model who the hiring manager for a posting probably is.
pub struct RoleAgent {
    client: reqwest::Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl RoleAgent {
    pub fn new(api_key: String, model: String, endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            model,
            endpoint,
        }
    }

    async fn call_model(&self, prompt: &str) -> Result<String> {
        info!("asking {} for the likely hiring manager", self.model);
        debug!("prompt length: {} characters", prompt.len());

        let request_body = json!({
            "contents": [{"parts": [{"text": prompt}]}],
            "generationConfig": {
                "temperature": 0.3,
                "maxOutputTokens": 1024,
                "responseMimeType": "application/json"
            }
        });

        let url = format!(
            "{}/{}:generateContent?key={}",
            self.endpoint.trim_end_matches('/'),
            self.model,
            self.api_key
        );

        let response = self
            .client
            .post(&url)
            .json(&request_body)
            .send()
            .await?
            .error_for_status()?;

        let body: serde_json::Value = response.json().await?;

        let content = body
            .get("candidates")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("content"))
            .and_then(|c| c.get("parts"))
            .and_then(|p| p.get(0))
            .and_then(|p| p.get("text"))
            .and_then(|t| t.as_str())
            .ok_or_else(|| {
                FinderError::ModelResponse("unexpected completion envelope".to_string())
            })?;

        Ok(content.to_string())
    }
}

impl RoleExtractor for RoleAgent {
    /// One synchronous call, no retry: an unusable reply aborts the request.
    async fn extract_role(&self, text: &str) -> Result<RoleProfile> {
        let prompt = PROMPT_TEMPLATE.replace("{job_text}", text);
        let reply = self.call_model(&prompt).await?;

        debug!("model reply length: {} characters", reply.len());

        parse_role_profile(&reply)
    }
}

/// Drops any markdown code fences the model wrapped around its answer.
pub fn strip_code_fences(raw: &str) -> String {
    CODE_FENCE.replace_all(raw, "").trim().to_string()
}

/// The model is an untrusted producer: its reply is parsed, then checked
/// against the four-field shape before a [`RoleProfile`] exists. Missing or
/// mistyped fields (including `team_keywords` arriving as a bare string) are
/// rejected, never coerced.
pub fn parse_role_profile(raw: &str) -> Result<RoleProfile> {
    let cleaned = strip_code_fences(raw);

    let value: serde_json::Value = serde_json::from_str(&cleaned)
        .map_err(|e| FinderError::ModelResponse(format!("invalid JSON: {}", e)))?;

    let object = value
        .as_object()
        .ok_or_else(|| FinderError::Schema("reply is not a JSON object".to_string()))?;

    for key in REQUIRED_KEYS {
        if !object.contains_key(key) {
            return Err(FinderError::Schema(format!("missing required key '{}'", key)));
        }
    }

    serde_json::from_value(value).map_err(|e| FinderError::Schema(e.to_string()))
}
