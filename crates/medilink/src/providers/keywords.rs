use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use super::base::{CompletionRequest, Provider, Usage};
use super::configs::KeywordsProviderConfig;
use super::utils::{check_error_body, get_usage, request_to_payload, response_to_reply_text};
use crate::errors::{ConfigurationError, GatewayError, GatewayResult};

/// OpenAI-compatible chat-completions gateway (Keywords AI by default)
pub struct KeywordsProvider {
    client: Client,
    config: KeywordsProviderConfig,
}

impl KeywordsProvider {
    pub fn new(config: KeywordsProviderConfig) -> Result<Self, ConfigurationError> {
        if config.api_key.trim().is_empty() {
            return Err(ConfigurationError::MissingCredential {
                var: "KEYWORDS_API_KEY".to_string(),
            });
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ConfigurationError::InvalidSetting {
                key: "http_client".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self { client, config })
    }

    async fn post(&self, payload: Value) -> GatewayResult<Value> {
        let url = format!(
            "{}/api/v1/chat/completions",
            self.config.host.trim_end_matches('/')
        );

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, format!("Bearer {}", self.config.api_key))
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::error!(status = status.as_u16(), body = %body, "model provider request failed");
        Err(GatewayError::unavailable(
            Some(status.as_u16()),
            format!("request failed with status {}", status),
        ))
    }
}

#[async_trait]
impl Provider for KeywordsProvider {
    async fn complete(&self, request: &CompletionRequest) -> GatewayResult<(String, Usage)> {
        let payload = request_to_payload(request);
        let response = self.post(payload).await?;

        check_error_body(&response)?;

        let reply = response_to_reply_text(&response)?;
        let usage = get_usage(&response);
        Ok((reply, usage))
    }
}
