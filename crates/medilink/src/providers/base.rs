use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::errors::GatewayResult;
use crate::models::message::ConversationMessage;
use crate::models::role::AgentRole;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Usage {
    pub input_tokens: Option<i32>,
    pub output_tokens: Option<i32>,
    pub total_tokens: Option<i32>,
}

impl Usage {
    pub fn new(
        input_tokens: Option<i32>,
        output_tokens: Option<i32>,
        total_tokens: Option<i32>,
    ) -> Self {
        Self {
            input_tokens,
            output_tokens,
            total_tokens,
        }
    }
}

/// A single role-scoped completion call. Built fresh for every request and never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub role: AgentRole,
    pub system_prompt: String,
    /// The messages sent to the provider, system prompt first
    pub messages: Vec<ConversationMessage>,
    pub model_id: String,
    pub customer_identifier: String,
    /// Request-scoped trace id; the provider does not use it for conversation continuity
    pub thread_identifier: String,
    pub prompt_name: String,
    pub metadata: BTreeMap<String, String>,
}

/// Base trait for model providers
#[async_trait]
pub trait Provider: Send + Sync {
    /// Send the request and return the raw reply text.
    ///
    /// Implementations make exactly one attempt. Any transport problem is reported as
    /// `ProviderUnavailable`, and a reply without usable text as `MalformedResponse`.
    async fn complete(&self, request: &CompletionRequest) -> GatewayResult<(String, Usage)>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use serde_json::json;

    #[test]
    fn test_usage_creation() {
        let usage = Usage::new(Some(10), Some(20), Some(30));
        assert_eq!(usage.input_tokens, Some(10));
        assert_eq!(usage.output_tokens, Some(20));
        assert_eq!(usage.total_tokens, Some(30));
    }

    #[test]
    fn test_usage_serialization() -> Result<()> {
        let usage = Usage::new(Some(10), None, Some(30));
        let json_value = serde_json::to_value(&usage)?;
        assert_eq!(json_value["input_tokens"], json!(10));
        assert_eq!(json_value["output_tokens"], json!(null));
        assert_eq!(json_value["total_tokens"], json!(30));
        Ok(())
    }
}
