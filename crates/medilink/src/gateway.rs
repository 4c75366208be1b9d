use chrono::Utc;
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::errors::{GatewayError, GatewayResult};
use crate::models::message::ConversationMessage;
use crate::models::reply::AgentReply;
use crate::models::role::AgentRole;
use crate::parser::parse_reply;
use crate::prompts::{get_prompt, prompt_name};
use crate::providers::base::{CompletionRequest, Provider};
use crate::providers::configs::ModelMap;

pub const DEFAULT_SOURCE: &str = "medilink";
pub const DEFAULT_CUSTOMER: &str = "medilink_patient";

/// Orchestrates one request/response cycle against a model provider.
///
/// The gateway holds no per-conversation state. Every call sends one system prompt
/// and one user message, makes a single attempt, and never retries.
pub struct CompletionGateway {
    provider: Box<dyn Provider>,
    models: ModelMap,
    source: String,
}

impl CompletionGateway {
    pub fn new(provider: Box<dyn Provider>, models: ModelMap) -> Self {
        Self {
            provider,
            models,
            source: DEFAULT_SOURCE.to_string(),
        }
    }

    /// Tag reported as `metadata.source` on every request
    pub fn with_source<S: Into<String>>(mut self, source: S) -> Self {
        self.source = source.into();
        self
    }

    /// Build the provider request for `role`.
    ///
    /// Only the most recent entry of `conversation` is forwarded; earlier turns are
    /// dropped, so each call is effectively single-turn.
    pub fn build_request(
        &self,
        role: AgentRole,
        conversation: &[ConversationMessage],
        user_id: &str,
    ) -> GatewayResult<CompletionRequest> {
        let latest = conversation
            .last()
            .filter(|message| !message.is_blank())
            .ok_or(GatewayError::EmptyInput)?;

        let system_prompt = get_prompt(role);
        let user_id = user_id.trim();
        let customer_identifier = if user_id.is_empty() {
            DEFAULT_CUSTOMER.to_string()
        } else {
            user_id.to_string()
        };
        let thread_identifier = format!(
            "{}-{}-{}",
            customer_identifier,
            Utc::now().timestamp_millis(),
            &Uuid::new_v4().simple().to_string()[..8]
        );

        let mut metadata = BTreeMap::new();
        metadata.insert("agent_type".to_string(), role.to_string());
        metadata.insert("source".to_string(), self.source.clone());

        Ok(CompletionRequest {
            role,
            system_prompt: system_prompt.to_string(),
            messages: vec![
                ConversationMessage::system(system_prompt),
                ConversationMessage::user(latest.content.clone()),
            ],
            model_id: self.models.model_for(role).to_string(),
            customer_identifier,
            thread_identifier,
            prompt_name: prompt_name(role).to_string(),
            metadata,
        })
    }

    /// Run one full cycle. Only configuration, input and transport problems are
    /// errors; replies that fail to decode come back as the role's fallback value.
    pub async fn send(
        &self,
        role: AgentRole,
        conversation: &[ConversationMessage],
        user_id: &str,
    ) -> GatewayResult<AgentReply> {
        let request = self.build_request(role, conversation, user_id)?;
        tracing::info!(
            agent_type = %role,
            model = %request.model_id,
            thread = %request.thread_identifier,
            "sending completion request"
        );

        let (raw, usage) = self.provider.complete(&request).await?;
        tracing::debug!(
            thread = %request.thread_identifier,
            input_tokens = ?usage.input_tokens,
            output_tokens = ?usage.output_tokens,
            "completion received"
        );

        Ok(parse_reply(role, &raw))
    }

    /// The caller-facing contract: `None` means the assistant could not be reached.
    /// For triage, callers must then show their own emergency guidance.
    pub async fn respond(
        &self,
        conversation: &[ConversationMessage],
        role: AgentRole,
        user_id: &str,
    ) -> Option<AgentReply> {
        match self.send(role, conversation, user_id).await {
            Ok(reply) => Some(reply),
            Err(e) => {
                tracing::error!(agent_type = %role, error = %e, "assistant request failed");
                None
            }
        }
    }
}
