//! Process-wide gateway handle.
//!
//! The gateway is initialised exactly once, either explicitly with [`init`] or from the
//! environment with [`init_from_env`]. Until then every lookup reports
//! `ConfigurationError::NotInitialized` instead of lazily building a client.
use std::sync::OnceLock;

use crate::errors::ConfigurationError;
use crate::gateway::{CompletionGateway, DEFAULT_SOURCE};
use crate::models::message::ConversationMessage;
use crate::models::reply::AgentReply;
use crate::models::role::AgentRole;
use crate::providers::configs::{get_env, KeywordsProviderConfig, ModelMap};
use crate::providers::keywords::KeywordsProvider;

static GATEWAY: OnceLock<CompletionGateway> = OnceLock::new();

pub fn init(gateway: CompletionGateway) -> Result<&'static CompletionGateway, ConfigurationError> {
    GATEWAY
        .set(gateway)
        .map_err(|_| ConfigurationError::AlreadyInitialized)?;
    self::gateway()
}

/// Build the Keywords provider from the environment (a `.env` file is honoured) and
/// install it as the global gateway.
pub fn init_from_env() -> Result<&'static CompletionGateway, ConfigurationError> {
    dotenv::dotenv().ok();

    let provider = KeywordsProvider::new(KeywordsProviderConfig::from_env()?)?;
    let models = ModelMap::from_env()?;
    let source = get_env("MEDILINK_SOURCE", false, None)?
        .unwrap_or_else(|| DEFAULT_SOURCE.to_string());

    init(CompletionGateway::new(Box::new(provider), models).with_source(source))
}

pub fn gateway() -> Result<&'static CompletionGateway, ConfigurationError> {
    GATEWAY.get().ok_or(ConfigurationError::NotInitialized)
}

/// Send the conversation to the assistant for `role`.
///
/// Returns `None` when the assistant cannot be reached or the gateway was never
/// configured. When `role` is triage, the caller must respond to `None` with
/// emergency guidance of its own.
pub async fn generate_ai_response(
    messages: &[ConversationMessage],
    role: AgentRole,
    user_id: &str,
) -> Option<AgentReply> {
    match gateway() {
        Ok(gateway) => gateway.respond(messages, role, user_id).await,
        Err(e) => {
            tracing::error!(error = %e, "assistant gateway unavailable");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::triage::Severity;
    use crate::providers::mock::MockProvider;

    // The global can only be set once per process, so the whole lifecycle lives in one test.
    #[tokio::test]
    async fn test_global_lifecycle() {
        assert_eq!(gateway().err(), Some(ConfigurationError::NotInitialized));
        let reply =
            generate_ai_response(&[ConversationMessage::user("hi")], AgentRole::Triage, "u").await;
        assert_eq!(reply, None);

        let provider = MockProvider::new(vec![
            Ok(r#"{"severity": "routine", "recommendation": "Rest and hydrate.", "response": "Mild colds usually pass."}"#.to_string()),
        ]);
        init(CompletionGateway::new(Box::new(provider.clone()), ModelMap::default())).unwrap();

        let second = init(CompletionGateway::new(Box::new(provider), ModelMap::default()));
        assert_eq!(second.err(), Some(ConfigurationError::AlreadyInitialized));

        let reply = generate_ai_response(
            &[ConversationMessage::user("I have a runny nose")],
            AgentRole::Triage,
            "demo_user",
        )
        .await
        .unwrap();
        assert_eq!(reply.as_triage().unwrap().severity, Severity::Routine);

        // Provider has no replies left, which surfaces as None
        let reply =
            generate_ai_response(&[ConversationMessage::user("again")], AgentRole::Triage, "u").await;
        assert_eq!(reply, None);
    }
}
