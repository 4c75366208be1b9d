//! Fixed system prompts, one per agent role.
//!
//! The prompts encode safety policy for triage (escalation keywords, no diagnosis),
//! but that policy is only relayed to the model; nothing here can enforce it.
use crate::errors::ConfigurationError;
use crate::models::role::AgentRole;

const TRIAGE_PROMPT: &str = include_str!("prompts/triage.md");
const RECOVERY_PROMPT: &str = include_str!("prompts/recovery.md");
const BILLING_PROMPT: &str = include_str!("prompts/billing.md");

pub fn get_prompt(role: AgentRole) -> &'static str {
    match role {
        AgentRole::Triage => TRIAGE_PROMPT,
        AgentRole::Recovery => RECOVERY_PROMPT,
        AgentRole::Billing => BILLING_PROMPT,
    }
}

/// Look a prompt up by role name. An unknown name is an error, never another role's prompt.
pub fn get_prompt_by_name(name: &str) -> Result<&'static str, ConfigurationError> {
    AgentRole::from_name(name).map(get_prompt)
}

/// Informational prompt name reported to the provider
pub fn prompt_name(role: AgentRole) -> &'static str {
    match role {
        AgentRole::Triage => "medilink_triage",
        AgentRole::Recovery => "medilink_recovery",
        AgentRole::Billing => "medilink_billing",
    }
}
