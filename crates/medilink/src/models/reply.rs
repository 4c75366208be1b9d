use serde::Serialize;

use super::billing::BillingAnalysis;
use super::triage::TriageResult;

/// What the gateway hands back to the caller for a successful round trip.
///
/// Serialized untagged, so on the wire it is exactly a triage object, a billing
/// object, or a plain string.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AgentReply {
    Triage(TriageResult),
    Billing(BillingAnalysis),
    Text(String),
}

impl AgentReply {
    pub fn as_triage(&self) -> Option<&TriageResult> {
        match self {
            AgentReply::Triage(result) => Some(result),
            _ => None,
        }
    }

    pub fn as_billing(&self) -> Option<&BillingAnalysis> {
        match self {
            AgentReply::Billing(analysis) => Some(analysis),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AgentReply::Text(text) => Some(text),
            _ => None,
        }
    }
}
