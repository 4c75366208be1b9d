use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

pub const FALLBACK_RECOMMENDATION: &str = "Please consult with a healthcare provider.";
pub const FALLBACK_SPECIALTY: &str = "General Practice";

/// Urgency tier of a triage assessment. Deserialization only accepts the three
/// tiers (case and surrounding whitespace are ignored); anything else is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Emergency,
    Urgent,
    Routine,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Emergency => "emergency",
            Severity::Urgent => "urgent",
            Severity::Routine => "routine",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "emergency" => Ok(Severity::Emergency),
            "urgent" => Ok(Severity::Urgent),
            "routine" => Ok(Severity::Routine),
            _ => Err(format!(
                "invalid severity '{}', expected emergency, urgent or routine",
                s
            )),
        }
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageResult {
    pub severity: Severity,
    pub recommendation: String,
    pub response: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_specialty: Option<String>,
}

impl TriageResult {
    /// The safe default used when the model's reply cannot be decoded. The raw reply is
    /// surfaced as the response so a person still sees what the model said.
    pub fn fallback<S: Into<String>>(raw_reply: S) -> Self {
        TriageResult {
            severity: Severity::Routine,
            recommendation: FALLBACK_RECOMMENDATION.to_string(),
            response: raw_reply.into(),
            suggested_specialty: Some(FALLBACK_SPECIALTY.to_string()),
        }
    }
}
