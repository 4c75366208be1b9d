use serde::{Deserialize, Serialize};

pub const FALLBACK_ERROR_TYPE: &str = "General Analysis";
pub const FALLBACK_APPEAL_LETTER: &str =
    "Could not automatically generate a formal letter. Please review the summary.";

/// Analysis of a bill or insurance denial, with a drafted appeal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingAnalysis {
    pub summary: String,
    pub error_type: String,
    pub appeal_letter: String,
    #[serde(default)]
    pub next_steps: Vec<String>,
}

impl BillingAnalysis {
    pub fn fallback<S: Into<String>>(raw_reply: S) -> Self {
        BillingAnalysis {
            summary: raw_reply.into(),
            error_type: FALLBACK_ERROR_TYPE.to_string(),
            appeal_letter: FALLBACK_APPEAL_LETTER.to_string(),
            next_steps: Vec::new(),
        }
    }
}
