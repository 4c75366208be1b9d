//! Turning raw model text into structured replies.
//!
//! Decoding failures are never errors here: triage and billing replies that do not
//! decode become their role's fallback value, and the failure is logged.
use lazy_static::lazy_static;
use regex::Regex;
use serde::de::DeserializeOwned;

use crate::models::billing::BillingAnalysis;
use crate::models::reply::AgentReply;
use crate::models::role::AgentRole;
use crate::models::triage::TriageResult;

lazy_static! {
    static ref FENCE: Regex = Regex::new(r"```(?i:json)?\n?").unwrap();
}

/// Remove Markdown code-fence markers (```` ```json ```` and ```` ``` ````) and trim.
/// Applying it twice gives the same result as applying it once.
pub fn strip_fences(raw: &str) -> String {
    let mut current = raw.to_string();
    while FENCE.is_match(&current) {
        current = FENCE.replace_all(&current, "").into_owned();
    }
    current.trim().to_string()
}

fn decode<T: DeserializeOwned>(raw: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(&strip_fences(raw))
}

pub fn parse_triage(raw: &str) -> TriageResult {
    match decode::<TriageResult>(raw) {
        Ok(result) => result,
        Err(e) => {
            tracing::warn!(error = %e, "failed to parse triage reply, using routine fallback");
            TriageResult::fallback(raw)
        }
    }
}

pub fn parse_billing(raw: &str) -> BillingAnalysis {
    match decode::<BillingAnalysis>(raw) {
        Ok(analysis) => analysis,
        Err(e) => {
            tracing::warn!(error = %e, "failed to parse billing reply, using summary fallback");
            BillingAnalysis::fallback(raw)
        }
    }
}

/// Dispatch on role. Recovery replies are natural language and pass through untouched.
pub fn parse_reply(role: AgentRole, raw: &str) -> AgentReply {
    match role {
        AgentRole::Triage => AgentReply::Triage(parse_triage(raw)),
        AgentRole::Billing => AgentReply::Billing(parse_billing(raw)),
        AgentRole::Recovery => AgentReply::Text(raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::triage::Severity;

    const TRIAGE_JSON: &str = r#"{
  "severity": "emergency",
  "recommendation": "Call 911 or go to the nearest emergency room now.",
  "response": "Chest pain with shortness of breath needs immediate care.",
  "suggested_specialty": "Cardiology"
}"#;

    fn expected_triage() -> TriageResult {
        TriageResult {
            severity: Severity::Emergency,
            recommendation: "Call 911 or go to the nearest emergency room now.".to_string(),
            response: "Chest pain with shortness of breath needs immediate care.".to_string(),
            suggested_specialty: Some("Cardiology".to_string()),
        }
    }

    #[test]
    fn test_strip_fences() {
        assert_eq!(strip_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_fences("```\n{\"a\":1}```\n"), "{\"a\":1}");
        assert_eq!(strip_fences("```JSON{\"a\":1}```"), "{\"a\":1}");
        assert_eq!(strip_fences("  plain text  "), "plain text");
    }

    #[test]
    fn test_strip_fences_is_idempotent() {
        for raw in [
            "```json\n{\"a\":1}\n```",
            "no fences here",
            "``````json\n{}\n```",
            "`` ```json\n`",
        ] {
            let once = strip_fences(raw);
            assert_eq!(strip_fences(&once), once, "not idempotent for {:?}", raw);
        }
    }

    #[test]
    fn test_fenced_and_bare_json_parse_identically() {
        let fenced = format!("```json\n{}\n```", TRIAGE_JSON);
        assert_eq!(parse_triage(&fenced), parse_triage(TRIAGE_JSON));
        assert_eq!(parse_triage(&fenced), expected_triage());
    }

    #[test]
    fn test_triage_fallback_on_prose() {
        let raw = "Sorry, I can't help with that.";
        assert_eq!(
            parse_reply(AgentRole::Triage, raw),
            AgentReply::Triage(TriageResult {
                severity: Severity::Routine,
                recommendation: "Please consult with a healthcare provider.".to_string(),
                response: "Sorry, I can't help with that.".to_string(),
                suggested_specialty: Some("General Practice".to_string()),
            })
        );
    }

    #[test]
    fn test_triage_unknown_severity_falls_back() {
        let raw = r#"{"severity": "critical", "recommendation": "x", "response": "y"}"#;
        let result = parse_triage(raw);
        assert_eq!(result, TriageResult::fallback(raw));
    }

    #[test]
    fn test_triage_severity_case_is_coerced() {
        let raw = r#"{"severity": "URGENT", "recommendation": "See a doctor today", "response": "ok"}"#;
        assert_eq!(parse_triage(raw).severity, Severity::Urgent);
    }

    #[test]
    fn test_triage_partial_json_falls_back() {
        let raw = "```json\n{\"severity\": \"urgent\", \"recommendation\":";
        assert_eq!(parse_triage(raw), TriageResult::fallback(raw));
    }

    #[test]
    fn test_billing_parse() {
        let raw = "```json\n{\"summary\": \"Billed twice for one visit.\", \"error_type\": \"Coding Error\", \"appeal_letter\": \"Dear Claims Department,\", \"next_steps\": [\"Request an itemized bill\", \"Send the appeal\"]}\n```";
        let analysis = parse_billing(raw);
        assert_eq!(analysis.error_type, "Coding Error");
        assert_eq!(analysis.next_steps.len(), 2);
    }

    #[test]
    fn test_billing_fallback() {
        let raw = "Your claim was denied because the provider was out of network.";
        let analysis = parse_billing(raw);
        assert_eq!(analysis.summary, raw);
        assert_eq!(analysis.error_type, "General Analysis");
        assert_eq!(
            analysis.appeal_letter,
            "Could not automatically generate a formal letter. Please review the summary."
        );
        assert!(analysis.next_steps.is_empty());
    }

    #[test]
    fn test_recovery_is_verbatim() {
        let raw = "```json\n{\"not\": \"parsed\"}\n```  ";
        assert_eq!(
            parse_reply(AgentRole::Recovery, raw),
            AgentReply::Text(raw.to_string())
        );
    }
}
