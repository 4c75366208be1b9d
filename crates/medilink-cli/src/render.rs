use bat::WrappingMode;
use console::style;
use medilink::models::{
    billing::BillingAnalysis,
    reply::AgentReply,
    triage::{Severity, TriageResult},
};

pub const EMERGENCY_NOTICE: &str = "If this is an emergency, call 911 or go to the nearest emergency room now.";

fn print_markdown(content: &str) {
    let printed = bat::PrettyPrinter::new()
        .input(bat::Input::from_bytes(content.as_bytes()))
        .language("Markdown")
        .wrapping_mode(WrappingMode::Character)
        .print();

    if printed.is_err() {
        println!("{}", content);
    }
}

pub fn severity_label(severity: Severity) -> String {
    let label = format!(" {} ", severity.as_str().to_uppercase());
    match severity {
        Severity::Emergency => style(label).white().on_red().bold().to_string(),
        Severity::Urgent => style(label).black().on_yellow().bold().to_string(),
        Severity::Routine => style(label).black().on_green().to_string(),
    }
}

pub fn render_triage(result: &TriageResult) {
    println!("{} {}", severity_label(result.severity), style(&result.recommendation).bold());
    if let Some(specialty) = &result.suggested_specialty {
        println!("{}", style(format!("Suggested specialty: {}", specialty)).dim());
    }
    println!();
    print_markdown(&result.response);
    if result.severity == Severity::Emergency {
        println!("\n{}", style(EMERGENCY_NOTICE).red().bold());
    }
}

/// Billing analyses are laid out as one markdown document
pub fn billing_markdown(analysis: &BillingAnalysis) -> String {
    let mut doc = format!(
        "## {}\n\n{}\n\n### Appeal letter\n\n{}\n",
        analysis.error_type, analysis.summary, analysis.appeal_letter
    );
    if !analysis.next_steps.is_empty() {
        doc.push_str("\n### Next steps\n\n");
        for (i, step) in analysis.next_steps.iter().enumerate() {
            doc.push_str(&format!("{}. {}\n", i + 1, step));
        }
    }
    doc
}

pub fn render(reply: &AgentReply) {
    match reply {
        AgentReply::Triage(result) => render_triage(result),
        AgentReply::Billing(analysis) => print_markdown(&billing_markdown(analysis)),
        AgentReply::Text(text) => print_markdown(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_billing_markdown() {
        let analysis = BillingAnalysis {
            summary: "You were charged twice.".to_string(),
            error_type: "Coding Error".to_string(),
            appeal_letter: "Dear Billing Office,".to_string(),
            next_steps: vec!["Call the clinic".to_string(), "Send the letter".to_string()],
        };
        let doc = billing_markdown(&analysis);
        assert!(doc.starts_with("## Coding Error\n\nYou were charged twice."));
        assert!(doc.contains("### Appeal letter\n\nDear Billing Office,"));
        assert!(doc.contains("1. Call the clinic\n2. Send the letter\n"));
    }

    #[test]
    fn test_billing_markdown_without_steps() {
        let doc = billing_markdown(&BillingAnalysis::fallback("raw text"));
        assert!(!doc.contains("Next steps"));
    }

    #[test]
    fn test_severity_label_text() {
        console::set_colors_enabled(false);
        assert_eq!(severity_label(Severity::Urgent), " URGENT ");
    }
}
