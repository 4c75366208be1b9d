mod alert;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use cliclack::{input, spinner};
use console::style;
use medilink::{
    client,
    models::{message::ConversationMessage, role::AgentRole},
};
use tracing_subscriber::EnvFilter;

use crate::alert::AlertStore;
use crate::render::{render, render_triage, severity_label, EMERGENCY_NOTICE};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Assistant to talk to
    #[arg(short, long, value_enum, default_value = "triage")]
    agent: AgentVariant,

    /// Identifier reported to the model provider for traceability
    #[arg(short, long, default_value = "demo_user")]
    user_id: String,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum AgentVariant {
    Triage,
    Recovery,
    Billing,
}

impl From<AgentVariant> for AgentRole {
    fn from(variant: AgentVariant) -> Self {
        match variant {
            AgentVariant::Triage => AgentRole::Triage,
            AgentVariant::Recovery => AgentRole::Recovery,
            AgentVariant::Billing => AgentRole::Billing,
        }
    }
}

fn placeholder(role: AgentRole) -> &'static str {
    match role {
        AgentRole::Triage => "Describe your symptoms",
        AgentRole::Recovery => "How are you feeling today?",
        AgentRole::Billing => "Paste the bill or denial letter",
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let role = AgentRole::from(cli.agent);

    client::init_from_env().context("Set KEYWORDS_API_KEY (or add it to .env) to reach the assistant")?;

    let alerts = AlertStore::default_location()?;
    tracing::debug!(path = %alerts.path().display(), "recent alert store");
    if let Some(alert) = alerts.load_fresh() {
        println!(
            "{} {} {}",
            style("Recent alert").bold(),
            severity_label(alert.result.severity),
            style(alert.saved_at.format("%H:%M UTC").to_string()).dim()
        );
        println!("{}\n", alert.result.recommendation);
    }

    println!(
        "MediLink {} assistant {}",
        role.as_ref().to_lowercase(),
        style("- type \"exit\" to end the session").dim()
    );
    println!();

    let mut conversation: Vec<ConversationMessage> = Vec::new();

    loop {
        let message_text: String = input("Message:")
            .placeholder(placeholder(role))
            .multiline()
            .interact()?;

        if message_text.trim().eq_ignore_ascii_case("exit") {
            break;
        }

        conversation.push(ConversationMessage::user(message_text));

        let spin = spinner();
        spin.start("awaiting reply");
        let reply = client::generate_ai_response(&conversation, role, &cli.user_id).await;
        spin.stop("");

        match reply {
            Some(reply) => {
                if let Some(result) = reply.as_triage() {
                    render_triage(result);
                    if let Err(e) = alerts.save(result) {
                        tracing::warn!(error = %e, "could not save recent alert");
                    }
                } else {
                    render(&reply);
                }
                if let Some(text) = reply.as_text() {
                    conversation.push(ConversationMessage::assistant(text));
                }
            }
            None => {
                println!("{}", style("Could not reach the assistant. Please try again.").yellow());
                if role == AgentRole::Triage {
                    println!("{}", style(EMERGENCY_NOTICE).red().bold());
                }
            }
        }

        println!("\n");
    }
    Ok(())
}
