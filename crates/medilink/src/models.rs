//! These models represent the values passed through the assistant gateway
//!
//! There are three related formats in play:
//! - conversation messages, sent from the portal caller to the gateway
//! - chat-completion payloads, sent from the gateway to the model provider
//! - structured replies (triage, billing), parsed out of the model's free text
//!
//! Only the structured replies carry invariants. They are validated by serde at the
//! parse boundary and anything that does not fit becomes a well-defined fallback.
pub mod billing;
pub mod message;
pub mod reply;
pub mod role;
pub mod triage;
