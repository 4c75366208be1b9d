use crate::error::ApiError;
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use medilink::models::{
    message::ConversationMessage, reply::AgentReply, role::AgentRole,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
struct ChatRequest {
    #[serde(default)]
    message: String,
    #[serde(default = "default_agent_type")]
    agent_type: String,
    #[serde(default = "default_user_id")]
    user_id: String,
}

#[derive(Debug, Serialize)]
struct ChatResponse {
    agent_type: AgentRole,
    reply: AgentReply,
}

fn default_agent_type() -> String {
    AgentRole::Triage.to_string()
}

fn default_user_id() -> String {
    "demo_user".to_string()
}

async fn chat_handler(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let role = AgentRole::from_name(&request.agent_type)?;
    let conversation = vec![ConversationMessage::user(request.message)];

    let reply = state
        .gateway
        .send(role, &conversation, &request.user_id)
        .await?;

    Ok(Json(ChatResponse {
        agent_type: role,
        reply,
    }))
}

// Configure routes for this module
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/chat", post(chat_handler))
        .with_state(state)
}
