use medilink::gateway::CompletionGateway;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<CompletionGateway>,
}

impl AppState {
    pub fn new(gateway: CompletionGateway) -> Self {
        Self {
            gateway: Arc::new(gateway),
        }
    }
}
