use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::errors::{GatewayError, GatewayResult};
use crate::providers::base::{CompletionRequest, Provider, Usage};

/// A mock provider that returns pre-configured replies and records what it was sent
#[derive(Clone)]
pub struct MockProvider {
    replies: Arc<Mutex<Vec<GatewayResult<String>>>>,
    requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl MockProvider {
    /// Create a new mock provider with a sequence of replies
    pub fn new(replies: Vec<GatewayResult<String>>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(replies)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn replying<S: Into<String>>(reply: S) -> Self {
        Self::new(vec![Ok(reply.into())])
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Provider for MockProvider {
    async fn complete(&self, request: &CompletionRequest) -> GatewayResult<(String, Usage)> {
        self.requests.lock().unwrap().push(request.clone());

        let mut replies = self.replies.lock().unwrap();
        if replies.is_empty() {
            return Err(GatewayError::unavailable(None, "mock provider has no replies left"));
        }
        replies.remove(0).map(|reply| (reply, Usage::default()))
    }
}
