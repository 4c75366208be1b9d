use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
    System,
}

/// One entry of the chat history held by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ConversationMessage {
    pub fn new<S: Into<String>>(role: MessageRole, content: S) -> Self {
        ConversationMessage {
            role,
            content: content.into(),
        }
    }

    pub fn user<S: Into<String>>(content: S) -> Self {
        Self::new(MessageRole::User, content)
    }

    pub fn assistant<S: Into<String>>(content: S) -> Self {
        Self::new(MessageRole::Assistant, content)
    }

    pub fn system<S: Into<String>>(content: S) -> Self {
        Self::new(MessageRole::System, content)
    }

    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_serialization() {
        let message = ConversationMessage::user("I have a headache");
        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value, json!({"role": "user", "content": "I have a headache"}));

        let parsed: ConversationMessage =
            serde_json::from_value(json!({"role": "assistant", "content": "How long?"})).unwrap();
        assert_eq!(parsed, ConversationMessage::assistant("How long?"));
    }

    #[test]
    fn test_is_blank() {
        assert!(ConversationMessage::user("  \n").is_blank());
        assert!(!ConversationMessage::system("x").is_blank());
    }
}
