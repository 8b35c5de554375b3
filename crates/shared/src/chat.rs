use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

pub const GREETING: &str = "👋 Hi! I'm your MI Dining Assistant. How can I help you today?";
pub const APOLOGY: &str = "Sorry, I'm having trouble responding right now. Please try again.";

/// One bubble of the chat transcript.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub text: String,
    pub is_bot: bool,
    pub timestamp: OffsetDateTime,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_bot: false,
            timestamp: OffsetDateTime::now_utc(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_bot: true,
            timestamp: OffsetDateTime::now_utc(),
        }
    }
}

/// Body of `POST /send_message/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub response: Option<String>,
}

impl ChatReply {
    /// The reply text, if the server produced a non-empty one.
    pub fn text(&self) -> Option<&str> {
        self.response.as_deref().filter(|text| !text.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_response_has_no_text() {
        let reply: ChatReply = serde_json::from_str(r#"{"response": ""}"#).unwrap();
        assert_eq!(reply.text(), None);

        let reply: ChatReply =
            serde_json::from_str(r#"{"user_id": "rahul", "prompt": "hi", "response": "Hello!"}"#)
                .unwrap();
        assert_eq!(reply.text(), Some("Hello!"));
    }
}
