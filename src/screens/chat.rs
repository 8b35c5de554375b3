use askama::Template;
use midining_client::ChatService;
use midining_shared::chat::{APOLOGY, ChatMessage, GREETING};
use time::macros::format_description;

use crate::error::AppError;

/// The assistant overlay: a toggleable panel holding the session transcript.
#[derive(Debug, Clone)]
pub struct ChatOverlay {
    pub open: bool,
    pub messages: Vec<ChatMessage>,
}

impl Default for ChatOverlay {
    fn default() -> Self {
        Self {
            open: false,
            messages: vec![ChatMessage::bot(GREETING)],
        }
    }
}

impl ChatOverlay {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Appends the user's bubble right away, then one bot bubble once the
    /// service answers. Blank input is ignored. Returns how many bubbles were
    /// added.
    pub async fn send(&mut self, service: &dyn ChatService, text: &str) -> usize {
        if text.trim().is_empty() {
            return 0;
        }

        let before = self.messages.len();
        self.messages.push(ChatMessage::user(text));

        match service.send_message(text).await {
            Ok(reply) => {
                if let Some(answer) = reply.text() {
                    self.messages.push(ChatMessage::bot(answer));
                }
            }
            Err(e) => {
                tracing::error!("Error getting response: {e}");
                self.messages.push(ChatMessage::bot(APOLOGY));
            }
        }

        self.messages.len() - before
    }

    pub fn render(&self) -> Result<String, AppError> {
        render_messages(&self.messages)
    }
}

struct Bubble {
    time: String,
    speaker: &'static str,
    text: String,
}

#[derive(Template)]
#[template(path = "chat.txt")]
struct ChatTemplate {
    bubbles: Vec<Bubble>,
}

/// Renders a slice of the transcript, one bubble per line.
pub fn render_messages(messages: &[ChatMessage]) -> Result<String, AppError> {
    let format = format_description!("[hour]:[minute]");

    let bubbles = messages
        .iter()
        .map(|message| Bubble {
            time: message.timestamp.format(&format).unwrap_or_default(),
            speaker: if message.is_bot { "Assistant" } else { "You" },
            text: message.text.to_owned(),
        })
        .collect();

    Ok(ChatTemplate { bubbles }.render()?)
}
