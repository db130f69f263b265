// src/services/chatbot.rs
use std::sync::Arc;

use super::completion::CompletionClient;
use super::persona::{PERSONA_PROMPT, broken_reply};

/// Turns a user message into Krill's reply. Always yields something displayable.
#[derive(Clone)]
pub struct Chatbot {
    client: Arc<dyn CompletionClient>,
}

impl Chatbot {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// `user_msg` is expected to be trimmed and non-empty.
    pub async fn reply(&self, user_msg: &str) -> String {
        match self.client.complete(PERSONA_PROMPT, user_msg).await {
            Ok(text) => {
                let text = text.trim();
                if text.is_empty() {
                    tracing::warn!("completion came back blank");
                    broken_reply("empty reply")
                } else {
                    text.to_string()
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "completion failed");
                broken_reply(e)
            }
        }
    }
}
