// src/state.rs
use std::sync::Arc;

use crate::services::chatbot::Chatbot;
use crate::services::completion::CompletionClient;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub chatbot: Chatbot,
}

impl AppState {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self {
            chatbot: Chatbot::new(client),
        }
    }
}
