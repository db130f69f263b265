use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    services::persona::FILLER_REPLY,
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(payload) = payload?;

    let trimmed = payload.message.trim();
    if trimmed.is_empty() {
        return Ok(Json(ChatResponse {
            reply: FILLER_REPLY.to_string(),
        }));
    }

    let reply = state.chatbot.reply(trimmed).await;
    Ok(Json(ChatResponse { reply }))
}
