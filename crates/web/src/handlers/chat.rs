//! Handler for the chat assistant.
//!
//! Accepts the widget's transcript, injects the system prompt, calls the
//! completion provider once and returns its text. The call is bounded by
//! [`AppState::chat_deadline`].

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use easi_core::chat::{self, ChatReply, ChatRequest, SYSTEM_PROMPT};
use easi_llm::{CompletionError, CompletionRequest};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /api/chat
// ---------------------------------------------------------------------------

/// Generate the assistant's reply to the posted conversation.
pub async fn send_chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> AppResult<Json<ChatReply>> {
    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let messages = chat::prepare_history(request.messages)?;
    let turns = messages.len();

    let provider = state
        .completions
        .as_ref()
        .ok_or(CompletionError::NotConfigured)?;

    let completion = CompletionRequest {
        system: SYSTEM_PROMPT.to_string(),
        messages,
        max_tokens: state.chat_limits.max_tokens,
        temperature: state.chat_limits.temperature,
    };

    let deadline = state.chat_deadline();
    let text = tokio::time::timeout(deadline, provider.complete(&completion))
        .await
        .map_err(|_| CompletionError::Timeout(deadline))??;

    tracing::info!(
        model = provider.model(),
        turns,
        reply_chars = text.chars().count(),
        "Chat reply generated"
    );

    Ok(Json(ChatReply { text }))
}
