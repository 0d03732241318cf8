//! Chat endpoint.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use demochat_assistant::{ChatRequest, ChatResponse};
use tracing::{info, warn};

use crate::error::ApiResult;
use crate::AppState;

/// `POST /api/chat` — answer the latest user turn of the conversation.
pub async fn chat_handler(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> ApiResult<Json<ChatResponse>> {
    let Json(request) = payload.inspect_err(|e| warn!("Rejected chat request: {e}"))?;

    let response = state.assistant.respond(&request.messages);

    info!(
        messages = request.messages.len(),
        sources = response.sources.len(),
        "Answered chat request"
    );

    Ok(Json(response))
}
