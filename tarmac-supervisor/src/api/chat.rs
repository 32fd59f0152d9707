//! Chat API Handler
//!
//! Conversational entry point. The responder fails soft on collaborator
//! errors, so this handler only rejects malformed input.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tarmac_core::dto::chat::{ChatRequest, ChatResponse};

use crate::api::AppState;
use crate::api::error::{ApiError, ApiResult};

/// POST /chat
/// Handle one conversational turn
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> ApiResult<Json<ChatResponse>> {
    let Json(req) = payload.map_err(|_| {
        ApiError::BadRequest(
            "Request must be JSON with 'user_id' and 'message' fields".to_string(),
        )
    })?;

    if req.user_id.trim().is_empty() || req.message.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "'user_id' and 'message' must be non-empty".to_string(),
        ));
    }

    tracing::debug!("Chat turn from user {}", req.user_id);

    let reply = state.responder.respond(&req.user_id, &req.message).await;

    Ok(Json(ChatResponse { reply }))
}
