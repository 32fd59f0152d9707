//! Supervisor API Handler
//!
//! Entry point for the full report workflow. Builds the initial pipeline
//! state from one multipart request, runs the workflow to a terminal state,
//! and returns it with transient fields stripped. A stage failure is still
//! a 200: partial progress is meaningful to the caller and travels in-band
//! in the `error` field.

use axum::{
    Json,
    extract::{Multipart, State},
};
use serde_json::Value;
use uuid::Uuid;

use tarmac_core::domain::report::ReportState;
use tarmac_core::dto::report::ReportResponse;

use crate::api::AppState;
use crate::api::error::{ApiError, ApiResult};

/// POST /supervisor
/// Run one image report through the remediation workflow
pub async fn run_report(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Json<ReportResponse>> {
    let mut image: Option<Vec<u8>> = None;
    let mut user_info: Option<Value> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Invalid multipart body: {}", e)))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "image" => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Unreadable 'image' field: {}", e)))?;
                image = Some(bytes.to_vec());
            }
            "user" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Unreadable 'user' field: {}", e)))?;
                let parsed = serde_json::from_str(&text).map_err(|_| {
                    ApiError::BadRequest("'user' field is not valid JSON".to_string())
                })?;
                user_info = Some(parsed);
            }
            _ => {}
        }
    }

    let image = image.ok_or_else(|| {
        ApiError::BadRequest(
            "Request must be multipart/form-data with 'image' and 'user' fields".to_string(),
        )
    })?;
    let user_info = user_info.ok_or_else(|| {
        ApiError::BadRequest(
            "Request must be multipart/form-data with 'image' and 'user' fields".to_string(),
        )
    })?;

    let run_id = Uuid::new_v4();
    tracing::info!("Starting report workflow {} ({} image bytes)", run_id, image.len());

    let initial = ReportState::new(user_info, image);
    let terminal = state.workflow.run(initial).await;

    match &terminal.error {
        Some(error) => tracing::warn!("Report workflow {} halted: {}", run_id, error),
        None => tracing::info!("Report workflow {} completed", run_id),
    }

    Ok(Json(ReportResponse::from(terminal)))
}
