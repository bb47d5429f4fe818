//! Axum route handler for chat edits.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info_span, warn, Instrument};
use uuid::Uuid;

use crate::catalog::TechCatalog;
use crate::chat::engine::{apply, ChangeRecord, HistoryMessage};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub portfolio_data: Value,
    pub input_value: String,
    #[serde(default)]
    pub message_memory: Vec<HistoryMessage>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub original_data: Value,
    pub updated_data: Value,
    pub changes: Vec<ChangeRecord>,
    pub user_reply: String,
}

/// POST /api/v1/portfolio/chat
///
/// Always answers 200 once the request is valid; model trouble shows up as
/// an unchanged document and a clarification reply.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if request.input_value.trim().is_empty() {
        return Err(AppError::Validation("inputValue cannot be empty".to_string()));
    }

    let run_id = Uuid::new_v4();
    let outcome = apply(
        state.model.as_ref(),
        &request.portfolio_data,
        &request.input_value,
        &request.message_memory,
        TechCatalog::global(),
    )
    .instrument(info_span!("chat", %run_id))
    .await;

    if let Some(error) = &outcome.error {
        warn!(%run_id, "Chat turn degraded: {error}");
    }

    Ok(Json(ChatResponse {
        original_data: request.portfolio_data,
        updated_data: outcome.updated,
        changes: outcome.changes,
        user_reply: outcome.user_reply,
    }))
}
