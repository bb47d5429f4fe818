//! Axum route handler for resume extraction.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::extraction::pipeline::build_portfolio;
use crate::llm_client::ImageInput;
use crate::portfolio::sections::PortfolioDocument;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractRequest {
    pub base64: String,
    #[serde(default)]
    pub selected_theme: String,
}

/// POST /api/v1/portfolio/extract
///
/// Resume image in, `{ sections }` out. Unparseable model output surfaces as
/// a 500 carrying the raw text.
pub async fn handle_extract(
    State(state): State<AppState>,
    Json(request): Json<ExtractRequest>,
) -> Result<Json<PortfolioDocument>, AppError> {
    let image = ImageInput::from_base64(&request.base64)?;
    let theme = state.themes.resolve(&request.selected_theme);

    let portfolio = build_portfolio(state.model.as_ref(), &image, theme).await?;

    Ok(Json(portfolio))
}
