//! Read-only lookup endpoints for the editing UI.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::catalog::{TechCatalog, TechEntry};
use crate::portfolio::themes::ThemeFlags;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ThemeSummary {
    pub name: String,
    pub flags: ThemeFlags,
}

/// GET /api/v1/technologies
pub async fn handle_list_technologies() -> Json<&'static [TechEntry]> {
    Json(TechCatalog::global().entries())
}

/// GET /api/v1/themes
pub async fn handle_list_themes(State(state): State<AppState>) -> Json<Vec<ThemeSummary>> {
    let themes = state
        .themes
        .list()
        .map(|(name, flags)| ThemeSummary {
            name: name.to_string(),
            flags: *flags,
        })
        .collect();
    Json(themes)
}
