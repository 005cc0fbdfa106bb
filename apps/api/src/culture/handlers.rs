//! Axum route handlers for culture matching.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::culture::matcher::CultureMatch;
use crate::errors::AppError;
use crate::extract::AppJson;
use crate::state::AppState;

const DEFAULT_TOP_N: usize = 5;

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

#[derive(Debug, Deserialize)]
pub struct CulturalMatchRequest {
    #[serde(default)]
    pub preferences: String,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

#[derive(Debug, Serialize)]
pub struct CulturalMatchResponse {
    pub recommendations: Vec<CultureMatch>,
}

/// POST /api/cultural-match
pub async fn handle_cultural_match(
    State(state): State<AppState>,
    AppJson(request): AppJson<CulturalMatchRequest>,
) -> Result<Json<CulturalMatchResponse>, AppError> {
    if request.preferences.trim().is_empty() {
        return Err(AppError::Validation("Preferences are required".to_string()));
    }
    if request.top_n == 0 {
        return Err(AppError::Validation("top_n must be at least 1".to_string()));
    }

    let recommendations = state.culture.rank(&request.preferences, request.top_n);
    Ok(Json(CulturalMatchResponse { recommendations }))
}
