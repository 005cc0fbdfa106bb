//! Axum route handlers for career recommendations.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::career::recommender::{CareerQuery, Recommendation, TransitionOutcome};
use crate::errors::AppError;
use crate::extract::AppJson;
use crate::state::AppState;

const NO_TRANSITIONS_MESSAGE: &str = "No suitable career transitions found.";
const FRESHER_REDIRECT_MESSAGE: &str = "Use /api/fresher-recommendations for fresher queries";

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CareerResponse {
    Recommendations(Vec<Recommendation>),
    Messages(Vec<Message>),
    Message(Message),
}

#[derive(Debug, Serialize)]
pub struct Message {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct FresherRequest {
    #[serde(default)]
    pub skills: Vec<String>,
}

/// POST /api/career-recommendations
pub async fn handle_career_recommendations(
    State(state): State<AppState>,
    AppJson(query): AppJson<CareerQuery>,
) -> Result<Json<CareerResponse>, AppError> {
    let response = match state.career.recommend(&query)? {
        TransitionOutcome::Recommended(recs) => CareerResponse::Recommendations(recs),
        TransitionOutcome::NoSuitableTransitions => CareerResponse::Messages(vec![Message {
            message: NO_TRANSITIONS_MESSAGE.to_string(),
        }]),
        TransitionOutcome::UseFresherPath => CareerResponse::Message(Message {
            message: FRESHER_REDIRECT_MESSAGE.to_string(),
        }),
    };
    Ok(Json(response))
}

/// POST /api/fresher-recommendations
pub async fn handle_fresher_recommendations(
    State(state): State<AppState>,
    AppJson(request): AppJson<FresherRequest>,
) -> Result<Json<Vec<Recommendation>>, AppError> {
    let recs = state.career.recommend_for_fresher(&request.skills)?;
    Ok(Json(recs))
}
