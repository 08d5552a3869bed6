//! Advisory handlers

use axum::{extract::State, Json};
use validator::Validate;

use crate::dto::advisory::*;
use crate::{error::ApiError, AppState};

/// Answers a free-form legal question
///
/// Advisory failures never fail the request; the answer is null instead.
pub async fn ask(
    State(state): State<AppState>,
    Json(request): Json<AdvisoryRequest>,
) -> Result<Json<AdvisoryResponse>, ApiError> {
    request.validate()?;

    let answer = state.advisory.ask(request.question.trim()).await;
    Ok(Json(AdvisoryResponse { answer }))
}
