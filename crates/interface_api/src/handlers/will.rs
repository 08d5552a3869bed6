//! Will handlers

use axum::{extract::State, Json};
use domain_will::{assemble, generate_batch, ErrorCategory, WillDraft};
use tracing::{debug, instrument};
use validator::Validate;

use crate::dto::will::*;
use crate::{error::ApiError, AppState};

/// Runs every completeness rule and reports all findings
///
/// A will that cannot even be built because of a structural rule is reported
/// as invalid rather than refused, so callers see one response shape.
/// Malformed IDs and blank entity fields are still rejected with 400.
#[instrument(skip_all)]
pub async fn validate_will(
    State(state): State<AppState>,
    Json(request): Json<WillRequest>,
) -> Result<Json<ValidateResponse>, ApiError> {
    request.validate()?;
    let ctx = state.context();

    let response: ValidateResponse = match request.to_will(ctx.today, ctx.century_policy) {
        Ok(will) => will
            .validate_complete_with(ctx.today, ctx.century_policy)
            .into(),
        Err(e) if e.category() == ErrorCategory::AggregateHardError => ValidateResponse {
            valid: false,
            errors: e.messages(),
            warnings: Vec::new(),
        },
        Err(e) => return Err(e.into()),
    };

    debug!(valid = response.valid, errors = response.errors.len(), "Will validated");
    Ok(Json(response))
}

/// Generates the will text, with advisory notes where the advisory service answers
#[instrument(skip_all)]
pub async fn generate_will(
    State(state): State<AppState>,
    Json(request): Json<WillRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    request.validate()?;
    let ctx = state.context();

    let will = request.to_will(ctx.today, ctx.century_policy)?;
    let assembled = assemble(&will, &ctx)?;
    let advisory_notes = state.advisory.notes_for(&will).await;

    Ok(Json(GenerateResponse::new(assembled, advisory_notes)))
}

/// Generates many wills; each entry succeeds or fails on its own
#[instrument(skip_all)]
pub async fn generate_wills(
    State(state): State<AppState>,
    Json(request): Json<BatchRequest>,
) -> Result<Json<BatchResponse>, ApiError> {
    request.validate()?;

    let limit = state.config.batch_limit;
    if request.wills.len() > limit {
        return Err(ApiError::BatchTooLarge {
            size: request.wills.len(),
            limit,
        });
    }

    let ctx = state.context();
    let drafts: Vec<WillDraft> = request
        .wills
        .iter()
        .map(|w| w.to_will(ctx.today, ctx.century_policy))
        .collect();

    let report = tokio::task::spawn_blocking(move || generate_batch(drafts, &ctx)).await?;

    Ok(Json(report.into()))
}
