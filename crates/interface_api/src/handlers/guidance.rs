//! Guidance handlers

use axum::Json;
use domain_will::signing_instructions;

use crate::dto::will::SigningGuidanceResponse;

/// How to sign and witness the generated will
pub async fn signing_guidance() -> Json<SigningGuidanceResponse> {
    Json(SigningGuidanceResponse {
        instructions: signing_instructions(),
    })
}
