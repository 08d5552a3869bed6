//! Advisory DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AdvisoryRequest {
    #[validate(length(min = 1, max = 500, message = "question must be 1-500 characters"))]
    pub question: String,
}

/// `answer` is null when the advisory service could not answer in time
#[derive(Debug, Serialize)]
pub struct AdvisoryResponse {
    pub answer: Option<String>,
}
