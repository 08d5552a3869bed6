//! Estate domain errors
//!
//! Every variant here is entity-local: it blocks construction of the one
//! entity that raised it and nothing else.

use core_kernel::IdentityError;
use thiserror::Error;

/// Errors that can occur while constructing estate entities
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstateError {
    /// The NRIC did not parse
    #[error("Invalid NRIC: {0}")]
    Identity(#[from] IdentityError),

    /// A required field was empty
    #[error("{entity} {field} is required")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },

    /// Unknown asset category
    #[error("Asset type must be one of: {allowed}, got '{value}'")]
    UnknownAssetType { value: String, allowed: String },

    /// Unknown distribution type
    #[error("Distribution type must be one of: specific, percentage, equal, residuary, got '{0}'")]
    UnknownDistributionType(String),

    /// A field was present but malformed
    #[error("Invalid estate data: {0}")]
    InvalidData(String),
}

impl EstateError {
    /// Creates a MissingField error
    pub fn missing(entity: &'static str, field: &'static str) -> Self {
        EstateError::MissingField { entity, field }
    }

    /// Creates an InvalidData error with a message
    pub fn invalid(message: impl Into<String>) -> Self {
        EstateError::InvalidData(message.into())
    }

    /// Returns true if the error came from NRIC parsing
    pub fn is_identity_error(&self) -> bool {
        matches!(self, EstateError::Identity(_))
    }
}
