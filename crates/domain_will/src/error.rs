//! Will domain errors
//!
//! Errors fall into the categories of [`ErrorCategory`]. Construction errors
//! fail fast with a single error; `validate_complete` findings are collected
//! and surfaced together as [`WillError::Validation`].

use domain_estate::EstateError;
use serde::Serialize;
use thiserror::Error;

/// Classification of everything that can stop or qualify a will
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCategory {
    /// Malformed NRIC
    IdFormat,
    /// Missing or out-of-range field on one entity
    EntityValidation,
    /// Cross-entity violation that blocks the will
    AggregateHardError,
    /// Cross-entity finding that does not block the will
    AggregateWarning,
    /// A clause generator's own precondition failed
    ClauseGeneration,
    /// `validate_complete` found hard errors; carries every finding
    Validation,
}

impl ErrorCategory {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCategory::IdFormat => "ID_FORMAT_ERROR",
            ErrorCategory::EntityValidation => "ENTITY_VALIDATION_ERROR",
            ErrorCategory::AggregateHardError => "AGGREGATE_HARD_ERROR",
            ErrorCategory::AggregateWarning => "AGGREGATE_WARNING",
            ErrorCategory::ClauseGeneration => "CLAUSE_GENERATION_ERROR",
            ErrorCategory::Validation => "VALIDATION_ERROR",
        }
    }

    /// True for categories that never block generation
    pub fn is_advisory(&self) -> bool {
        matches!(self, ErrorCategory::AggregateWarning)
    }
}

/// Preconditions of individual clause generators
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClauseError {
    #[error("Must appoint at least one executor")]
    NoExecutors,

    #[error("Maximum 4 executors allowed under Malaysian law, got {0}")]
    TooManyExecutors(usize),
}

/// Errors that can occur in the will domain
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WillError {
    /// An entity failed its own construction checks
    #[error(transparent)]
    Entity(#[from] EstateError),

    #[error("A will must have a testator")]
    MissingTestator,

    #[error("A will must appoint 1 to 4 executors, got {0}")]
    ExecutorCount(usize),

    #[error("A will must have exactly 2 witnesses, got {0}")]
    WitnessCount(usize),

    #[error("A will must name at least one beneficiary")]
    NoBeneficiaries,

    /// A witness is also a beneficiary; their gift would be void
    #[error(
        "CRITICAL ERROR: {name} (NRIC {nric}) is both a witness and beneficiary. \
         Under Section 9 of the Wills Act 1959, their gift will be VOID. \
         Choose different witnesses."
    )]
    WitnessIsBeneficiary { name: String, nric: String },

    #[error("Must appoint at least one guardian for minor children")]
    GuardianRequired,

    #[error(transparent)]
    Clause(#[from] ClauseError),

    /// Hard errors found by `validate_complete`
    #[error("Will validation failed: {}", errors.join("; "))]
    Validation {
        errors: Vec<String>,
        warnings: Vec<String>,
    },
}

impl WillError {
    /// Creates a Validation error from collected findings
    pub fn validation(errors: Vec<String>, warnings: Vec<String>) -> Self {
        WillError::Validation { errors, warnings }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            WillError::Entity(e) if e.is_identity_error() => ErrorCategory::IdFormat,
            WillError::Entity(_) => ErrorCategory::EntityValidation,
            WillError::MissingTestator
            | WillError::ExecutorCount(_)
            | WillError::WitnessCount(_)
            | WillError::NoBeneficiaries
            | WillError::WitnessIsBeneficiary { .. }
            | WillError::GuardianRequired => ErrorCategory::AggregateHardError,
            WillError::Clause(_) => ErrorCategory::ClauseGeneration,
            WillError::Validation { .. } => ErrorCategory::Validation,
        }
    }

    /// Every message the caller should show, errors first
    pub fn messages(&self) -> Vec<String> {
        match self {
            WillError::Validation { errors, warnings } => {
                errors.iter().chain(warnings.iter()).cloned().collect()
            }
            other => vec![other.to_string()],
        }
    }
}
