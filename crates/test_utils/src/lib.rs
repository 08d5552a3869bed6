//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! will generation test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built people, entities and wills with fixed NRICs
//! - `builders`: Builder patterns for test data construction
//! - `assertions`: Custom assertion helpers for validation results and documents
//! - `generators`: Property-based and fake data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
