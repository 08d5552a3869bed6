//! Custom Test Assertions
//!
//! Assertion helpers that print the whole finding list or document on
//! failure, which the standard macros do not.

use domain_estate::ValidationResult;
use domain_will::{AssembledWill, WillError};

/// Asserts that `text` contains every needle
pub fn assert_contains_all(text: &str, needles: &[&str]) {
    for needle in needles {
        assert!(
            text.contains(needle),
            "Expected text to contain {:?}\n--- text ---\n{}",
            needle,
            text
        );
    }
}

/// Asserts that the needles occur in `text` in the given order
pub fn assert_text_order(text: &str, needles: &[&str]) {
    let mut from = 0;
    for needle in needles {
        match text[from..].find(needle) {
            Some(pos) => from += pos + needle.len(),
            None => panic!(
                "Expected {:?} after byte {} of text\n--- text ---\n{}",
                needle, from, text
            ),
        }
    }
}

/// Asserts that the emitted sections are strictly increasing in section order
pub fn assert_sections_in_order(will: &AssembledWill) {
    assert!(
        will.sections.windows(2).all(|pair| pair[0] < pair[1]),
        "Sections out of order: {:?}",
        will.sections
    );
}

/// Asserts that some error contains `needle`
pub fn assert_has_error_containing(result: &ValidationResult, needle: &str) {
    assert!(
        result.errors.iter().any(|e| e.contains(needle)),
        "Expected an error containing {:?}, got errors {:?}",
        needle,
        result.errors
    );
}

/// Asserts that some warning contains `needle`
pub fn assert_has_warning_containing(result: &ValidationResult, needle: &str) {
    assert!(
        result.warnings.iter().any(|w| w.contains(needle)),
        "Expected a warning containing {:?}, got warnings {:?}",
        needle,
        result.warnings
    );
}

/// Asserts that no finding contains `needle`
pub fn assert_no_finding_containing(result: &ValidationResult, needle: &str) {
    let found: Vec<&String> = result
        .errors
        .iter()
        .chain(result.warnings.iter())
        .filter(|m| m.contains(needle))
        .collect();
    assert!(found.is_empty(), "Unexpected findings: {:?}", found);
}

/// Unwraps the findings of a `WillError::Validation`
pub fn expect_validation_error(err: WillError) -> (Vec<String>, Vec<String>) {
    match err {
        WillError::Validation { errors, warnings } => (errors, warnings),
        other => panic!("Expected a validation error, got {:?}", other),
    }
}
