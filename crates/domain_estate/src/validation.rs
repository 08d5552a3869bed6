//! Entity validation
//!
//! Single-entity checks that report findings instead of failing. The will
//! aggregate calls these while accumulating its own cross-entity findings.
//!
//! # Validation Rules
//!
//! ## Testator
//! - Muslim testators get the Wasiat advisory (warning)
//!
//! ## Witnesses
//! - Must be 18+ (error); 21+ is preferred (warning)
//!
//! ## Beneficiaries
//! - Percentage beneficiaries need a readable percentage (warning)
//!
//! ## Assets
//! - Every required detail key for the asset type must be present (error)

use chrono::NaiveDate;
use core_kernel::CenturyPolicy;

use crate::asset::Asset;
use crate::beneficiary::Beneficiary;
use crate::person::Person;
use crate::testator::{Testator, MINIMUM_TESTATOR_AGE, SABAH_MINIMUM_AGE, SYARIAH_ADVISORY};

/// Result of a validation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// False if any error was recorded
    pub is_valid: bool,
    /// Findings that block generation
    pub errors: Vec<String>,
    /// Findings that do not block generation
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn fail(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings: Vec::new(),
        }
    }

    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
        self.is_valid = false;
    }

    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Merges another result into this one, keeping order
    pub fn merge(&mut self, other: ValidationResult) {
        if !other.is_valid {
            self.is_valid = false;
        }
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    /// Errors followed by warnings, as one list
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().chain(self.warnings.iter()).cloned().collect()
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

/// Validator for estate entities
pub struct EstateValidator;

impl EstateValidator {
    /// Religion advisory for Muslim testators
    pub fn validate_testator_religion(testator: &Testator) -> ValidationResult {
        let mut result = ValidationResult::ok();
        if testator.requires_syariah_advisory() {
            result.add_warning(SYARIAH_ADVISORY);
        }
        result
    }

    /// Witness age: error under 18, warning under 21
    pub fn validate_witness(
        witness: &Person,
        today: NaiveDate,
        policy: CenturyPolicy,
    ) -> ValidationResult {
        let mut result = ValidationResult::ok();
        let age = witness.age_on(today, policy);

        if age < MINIMUM_TESTATOR_AGE {
            result.add_error(format!(
                "Witness {} must be {}+ years old. Current age: {}",
                witness.full_name, MINIMUM_TESTATOR_AGE, age
            ));
        } else if age < SABAH_MINIMUM_AGE {
            result.add_warning(format!(
                "Witness {} is {} years old; witnesses aged {}+ are preferred",
                witness.full_name, age, SABAH_MINIMUM_AGE
            ));
        }

        result
    }

    /// Percentage readability for a single beneficiary
    pub fn validate_beneficiary(beneficiary: &Beneficiary) -> ValidationResult {
        let mut result = ValidationResult::ok();
        if let Err(e) = beneficiary.percentage_share() {
            result.add_warning(e.to_string());
        }
        result
    }

    /// Required detail keys for an asset
    pub fn validate_asset(asset: &Asset) -> ValidationResult {
        let mut result = ValidationResult::ok();
        if let Some(message) = asset.completeness_error() {
            result.add_error(message);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_keeps_order_and_validity() {
        let mut first = ValidationResult::ok();
        first.add_warning("w1");

        let mut second = ValidationResult::ok();
        second.add_error("e1");
        second.add_warning("w2");

        first.merge(second);
        assert!(!first.is_valid);
        assert_eq!(first.errors, vec!["e1"]);
        assert_eq!(first.warnings, vec!["w1", "w2"]);
        assert_eq!(first.messages(), vec!["e1", "w1", "w2"]);
    }

    #[test]
    fn test_fail_with_no_errors_is_valid() {
        assert!(ValidationResult::fail(Vec::new()).is_valid);
        assert!(!ValidationResult::fail(vec!["x".into()]).is_valid);
    }
}
