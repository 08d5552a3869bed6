//! Cross-entity rules for `validate_complete`
//!
//! Every rule runs and appends to one [`ValidationResult`]; nothing short
//! circuits. Errors block generation, warnings never do. Rules run in this
//! order:
//!
//! 1. Testator age (error)
//! 2. Same person as executor, beneficiary and witness (error)
//! 3. Asset completeness (error per asset)
//! 4. Minor beneficiaries (warning)
//! 5. Both witnesses are the same person (error)
//! 6. Religion advisory (warning)
//! 7. Percentage shares readable and totalling 100 (warning)
//! 8. No alternate executor (warning)
//! 9. Witness age (error under 18, warning under 21)
//! 10. Asset left to someone who is not a beneficiary (warning)
//! 11. Sabah minimum-age note (warning)

use chrono::NaiveDate;
use core_kernel::CenturyPolicy;
use domain_estate::{DistributionType, EstateValidator, ValidationResult};
use rust_decimal::Decimal;
use std::collections::HashSet;
use tracing::{debug, warn};

use crate::aggregate::Will;

/// Rule set bound to one evaluation date
#[derive(Debug, Clone, Copy)]
pub struct WillRules {
    today: NaiveDate,
    policy: CenturyPolicy,
}

impl WillRules {
    pub fn new(today: NaiveDate, policy: CenturyPolicy) -> Self {
        Self { today, policy }
    }

    /// Runs all rules against a will
    pub fn evaluate(&self, will: &Will) -> ValidationResult {
        let mut result = ValidationResult::ok();

        self.testator_age(will, &mut result);
        self.triple_role_conflict(will, &mut result);
        self.asset_completeness(will, &mut result);
        self.minor_beneficiaries(will, &mut result);
        self.duplicate_witness(will, &mut result);
        self.religion_advisory(will, &mut result);
        self.percentage_totals(will, &mut result);
        self.alternate_executor(will, &mut result);
        self.witness_ages(will, &mut result);
        self.unmatched_assets(will, &mut result);
        self.sabah_note(will, &mut result);

        debug!(
            will_id = %will.id(),
            errors = result.errors.len(),
            warnings = result.warnings.len(),
            "Will validated"
        );

        result
    }

    fn testator_age(&self, will: &Will, result: &mut ValidationResult) {
        let check = will.testator().check_age_with(self.today, self.policy);
        if !check.ok {
            result.add_error(check.message);
        }
    }

    fn triple_role_conflict(&self, will: &Will, result: &mut ValidationResult) {
        let beneficiaries: HashSet<_> = will.beneficiaries().iter().map(|b| &b.person.nric).collect();
        let witnesses: HashSet<_> = will.witnesses().iter().map(|w| &w.nric).collect();

        let offenders: Vec<&str> = will
            .executors()
            .iter()
            .filter(|e| beneficiaries.contains(&e.nric) && witnesses.contains(&e.nric))
            .map(|e| e.full_name.as_str())
            .collect();

        if !offenders.is_empty() {
            result.add_error(format!(
                "Executors cannot be BOTH beneficiaries AND witnesses: {}",
                offenders.join(", ")
            ));
        }
    }

    fn asset_completeness(&self, will: &Will, result: &mut ValidationResult) {
        for asset in will.assets() {
            result.merge(EstateValidator::validate_asset(asset));
        }
    }

    fn minor_beneficiaries(&self, will: &Will, result: &mut ValidationResult) {
        let minors = will.beneficiaries().iter().filter(|b| b.is_minor).count();
        if minors > 0 {
            warn!(will_id = %will.id(), minors, "Minor beneficiaries named");
            result.add_warning(format!(
                "{} minor beneficiary(ies) detected. Consider adding trust provisions with vesting age.",
                minors
            ));
        }
    }

    fn duplicate_witness(&self, will: &Will, result: &mut ValidationResult) {
        let [first, second] = will.witnesses();
        if first.same_person(second) {
            result.add_error(format!(
                "Both witnesses have the same NRIC ({}); two different witnesses are required",
                first.formatted_nric()
            ));
        }
    }

    fn religion_advisory(&self, will: &Will, result: &mut ValidationResult) {
        result.merge(EstateValidator::validate_testator_religion(will.testator()));
    }

    fn percentage_totals(&self, will: &Will, result: &mut ValidationResult) {
        let mut total = Decimal::ZERO;
        let mut any_percentage = false;
        let mut all_readable = true;

        for beneficiary in will.beneficiaries() {
            if beneficiary.distribution_type != DistributionType::Percentage {
                continue;
            }
            any_percentage = true;

            let check = EstateValidator::validate_beneficiary(beneficiary);
            if check.warnings.is_empty() {
                total += beneficiary.percentage_share().ok().flatten().unwrap_or_default();
            } else {
                all_readable = false;
            }
            result.merge(check);
        }

        if any_percentage && all_readable && total != Decimal::ONE_HUNDRED {
            result.add_warning(format!(
                "Percentage shares total {}%, expected 100%",
                total.normalize()
            ));
        }
    }

    fn alternate_executor(&self, will: &Will, result: &mut ValidationResult) {
        if will.executors().len() == 1 {
            result.add_warning(
                "Only one executor appointed. Naming an alternate executor is recommended.",
            );
        }
    }

    fn witness_ages(&self, will: &Will, result: &mut ValidationResult) {
        for witness in will.witnesses() {
            result.merge(EstateValidator::validate_witness(witness, self.today, self.policy));
        }
    }

    fn unmatched_assets(&self, will: &Will, result: &mut ValidationResult) {
        for asset in will.assets() {
            if will.beneficiary_by_nric(&asset.beneficiary_nric).is_none() {
                result.add_warning(format!(
                    "Asset '{}' ({}) is left to NRIC {}, who is not a named beneficiary; \
                     it will be omitted from the distribution",
                    asset.description, asset.asset_type, asset.beneficiary_nric
                ));
            }
        }
    }

    fn sabah_note(&self, will: &Will, result: &mut ValidationResult) {
        let check = will.testator().check_age_with(self.today, self.policy);
        if check.has_sabah_note() {
            result.add_warning(check.message);
        }
    }
}
