//! Will Aggregate Root
//!
//! The Will is the consistency boundary for one generated document. It is
//! built once per request and never mutated afterwards.
//!
//! # Invariants
//!
//! Checked on every build, failing with the first violation:
//! - 1 to 4 executors, exactly 2 witnesses, at least 1 beneficiary
//! - No witness is also a beneficiary (Wills Act 1959, s.9)
//! - A will declaring minor children appoints at least one guardian
//!
//! Everything else is collected by [`Will::validate_complete`].

use chrono::NaiveDate;
use core_kernel::{CenturyPolicy, Nric, WillId};
use domain_estate::{Asset, Beneficiary, Person, Testator, ValidationResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::WillError;
use crate::rules::WillRules;

/// Maximum number of executors a will may appoint
pub const MAX_EXECUTORS: usize = 4;

/// Number of attesting witnesses
pub const WITNESS_COUNT: usize = 2;

/// A complete set of testamentary wishes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Will {
    id: WillId,
    testator: Testator,
    executors: Vec<Person>,
    witnesses: [Person; WITNESS_COUNT],
    beneficiaries: Vec<Beneficiary>,
    assets: Vec<Asset>,
    guardians: Vec<Person>,
    has_minor_children: bool,
    special_instructions: Option<String>,
}

impl Will {
    pub fn id(&self) -> WillId {
        self.id
    }

    pub fn testator(&self) -> &Testator {
        &self.testator
    }

    /// Executors in order of appointment; the first is primary
    pub fn executors(&self) -> &[Person] {
        &self.executors
    }

    pub fn witnesses(&self) -> &[Person; WITNESS_COUNT] {
        &self.witnesses
    }

    pub fn beneficiaries(&self) -> &[Beneficiary] {
        &self.beneficiaries
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    /// Guardians in order of appointment; the first is primary
    pub fn guardians(&self) -> &[Person] {
        &self.guardians
    }

    pub fn has_minor_children(&self) -> bool {
        self.has_minor_children
    }

    pub fn special_instructions(&self) -> Option<&str> {
        self.special_instructions.as_deref()
    }

    /// Looks up the beneficiary an asset is left to
    pub fn beneficiary_by_nric(&self, nric: &Nric) -> Option<&Beneficiary> {
        self.beneficiaries.iter().find(|b| &b.person.nric == nric)
    }

    /// Sum of the asset values that were given
    pub fn estimated_estate_value(&self) -> Decimal {
        self.assets.iter().filter_map(Asset::estimated_value).sum()
    }

    /// Re-checks the construction invariants
    ///
    /// Wills built through [`WillBuilder`] always pass; wills deserialized
    /// from elsewhere may not.
    pub fn check_invariants(&self) -> Result<(), WillError> {
        if self.executors.is_empty() || self.executors.len() > MAX_EXECUTORS {
            return Err(WillError::ExecutorCount(self.executors.len()));
        }

        if self.beneficiaries.is_empty() {
            return Err(WillError::NoBeneficiaries);
        }

        if let Some(witness) = self
            .witnesses
            .iter()
            .find(|w| self.beneficiary_by_nric(&w.nric).is_some())
        {
            return Err(WillError::WitnessIsBeneficiary {
                name: witness.full_name.clone(),
                nric: witness.formatted_nric(),
            });
        }

        if self.has_minor_children && self.guardians.is_empty() {
            return Err(WillError::GuardianRequired);
        }

        Ok(())
    }

    /// Runs every cross-entity rule with the default century policy
    pub fn validate_complete(&self, today: NaiveDate) -> ValidationResult {
        self.validate_complete_with(today, CenturyPolicy::default())
    }

    /// Runs every cross-entity rule, collecting all findings in rule order
    pub fn validate_complete_with(&self, today: NaiveDate, policy: CenturyPolicy) -> ValidationResult {
        WillRules::new(today, policy).evaluate(self)
    }
}

/// Builder for creating wills
///
/// # Example
///
/// ```rust,ignore
/// let will = WillBuilder::new()
///     .testator(testator)
///     .add_executor(executor)
///     .witnesses(first, second)
///     .add_beneficiary(beneficiary)
///     .build()?;
/// ```
pub struct WillBuilder {
    id: Option<WillId>,
    testator: Option<Testator>,
    executors: Vec<Person>,
    witnesses: Vec<Person>,
    beneficiaries: Vec<Beneficiary>,
    assets: Vec<Asset>,
    guardians: Vec<Person>,
    has_minor_children: bool,
    special_instructions: Option<String>,
}

impl WillBuilder {
    pub fn new() -> Self {
        Self {
            id: None,
            testator: None,
            executors: Vec::new(),
            witnesses: Vec::new(),
            beneficiaries: Vec::new(),
            assets: Vec::new(),
            guardians: Vec::new(),
            has_minor_children: false,
            special_instructions: None,
        }
    }

    /// Uses a fixed id instead of generating one
    pub fn id(mut self, id: WillId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn testator(mut self, testator: Testator) -> Self {
        self.testator = Some(testator);
        self
    }

    pub fn add_executor(mut self, executor: Person) -> Self {
        self.executors.push(executor);
        self
    }

    pub fn executors(mut self, executors: Vec<Person>) -> Self {
        self.executors = executors;
        self
    }

    pub fn add_witness(mut self, witness: Person) -> Self {
        self.witnesses.push(witness);
        self
    }

    pub fn witnesses(mut self, first: Person, second: Person) -> Self {
        self.witnesses = vec![first, second];
        self
    }

    pub fn add_beneficiary(mut self, beneficiary: Beneficiary) -> Self {
        self.beneficiaries.push(beneficiary);
        self
    }

    pub fn beneficiaries(mut self, beneficiaries: Vec<Beneficiary>) -> Self {
        self.beneficiaries = beneficiaries;
        self
    }

    pub fn add_asset(mut self, asset: Asset) -> Self {
        self.assets.push(asset);
        self
    }

    pub fn assets(mut self, assets: Vec<Asset>) -> Self {
        self.assets = assets;
        self
    }

    pub fn add_guardian(mut self, guardian: Person) -> Self {
        self.guardians.push(guardian);
        self
    }

    pub fn guardians(mut self, guardians: Vec<Person>) -> Self {
        self.guardians = guardians;
        self
    }

    pub fn has_minor_children(mut self, has_minor_children: bool) -> Self {
        self.has_minor_children = has_minor_children;
        self
    }

    /// Sets special instructions (blank text is ignored)
    pub fn special_instructions(mut self, instructions: impl Into<String>) -> Self {
        let instructions = instructions.into().trim().to_string();
        self.special_instructions = (!instructions.is_empty()).then_some(instructions);
        self
    }

    /// Builds the will
    ///
    /// # Errors
    ///
    /// Returns the first construction invariant that does not hold.
    pub fn build(self) -> Result<Will, WillError> {
        let testator = self.testator.ok_or(WillError::MissingTestator)?;

        let witness_count = self.witnesses.len();
        let witnesses: [Person; WITNESS_COUNT] = self
            .witnesses
            .try_into()
            .map_err(|_| WillError::WitnessCount(witness_count))?;

        let will = Will {
            id: self.id.unwrap_or_default(),
            testator,
            executors: self.executors,
            witnesses,
            beneficiaries: self.beneficiaries,
            assets: self.assets,
            guardians: self.guardians,
            has_minor_children: self.has_minor_children,
            special_instructions: self.special_instructions,
        };

        will.check_invariants()?;

        debug!(
            will_id = %will.id,
            executors = will.executors.len(),
            beneficiaries = will.beneficiaries.len(),
            assets = will.assets.len(),
            "Will built"
        );

        Ok(will)
    }
}

impl Default for WillBuilder {
    fn default() -> Self {
        Self::new()
    }
}
