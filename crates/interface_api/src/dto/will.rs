//! Will DTOs
//!
//! Requests carry raw strings. Field-level checks run through `validator`
//! first; NRICs, asset types and distribution types are parsed by the domain
//! when the request is turned into a [`Will`], so their errors keep the
//! domain's wording.

use chrono::NaiveDate;
use core_kernel::{BatchId, CenturyPolicy, Nric, WillId};
use domain_estate::{
    Asset, AssetType, Beneficiary, DistributionType, EstateError, Person, Testator,
    ValidationResult,
};
use domain_will::{
    AdvisoryNote, AssembledWill, BatchOutcome, BatchReport, Section, Will, WillBuilder, WillError,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PersonRequest {
    #[validate(length(min = 1, message = "full_name must not be empty"))]
    pub full_name: String,
    #[validate(length(min = 1, message = "nric must not be empty"))]
    pub nric: String,
    #[validate(length(min = 1, message = "address must not be empty"))]
    pub address: String,
    #[serde(default)]
    pub relationship: Option<String>,
}

impl PersonRequest {
    pub fn to_person(&self) -> Result<Person, EstateError> {
        let person = Person::new(&self.full_name, &self.nric, &self.address)?;
        Ok(match &self.relationship {
            Some(relationship) => person.with_relationship(relationship.as_str()),
            None => person,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TestatorRequest {
    #[serde(flatten)]
    #[validate(nested)]
    pub person: PersonRequest,
    #[validate(length(min = 1, message = "religion must not be empty"))]
    pub religion: String,
    #[validate(length(min = 1, message = "marital_status must not be empty"))]
    pub marital_status: String,
}

impl TestatorRequest {
    pub fn to_testator(&self) -> Result<Testator, EstateError> {
        Testator::new(self.person.to_person()?, &self.religion, &self.marital_status)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BeneficiaryRequest {
    #[serde(flatten)]
    #[validate(nested)]
    pub person: PersonRequest,
    /// `specific`, `percentage`, `equal` or `residuary`
    #[validate(length(min = 1, message = "distribution_type must not be empty"))]
    pub distribution_type: String,
    #[serde(default)]
    pub distribution_value: Option<String>,
    #[serde(default)]
    pub contingent_beneficiary: Option<String>,
}

impl BeneficiaryRequest {
    pub fn to_beneficiary(
        &self,
        today: NaiveDate,
        policy: CenturyPolicy,
    ) -> Result<Beneficiary, EstateError> {
        let distribution_type: DistributionType = self.distribution_type.parse()?;
        let mut beneficiary =
            Beneficiary::new_with_policy(self.person.to_person()?, distribution_type, today, policy);

        if let Some(value) = &self.distribution_value {
            beneficiary = beneficiary.with_value(value.as_str());
        }
        if let Some(contingent) = &self.contingent_beneficiary {
            beneficiary = beneficiary.with_contingent(contingent.as_str());
        }
        Ok(beneficiary)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AssetRequest {
    /// Wire name such as `real_property` or `epf_kwsp`
    #[validate(length(min = 1, message = "asset_type must not be empty"))]
    pub asset_type: String,
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: String,
    /// Estimated value in RM
    #[serde(default)]
    pub value: Option<Decimal>,
    #[serde(default)]
    pub details: BTreeMap<String, String>,
    #[validate(length(min = 1, message = "beneficiary_nric must not be empty"))]
    pub beneficiary_nric: String,
}

impl AssetRequest {
    pub fn to_asset(&self) -> Result<Asset, EstateError> {
        let asset_type: AssetType = self.asset_type.parse()?;
        let beneficiary_nric = Nric::parse(&self.beneficiary_nric)?;

        let mut asset = Asset::new(asset_type, &self.description, beneficiary_nric)?
            .with_details(self.details.clone());
        if let Some(value) = self.value {
            asset = asset.with_value(value);
        }
        Ok(asset)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct WillRequest {
    #[validate(nested)]
    pub testator: TestatorRequest,
    #[validate(nested)]
    pub executors: Vec<PersonRequest>,
    #[validate(nested)]
    pub witnesses: Vec<PersonRequest>,
    #[validate(nested)]
    pub beneficiaries: Vec<BeneficiaryRequest>,
    #[serde(default)]
    #[validate(nested)]
    pub assets: Vec<AssetRequest>,
    #[serde(default)]
    #[validate(nested)]
    pub guardians: Vec<PersonRequest>,
    #[serde(default)]
    pub has_minor_children: bool,
    #[serde(default)]
    pub special_instructions: Option<String>,
}

impl WillRequest {
    /// Builds the will, stopping at the first entity or structural error
    pub fn to_will(&self, today: NaiveDate, policy: CenturyPolicy) -> Result<Will, WillError> {
        let executors = self
            .executors
            .iter()
            .map(PersonRequest::to_person)
            .collect::<Result<Vec<_>, _>>()?;
        let beneficiaries = self
            .beneficiaries
            .iter()
            .map(|b| b.to_beneficiary(today, policy))
            .collect::<Result<Vec<_>, _>>()?;
        let assets = self
            .assets
            .iter()
            .map(AssetRequest::to_asset)
            .collect::<Result<Vec<_>, _>>()?;
        let guardians = self
            .guardians
            .iter()
            .map(PersonRequest::to_person)
            .collect::<Result<Vec<_>, _>>()?;

        let mut builder = WillBuilder::new()
            .testator(self.testator.to_testator()?)
            .executors(executors)
            .beneficiaries(beneficiaries)
            .assets(assets)
            .guardians(guardians)
            .has_minor_children(self.has_minor_children);

        for witness in &self.witnesses {
            builder = builder.add_witness(witness.to_person()?);
        }
        if let Some(instructions) = &self.special_instructions {
            builder = builder.special_instructions(instructions.as_str());
        }

        builder.build()
    }
}

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl From<ValidationResult> for ValidateResponse {
    fn from(result: ValidationResult) -> Self {
        Self {
            valid: result.is_valid,
            errors: result.errors,
            warnings: result.warnings,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub will_id: WillId,
    pub will_text: String,
    pub sections: Vec<Section>,
    pub warnings: Vec<String>,
    pub advisory_notes: Vec<AdvisoryNote>,
}

impl GenerateResponse {
    pub fn new(assembled: AssembledWill, advisory_notes: Vec<AdvisoryNote>) -> Self {
        Self {
            will_id: assembled.will_id,
            will_text: assembled.text,
            sections: assembled.sections,
            warnings: assembled.warnings,
            advisory_notes,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BatchRequest {
    /// Each entry is built and checked on its own; a bad entry only fails itself
    #[validate(length(min = 1, message = "at least one will is required"))]
    pub wills: Vec<WillRequest>,
}

/// Why one batch entry failed
#[derive(Debug, Serialize)]
pub struct BatchFailure {
    pub error: &'static str,
    pub messages: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct BatchOutcomeResponse {
    pub index: usize,
    pub will_id: Option<WillId>,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub will_text: Option<String>,
    pub warnings: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<BatchFailure>,
}

impl From<BatchOutcome> for BatchOutcomeResponse {
    fn from(outcome: BatchOutcome) -> Self {
        let success = outcome.is_success();
        let (will_text, warnings, failure) = match outcome.result {
            Ok(assembled) => (Some(assembled.text), assembled.warnings, None),
            Err(e) => {
                let failure = BatchFailure {
                    error: e.category().code(),
                    messages: e.messages(),
                };
                (None, Vec::new(), Some(failure))
            }
        };

        Self {
            index: outcome.index,
            will_id: outcome.will_id,
            success,
            will_text,
            warnings,
            failure,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BatchResponse {
    pub batch_id: BatchId,
    pub succeeded: usize,
    pub failed: usize,
    pub outcomes: Vec<BatchOutcomeResponse>,
}

impl From<BatchReport> for BatchResponse {
    fn from(report: BatchReport) -> Self {
        Self {
            batch_id: report.batch_id,
            succeeded: report.succeeded(),
            failed: report.failed(),
            outcomes: report.outcomes.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SigningGuidanceResponse {
    pub instructions: &'static str,
}
