//! Beneficiaries and how they share in the estate

use chrono::NaiveDate;
use core_kernel::CenturyPolicy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::error::EstateError;
use crate::person::Person;

/// Age below which a beneficiary is a minor
pub const AGE_OF_MAJORITY: i32 = 18;

/// How a beneficiary takes under the will
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributionType {
    /// Receives named assets
    Specific,
    /// Receives a stated percentage (`distribution_value` like "50%")
    Percentage,
    /// Shares equally with the other equal beneficiaries
    Equal,
    /// Takes the residuary estate
    Residuary,
}

impl DistributionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DistributionType::Specific => "specific",
            DistributionType::Percentage => "percentage",
            DistributionType::Equal => "equal",
            DistributionType::Residuary => "residuary",
        }
    }
}

impl fmt::Display for DistributionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DistributionType {
    type Err = EstateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "specific" => Ok(DistributionType::Specific),
            "percentage" => Ok(DistributionType::Percentage),
            "equal" => Ok(DistributionType::Equal),
            "residuary" => Ok(DistributionType::Residuary),
            _ => Err(EstateError::UnknownDistributionType(s.to_string())),
        }
    }
}

/// A person designated to receive part of the estate
///
/// `is_minor` is fixed when the beneficiary is created and is never
/// recomputed, even if the beneficiary comes of age later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Beneficiary {
    pub person: Person,
    pub is_minor: bool,
    pub distribution_type: DistributionType,
    /// Meaning depends on `distribution_type`
    pub distribution_value: Option<String>,
    /// Name of the alternate if this beneficiary predeceases the testator
    pub contingent_beneficiary: Option<String>,
}

impl Beneficiary {
    /// Creates a beneficiary, deriving minority with the default century policy
    pub fn new(person: Person, distribution_type: DistributionType, today: NaiveDate) -> Self {
        Self::new_with_policy(person, distribution_type, today, CenturyPolicy::default())
    }

    /// Creates a beneficiary, deriving minority under an explicit century policy
    pub fn new_with_policy(
        person: Person,
        distribution_type: DistributionType,
        today: NaiveDate,
        policy: CenturyPolicy,
    ) -> Self {
        let is_minor = person.age_on(today, policy) < AGE_OF_MAJORITY;
        debug!(nric = %person.nric, is_minor, %distribution_type, "Beneficiary created");

        Self {
            person,
            is_minor,
            distribution_type,
            distribution_value: None,
            contingent_beneficiary: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.distribution_value = non_blank(value.into());
        self
    }

    pub fn with_contingent(mut self, name: impl Into<String>) -> Self {
        self.contingent_beneficiary = non_blank(name.into());
        self
    }

    pub fn full_name(&self) -> &str {
        &self.person.full_name
    }

    pub fn is_residuary(&self) -> bool {
        self.distribution_type == DistributionType::Residuary
    }

    /// Parses the percentage share for percentage beneficiaries
    ///
    /// Returns `Ok(None)` for every other distribution type.
    ///
    /// # Errors
    ///
    /// Fails if a percentage beneficiary has no value, or one that is not a
    /// number between 0 and 100.
    pub fn percentage_share(&self) -> Result<Option<Decimal>, EstateError> {
        if self.distribution_type != DistributionType::Percentage {
            return Ok(None);
        }

        let raw = self.distribution_value.as_deref().ok_or_else(|| {
            EstateError::invalid(format!(
                "Percentage beneficiary {} has no percentage",
                self.person.full_name
            ))
        })?;

        let number = raw.trim().trim_end_matches('%').trim();
        let share = Decimal::from_str(number).map_err(|_| {
            EstateError::invalid(format!(
                "Cannot read percentage '{}' for {}",
                raw, self.person.full_name
            ))
        })?;

        if share.is_sign_negative() || share > Decimal::ONE_HUNDRED {
            return Err(EstateError::invalid(format!(
                "Percentage for {} must be between 0 and 100, got {}",
                self.person.full_name, share
            )));
        }

        Ok(Some(share))
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
