//! Assets and the per-type dispatch table
//!
//! [`AssetType::profile`] is the single table mapping a category to the
//! detail keys it requires and the bequest template it is rendered with.
//! Adding a category means adding one enum variant and one table row.

use core_kernel::Nric;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::error::EstateError;

/// Closed set of asset categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    RealProperty,
    BankAccount,
    Investment,
    EpfKwsp,
    Business,
    Vehicle,
    Jewelry,
    Personal,
    Digital,
    Insurance,
}

/// Shape of the specific-bequest text for an asset category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BequestTemplate {
    RealProperty,
    BankAccount,
    Investment,
    /// EPF savings; always carries the nomination caveat
    Epf,
    Business,
    Vehicle,
    Digital,
    /// Policy benefits; always carries the nomination caveat
    Insurance,
    /// "I give {description} to {beneficiary}"
    Generic,
}

impl BequestTemplate {
    /// True if the bequest is subordinate to a nomination held outside the will
    pub fn nomination_overrides_will(&self) -> bool {
        matches!(self, BequestTemplate::Epf | BequestTemplate::Insurance)
    }
}

/// Row of the asset dispatch table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetProfile {
    pub required_details: &'static [&'static str],
    pub template: BequestTemplate,
}

impl AssetType {
    pub const ALL: [AssetType; 10] = [
        AssetType::RealProperty,
        AssetType::BankAccount,
        AssetType::Investment,
        AssetType::EpfKwsp,
        AssetType::Business,
        AssetType::Vehicle,
        AssetType::Jewelry,
        AssetType::Personal,
        AssetType::Digital,
        AssetType::Insurance,
    ];

    pub fn profile(&self) -> AssetProfile {
        let (required_details, template): (&'static [&'static str], BequestTemplate) = match self {
            AssetType::RealProperty => (
                &["address", "title_number", "ownership_type"],
                BequestTemplate::RealProperty,
            ),
            AssetType::BankAccount => (&["bank_name", "account_type"], BequestTemplate::BankAccount),
            AssetType::Investment => (
                &["investment_type", "institution"],
                BequestTemplate::Investment,
            ),
            AssetType::EpfKwsp => (&["account_number"], BequestTemplate::Epf),
            AssetType::Business => (
                &["company_name", "registration_number", "ownership_percentage"],
                BequestTemplate::Business,
            ),
            AssetType::Vehicle => (
                &["registration_number", "make_model"],
                BequestTemplate::Vehicle,
            ),
            AssetType::Jewelry => (&[], BequestTemplate::Generic),
            AssetType::Personal => (&[], BequestTemplate::Generic),
            AssetType::Digital => (
                &["asset_description", "access_location"],
                BequestTemplate::Digital,
            ),
            AssetType::Insurance => (&[], BequestTemplate::Insurance),
        };

        AssetProfile {
            required_details,
            template,
        }
    }

    /// Wire name, e.g. `real_property`
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::RealProperty => "real_property",
            AssetType::BankAccount => "bank_account",
            AssetType::Investment => "investment",
            AssetType::EpfKwsp => "epf_kwsp",
            AssetType::Business => "business",
            AssetType::Vehicle => "vehicle",
            AssetType::Jewelry => "jewelry",
            AssetType::Personal => "personal",
            AssetType::Digital => "digital",
            AssetType::Insurance => "insurance",
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetType {
    type Err = EstateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        AssetType::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| EstateError::UnknownAssetType {
                value: s.to_string(),
                allowed: AssetType::ALL
                    .iter()
                    .map(AssetType::as_str)
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

/// An item of the estate left to one beneficiary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub asset_type: AssetType,
    pub description: String,
    /// Estimated value in RM
    pub value: Option<Decimal>,
    /// Type-specific details keyed by name (see [`AssetType::profile`])
    pub details: BTreeMap<String, String>,
    /// NRIC of the beneficiary receiving this asset
    pub beneficiary_nric: Nric,
}

impl Asset {
    /// Creates an asset with no details
    ///
    /// # Errors
    ///
    /// Fails if the description is blank.
    pub fn new(
        asset_type: AssetType,
        description: impl Into<String>,
        beneficiary_nric: Nric,
    ) -> Result<Self, EstateError> {
        let description = description.into().trim().to_string();
        if description.is_empty() {
            return Err(EstateError::missing("Asset", "description"));
        }

        debug!(%asset_type, beneficiary = %beneficiary_nric, "Asset created");

        Ok(Self {
            asset_type,
            description,
            value: None,
            details: BTreeMap::new(),
            beneficiary_nric,
        })
    }

    pub fn with_value(mut self, value: Decimal) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    pub fn with_details<I, K, V>(mut self, details: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.details
            .extend(details.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Returns a detail value, treating blank values as absent
    pub fn detail(&self, key: &str) -> Option<&str> {
        self.details
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// Required detail keys that are absent or blank, in table order
    pub fn missing_required_details(&self) -> Vec<&'static str> {
        self.asset_type
            .profile()
            .required_details
            .iter()
            .copied()
            .filter(|key| self.detail(key).is_none())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_required_details().is_empty()
    }

    /// Message naming the asset type and each missing key, if any are missing
    pub fn completeness_error(&self) -> Option<String> {
        let missing = self.missing_required_details();
        if missing.is_empty() {
            return None;
        }
        Some(format!(
            "Missing required details for {}: {}",
            self.asset_type,
            missing.join(", ")
        ))
    }

    pub fn estimated_value(&self) -> Option<Decimal> {
        self.value
    }
}
