//! The base identity record shared by every role in a will

use chrono::NaiveDate;
use core_kernel::{derive_age_with, CenturyPolicy, Nric};
use serde::{Deserialize, Serialize};

use crate::error::EstateError;

/// A natural person identified by NRIC
///
/// Executors, witnesses and guardians are all plain `Person` records. Which
/// role a person plays is decided by the list of the will they appear in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Full legal name as printed on the NRIC
    pub full_name: String,
    /// Canonical NRIC
    pub nric: Nric,
    /// Residential address
    pub address: String,
    /// Relationship to the testator, if given
    pub relationship: Option<String>,
}

impl Person {
    /// Creates a person from a raw NRIC string
    ///
    /// # Errors
    ///
    /// Fails if the NRIC does not parse, or if the name or address is blank.
    pub fn new(
        full_name: impl Into<String>,
        nric: &str,
        address: impl Into<String>,
    ) -> Result<Self, EstateError> {
        let nric = Nric::parse(nric)?;
        Self::with_nric(full_name, nric, address)
    }

    /// Creates a person from an already parsed NRIC
    pub fn with_nric(
        full_name: impl Into<String>,
        nric: Nric,
        address: impl Into<String>,
    ) -> Result<Self, EstateError> {
        let full_name = normalize_whitespace(&full_name.into());
        if full_name.is_empty() {
            return Err(EstateError::missing("Person", "full name"));
        }

        let address = address.into().trim().to_string();
        if address.is_empty() {
            return Err(EstateError::missing("Person", "address"));
        }

        Ok(Self {
            full_name,
            nric,
            address,
            relationship: None,
        })
    }

    /// Sets the relationship to the testator (blank values are ignored)
    pub fn with_relationship(mut self, relationship: impl Into<String>) -> Self {
        let relationship = normalize_whitespace(&relationship.into());
        self.relationship = (!relationship.is_empty()).then_some(relationship);
        self
    }

    /// Name as it appears in the document, upper-cased
    pub fn display_name(&self) -> String {
        self.full_name.to_uppercase()
    }

    /// NRIC in `YYMMDD-LL-SSSS` form
    pub fn formatted_nric(&self) -> String {
        self.nric.formatted()
    }

    pub fn age_on(&self, today: NaiveDate, policy: CenturyPolicy) -> i32 {
        derive_age_with(&self.nric, today, policy)
    }

    /// Returns true if both records carry the same NRIC
    pub fn same_person(&self, other: &Person) -> bool {
        self.nric == other.nric
    }
}

fn normalize_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_whitespace_collapsed() {
        let person = Person::new("  Siti   Aminah ", "800101-14-5678", "Ipoh").unwrap();
        assert_eq!(person.full_name, "Siti Aminah");
        assert_eq!(person.display_name(), "SITI AMINAH");
    }

    #[test]
    fn test_blank_name_rejected() {
        let err = Person::new("   ", "800101-14-5678", "Ipoh").unwrap_err();
        assert_eq!(err, EstateError::missing("Person", "full name"));
    }

    #[test]
    fn test_blank_address_rejected() {
        let err = Person::new("Siti", "800101-14-5678", " ").unwrap_err();
        assert_eq!(err.to_string(), "Person address is required");
    }

    #[test]
    fn test_bad_nric_is_identity_error() {
        let err = Person::new("Siti", "801301-14-5678", "Ipoh").unwrap_err();
        assert!(err.is_identity_error());
    }

    #[test]
    fn test_blank_relationship_ignored() {
        let person = Person::new("Siti", "800101-14-5678", "Ipoh")
            .unwrap()
            .with_relationship("  ");
        assert_eq!(person.relationship, None);
    }
}
