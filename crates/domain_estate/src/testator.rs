//! The testator: the person making the will

use chrono::NaiveDate;
use core_kernel::CenturyPolicy;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::EstateError;
use crate::person::Person;

/// Minimum age to make a will in Peninsular Malaysia
pub const MINIMUM_TESTATOR_AGE: i32 = 18;

/// Minimum age to make a will in Sabah
pub const SABAH_MINIMUM_AGE: i32 = 21;

/// Advisory shown to Muslim testators
pub const SYARIAH_ADVISORY: &str = "As a Muslim, you should create a Wasiat under Syariah law. \
Only 1/3 of your estate can be bequeathed; the remainder follows Faraid. \
Consider consulting a Syariah advisor.";

/// Outcome of the testator age check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgeCheck {
    /// False if the testator is too young to make a will
    pub ok: bool,
    /// Age derived from the NRIC
    pub age: i32,
    pub message: String,
}

impl AgeCheck {
    /// True for testators who are old enough in the Peninsula but not in Sabah
    pub fn has_sabah_note(&self) -> bool {
        self.ok && self.age < SABAH_MINIMUM_AGE
    }
}

/// The person whose estate the will disposes of
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testator {
    pub person: Person,
    /// Free text; only compared by [`Testator::requires_syariah_advisory`]
    pub religion: String,
    /// Free text (single, married, divorced, widowed)
    pub marital_status: String,
}

impl Testator {
    /// Creates a testator
    ///
    /// # Errors
    ///
    /// Fails if religion or marital status is blank.
    pub fn new(
        person: Person,
        religion: impl Into<String>,
        marital_status: impl Into<String>,
    ) -> Result<Self, EstateError> {
        let religion = religion.into().trim().to_string();
        if religion.is_empty() {
            return Err(EstateError::missing("Testator", "religion"));
        }

        let marital_status = marital_status.into().trim().to_string();
        if marital_status.is_empty() {
            return Err(EstateError::missing("Testator", "marital status"));
        }

        let testator = Self {
            person,
            religion,
            marital_status,
        };

        if testator.requires_syariah_advisory() {
            warn!(nric = %testator.person.nric, "Testator is Muslim; Wasiat advisory applies");
        }
        debug!(nric = %testator.person.nric, "Testator created");

        Ok(testator)
    }

    pub fn full_name(&self) -> &str {
        &self.person.full_name
    }

    /// True if the testator's estate falls under Syariah law
    ///
    /// This is the only place the religion string is interpreted.
    pub fn requires_syariah_advisory(&self) -> bool {
        let religion = self.religion.trim().to_lowercase();
        religion == "muslim" || religion == "islam"
    }

    /// Checks the testator's age with the default century policy
    pub fn check_age(&self, today: NaiveDate) -> AgeCheck {
        self.check_age_with(today, CenturyPolicy::default())
    }

    /// Checks the testator's age under an explicit century policy
    pub fn check_age_with(&self, today: NaiveDate, policy: CenturyPolicy) -> AgeCheck {
        let age = self.person.age_on(today, policy);

        if age < MINIMUM_TESTATOR_AGE {
            return AgeCheck {
                ok: false,
                age,
                message: format!(
                    "Testator must be {}+ years old. Current age: {}",
                    MINIMUM_TESTATOR_AGE, age
                ),
            };
        }

        let message = if age < SABAH_MINIMUM_AGE {
            format!(
                "Age {} is valid for Peninsular Malaysia. Note: Sabah requires {}+",
                age, SABAH_MINIMUM_AGE
            )
        } else {
            format!("Age {} - valid for will creation", age)
        };

        AgeCheck { ok: true, age, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn testator(nric: &str, religion: &str) -> Testator {
        let person = Person::new("Test Person", nric, "Kuala Lumpur").unwrap();
        Testator::new(person, religion, "Single").unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn test_religion_predicate_is_case_insensitive() {
        assert!(testator("800101-14-5677", "MUSLIM").requires_syariah_advisory());
        assert!(testator("800101-14-5677", " Islam ").requires_syariah_advisory());
        assert!(!testator("800101-14-5677", "Christian").requires_syariah_advisory());
    }

    #[test]
    fn test_minor_testator_fails() {
        let check = testator("090101-14-5677", "Hindu").check_age(today());
        assert!(!check.ok);
        assert_eq!(check.age, 17);
        assert_eq!(check.message, "Testator must be 18+ years old. Current age: 17");
    }

    #[test]
    fn test_nineteen_year_old_gets_sabah_note() {
        let check = testator("070101-14-5677", "Hindu").check_age(today());
        assert!(check.ok);
        assert!(check.has_sabah_note());
        assert!(check.message.contains("Sabah requires 21+"));
    }

    #[test]
    fn test_adult_testator() {
        let check = testator("800101-14-5677", "Hindu").check_age(today());
        assert!(check.ok);
        assert!(!check.has_sabah_note());
        assert_eq!(check.message, "Age 46 - valid for will creation");
    }

    #[test]
    fn test_blank_religion_rejected() {
        let person = Person::new("Test Person", "800101-14-5677", "KL").unwrap();
        let err = Testator::new(person, "", "Single").unwrap_err();
        assert_eq!(err.to_string(), "Testator religion is required");
    }
}
