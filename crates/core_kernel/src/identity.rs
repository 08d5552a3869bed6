//! Malaysian national registration identity numbers (NRIC)
//!
//! An NRIC is a 12-digit code laid out as `YYMMDD-LL-SSSS`:
//! - `YYMMDD` - date of birth (two-digit year)
//! - `LL` - place-of-birth locality code
//! - `SSSS` - sequence block; the final digit carries gender parity
//!
//! Parsing strips separators, requires exactly 12 digits and range-checks the
//! month (1-12) and day (1-31). The day is NOT checked against the length of
//! the specific month, so `800231` is accepted. Age derivation compares
//! (month, day) pairs and never builds a calendar date, which keeps such
//! codes from failing later.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::temporal::CenturyPolicy;

/// Number of digits in a canonical NRIC
pub const NRIC_LENGTH: usize = 12;

/// Errors raised while parsing an NRIC (`ID_FORMAT_ERROR`)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    #[error("NRIC must be 12 digits, got {0}")]
    WrongLength(usize),

    #[error("NRIC must contain only digits, found '{0}'")]
    NonDigit(char),

    #[error("Invalid month in NRIC: {0}")]
    InvalidMonth(u32),

    #[error("Invalid day in NRIC: {0}")]
    InvalidDay(u32),
}

/// Decoded birth date fields of an NRIC
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthDateParts {
    /// Two-digit year (0-99)
    pub year: u32,
    /// Month (1-12)
    pub month: u32,
    /// Day (1-31, not checked against the month)
    pub day: u32,
}

/// Gender suggested by the parity of the final digit
///
/// Informational only; nothing in the rules engine depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenderHint {
    Male,
    Female,
}

/// A parsed, canonical NRIC
///
/// Always holds exactly 12 ASCII digits. Displays in the dashed
/// `YYMMDD-LL-SSSS` form and serializes as the bare digit string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Nric(String);

impl Nric {
    /// Parses a raw NRIC, accepting dashes and whitespace as separators
    ///
    /// # Errors
    ///
    /// Returns the specific `IdentityError` for the first violation found:
    /// wrong length, non-digit character, month outside 1-12 or day outside 1-31.
    pub fn parse(raw: &str) -> Result<Self, IdentityError> {
        let cleaned: String = raw
            .chars()
            .filter(|c| *c != '-' && !c.is_whitespace())
            .collect();

        let length = cleaned.chars().count();
        if length != NRIC_LENGTH {
            return Err(IdentityError::WrongLength(length));
        }

        if let Some(bad) = cleaned.chars().find(|c| !c.is_ascii_digit()) {
            return Err(IdentityError::NonDigit(bad));
        }

        let bytes = cleaned.as_bytes();
        let month = two_digits(&bytes[2..4]);
        let day = two_digits(&bytes[4..6]);

        if !(1..=12).contains(&month) {
            return Err(IdentityError::InvalidMonth(month));
        }
        if !(1..=31).contains(&day) {
            return Err(IdentityError::InvalidDay(day));
        }

        Ok(Self(cleaned))
    }

    /// Returns the canonical 12-digit string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Renders the dashed display form `YYMMDD-LL-SSSS`
    pub fn formatted(&self) -> String {
        format!("{}-{}-{}", &self.0[0..6], &self.0[6..8], &self.0[8..12])
    }

    /// Returns the decoded birth date fields
    pub fn birth_date_parts(&self) -> BirthDateParts {
        let bytes = self.0.as_bytes();
        BirthDateParts {
            year: two_digits(&bytes[0..2]),
            month: two_digits(&bytes[2..4]),
            day: two_digits(&bytes[4..6]),
        }
    }

    /// Returns the two-digit place-of-birth code
    pub fn locality_code(&self) -> &str {
        &self.0[6..8]
    }

    /// Returns the four-digit sequence block
    pub fn sequence(&self) -> &str {
        &self.0[8..12]
    }

    /// Returns the gender implied by the final digit (odd = male)
    pub fn gender_hint(&self) -> GenderHint {
        let last = self.0.as_bytes()[NRIC_LENGTH - 1] - b'0';
        if last % 2 == 1 {
            GenderHint::Male
        } else {
            GenderHint::Female
        }
    }

    /// Resolves the four-digit birth year under the given century policy
    pub fn birth_year(&self, today: NaiveDate, policy: CenturyPolicy) -> i32 {
        policy.full_year(self.birth_date_parts().year, today)
    }

    /// Computes the age in whole years on `today`
    ///
    /// A birth date that falls after `today` yields a negative age.
    pub fn age_on(&self, today: NaiveDate, policy: CenturyPolicy) -> i32 {
        let parts = self.birth_date_parts();

        let mut age = today.year() - self.birth_year(today, policy);
        if (today.month(), today.day()) < (parts.month, parts.day) {
            age -= 1;
        }
        age
    }
}

impl fmt::Display for Nric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl FromStr for Nric {
    type Err = IdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Nric {
    type Error = IdentityError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Nric> for String {
    fn from(id: Nric) -> String {
        id.0
    }
}

impl AsRef<str> for Nric {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Parses a raw identity code into its canonical form
pub fn parse_id(raw: &str) -> Result<Nric, IdentityError> {
    Nric::parse(raw)
}

/// Renders an identity code as `YYMMDD-LL-SSSS`
pub fn format_id(id: &Nric) -> String {
    id.formatted()
}

/// Derives age on `today` with the default century policy
pub fn derive_age(id: &Nric, today: NaiveDate) -> i32 {
    id.age_on(today, CenturyPolicy::default())
}

/// Derives age on `today` with an explicit century policy
pub fn derive_age_with(id: &Nric, today: NaiveDate, policy: CenturyPolicy) -> i32 {
    id.age_on(today, policy)
}

fn two_digits(bytes: &[u8]) -> u32 {
    u32::from(bytes[0] - b'0') * 10 + u32::from(bytes[1] - b'0')
}
