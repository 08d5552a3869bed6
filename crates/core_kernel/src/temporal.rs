//! Temporal helpers for will generation
//!
//! - `CenturyPolicy`: how a two-digit NRIC year maps to a full year
//! - `Clock`: the injected source of "today" (documents must be reproducible)
//! - `format_legal_date`: the "18th day of October 2026" form used in wills

use chrono::{Datelike, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Century inference policy for two-digit birth years
///
/// Codes only carry a two-digit year, so anyone born more than 100 years
/// before "today" is ambiguous. The policy makes the choice explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CenturyPolicy {
    /// Years above today's two-digit year are 19xx, all others 20xx
    #[default]
    RelativeToToday,
    /// Years above the fixed pivot are 19xx, all others 20xx
    Pivot(u8),
}

impl CenturyPolicy {
    /// Resolves a two-digit year to a four-digit year
    pub fn full_year(&self, two_digit_year: u32, today: NaiveDate) -> i32 {
        let pivot = match self {
            CenturyPolicy::RelativeToToday => today.year().rem_euclid(100) as u32,
            CenturyPolicy::Pivot(pivot) => u32::from(*pivot),
        };

        let year = two_digit_year as i32;
        if two_digit_year > pivot {
            1900 + year
        } else {
            2000 + year
        }
    }
}

/// Timezone of the will's jurisdiction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timezone(pub Tz);

impl Timezone {
    pub fn new(tz: Tz) -> Self {
        Self(tz)
    }

    /// Current calendar date in this timezone
    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.0).date_naive()
    }
}

impl Default for Timezone {
    fn default() -> Self {
        Self(chrono_tz::Asia::Kuala_Lumpur)
    }
}

/// Source of the current date
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Wall clock in a given timezone (Kuala Lumpur by default)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    timezone: Timezone,
}

impl SystemClock {
    pub fn new(timezone: Timezone) -> Self {
        Self { timezone }
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        self.timezone.today()
    }
}

/// Clock pinned to one date, for tests and reproducible batch runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Renders a date as "18th day of October 2026"
pub fn format_legal_date(date: NaiveDate) -> String {
    let day = date.day();
    let suffix = match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{} day of {}", day, suffix, date.format("%B %Y"))
}
