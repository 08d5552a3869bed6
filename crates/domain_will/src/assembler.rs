//! Document assembly
//!
//! Turns a validated [`Will`] into text. Sections are always emitted in the
//! order of [`Section`]; optional sections are skipped, never moved.

use chrono::NaiveDate;
use core_kernel::{CenturyPolicy, Clock, WillId};
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::aggregate::Will;
use crate::clauses;
use crate::error::WillError;

/// Separator placed between sections
pub const SECTION_SEPARATOR: &str = "\n\n";

/// Sections of a will, in their mandatory order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Opening,
    Executors,
    Debts,
    Distribution,
    Residuary,
    Guardians,
    SpecialInstructions,
    Testimonium,
    Attestation,
}

/// Inputs to assembly that are not part of the will itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssemblyContext {
    /// Date used for age rules and the testimonium
    pub today: NaiveDate,
    pub century_policy: CenturyPolicy,
}

impl AssemblyContext {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            century_policy: CenturyPolicy::default(),
        }
    }

    pub fn from_clock(clock: &dyn Clock) -> Self {
        Self::new(clock.today())
    }

    pub fn with_century_policy(mut self, policy: CenturyPolicy) -> Self {
        self.century_policy = policy;
        self
    }
}

/// A generated will
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssembledWill {
    pub will_id: WillId,
    pub text: String,
    /// Sections emitted, in document order
    pub sections: Vec<Section>,
    /// Non-blocking findings from validation
    pub warnings: Vec<String>,
}

impl AssembledWill {
    pub fn has_section(&self, section: Section) -> bool {
        self.sections.contains(&section)
    }
}

/// Validates a will and assembles its text
///
/// # Errors
///
/// - any construction invariant the will no longer satisfies
/// - `WillError::Validation` carrying every finding if any hard error exists
/// - `WillError::Clause` if a clause generator rejects its input
#[instrument(skip(will, ctx), fields(will_id = %will.id()))]
pub fn assemble(will: &Will, ctx: &AssemblyContext) -> Result<AssembledWill, WillError> {
    will.check_invariants()?;

    let validation = will.validate_complete_with(ctx.today, ctx.century_policy);
    if !validation.is_valid {
        warn!(
            errors = validation.errors.len(),
            "Will failed validation; not generating"
        );
        return Err(WillError::validation(validation.errors, validation.warnings));
    }

    let mut parts: Vec<(Section, String)> = Vec::with_capacity(9);

    parts.push((Section::Opening, clauses::opening_declaration(will.testator())));
    parts.push((Section::Executors, clauses::executor_clause(will.executors())?));
    parts.push((Section::Debts, clauses::debts_clause()));

    if let Some(distribution) = distribution_section(will) {
        parts.push((Section::Distribution, distribution));
    }

    parts.push((Section::Residuary, clauses::residuary_clause(will.beneficiaries())));

    if let Some(guardians) = clauses::guardian_clause(will.guardians()) {
        parts.push((Section::Guardians, guardians));
    }

    if let Some(instructions) = will.special_instructions() {
        parts.push((
            Section::SpecialInstructions,
            clauses::special_instructions_clause(instructions),
        ));
    }

    parts.push((Section::Testimonium, clauses::testimonium_clause(ctx.today)));
    parts.push((
        Section::Attestation,
        clauses::attestation_clause(will.testator(), will.witnesses()),
    ));

    let (sections, texts): (Vec<Section>, Vec<String>) = parts.into_iter().unzip();
    let text = texts.join(SECTION_SEPARATOR);

    info!(
        sections = sections.len(),
        warnings = validation.warnings.len(),
        chars = text.len(),
        "Will assembled"
    );

    Ok(AssembledWill {
        will_id: will.id(),
        text,
        sections,
        warnings: validation.warnings,
    })
}

/// Header plus one numbered bequest per asset whose beneficiary is known
///
/// Assets left to an unknown NRIC are skipped and do not consume a number.
/// Returns `None` if no bequest renders.
fn distribution_section(will: &Will) -> Option<String> {
    let bequests: Vec<String> = will
        .assets()
        .iter()
        .filter_map(|asset| {
            will.beneficiary_by_nric(&asset.beneficiary_nric)
                .map(|beneficiary| clauses::specific_bequest(asset, beneficiary))
        })
        .enumerate()
        .map(|(i, clause)| format!("{}. {}", i + 1, clause))
        .collect();

    if bequests.is_empty() {
        return None;
    }

    Some(format!(
        "{}\n\n{}",
        clauses::distribution_header(),
        bequests.join(SECTION_SEPARATOR)
    ))
}
