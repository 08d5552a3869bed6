//! Will Domain
//!
//! Turns a testator's wishes into the text of a Malaysian will.
//!
//! # Pipeline
//!
//! 1. Build entities ([`domain_estate`]); each checks its own fields.
//! 2. Build a [`Will`] with [`WillBuilder`]; structural invariants fail fast.
//! 3. [`Will::validate_complete`] collects every cross-entity finding.
//! 4. [`assemble`] refuses wills with hard errors, then renders the clauses
//!    in the fixed [`Section`] order.
//!
//! # Examples
//!
//! ```rust,ignore
//! use domain_will::{assemble, AssemblyContext, WillBuilder};
//!
//! let will = WillBuilder::new()
//!     .testator(testator)
//!     .add_executor(executor)
//!     .witnesses(first_witness, second_witness)
//!     .add_beneficiary(beneficiary)
//!     .build()?;
//!
//! let document = assemble(&will, &AssemblyContext::new(today))?;
//! println!("{}", document.text);
//! ```

pub mod advisory;
pub mod aggregate;
pub mod assembler;
pub mod batch;
pub mod clauses;
pub mod error;
pub mod rules;

pub use advisory::{
    AdvisoryNote, AdvisoryPort, AdvisoryService, KnowledgeBaseAdvisory, UnavailableAdvisory,
    DEFAULT_ADVISORY_TIMEOUT,
};
pub use aggregate::{Will, WillBuilder, MAX_EXECUTORS, WITNESS_COUNT};
pub use assembler::{assemble, AssembledWill, AssemblyContext, Section, SECTION_SEPARATOR};
pub use batch::{generate_batch, BatchOutcome, BatchReport, WillDraft};
pub use clauses::signing_instructions;
pub use error::{ClauseError, ErrorCategory, WillError};
pub use rules::WillRules;
