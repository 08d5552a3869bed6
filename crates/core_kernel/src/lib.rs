//! Core Kernel - Foundational types for the will generation system
//!
//! This crate provides the building blocks shared by every domain crate:
//! - The Malaysian NRIC identity value type with parsing and age derivation
//! - Temporal helpers (clocks, century inference, legal date rendering)
//! - Request identifiers and the port seam for external collaborators

pub mod identity;
pub mod temporal;
pub mod identifiers;
pub mod ports;
pub mod error;

pub use identity::{Nric, IdentityError, BirthDateParts, GenderHint, parse_id, format_id, derive_age, derive_age_with};
pub use temporal::{CenturyPolicy, Clock, SystemClock, FixedClock, Timezone, format_legal_date};
pub use identifiers::{WillId, BatchId};
pub use ports::{PortError, DomainPort, HealthCheckable, HealthCheckResult, AdapterHealth};
pub use error::CoreError;
