//! Estate Domain
//!
//! The entities a will is built from. Every entity validates its own fields
//! when constructed and exposes pure queries; nothing here looks at a sibling
//! entity. Cross-entity rules belong to the will aggregate.
//!
//! - [`Person`]: name, NRIC and address. Executors, witnesses and guardians
//!   are plain `Person` records; their role is the list they sit in.
//! - [`Testator`]: the person making the will, with religion and marital status
//! - [`Beneficiary`]: a person receiving part of the estate
//! - [`Asset`]: a typed asset with type-specific details
//!
//! # Examples
//!
//! ```rust
//! use chrono::NaiveDate;
//! use domain_estate::{Person, Testator};
//!
//! let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
//! let person = Person::new("Ahmad bin Abdullah", "750615-14-5123", "12 Jalan Ampang, KL").unwrap();
//! let testator = Testator::new(person, "Buddhist", "Married").unwrap();
//!
//! assert!(testator.check_age(today).ok);
//! ```

pub mod asset;
pub mod beneficiary;
pub mod error;
pub mod person;
pub mod testator;
pub mod validation;

pub use asset::{Asset, AssetProfile, AssetType, BequestTemplate};
pub use beneficiary::{Beneficiary, DistributionType};
pub use error::EstateError;
pub use person::Person;
pub use testator::{AgeCheck, Testator, MINIMUM_TESTATOR_AGE, SABAH_MINIMUM_AGE, SYARIAH_ADVISORY};
pub use validation::{EstateValidator, ValidationResult};
