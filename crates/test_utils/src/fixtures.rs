//! Pre-built Test Fixtures
//!
//! Every fixture uses a fixed NRIC so tests can refer to people by ID. Ages
//! are stated relative to [`TemporalFixtures::today`] (18 October 2026).

use chrono::NaiveDate;
use core_kernel::{FixedClock, Nric};
use domain_estate::{Asset, AssetType, Beneficiary, DistributionType, Person, Testator};
use domain_will::{AssemblyContext, Will, WillBuilder};
use rust_decimal_macros::dec;

/// Fixture for dates
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// The pinned "today" every fixture is evaluated against
    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).expect("valid fixture date")
    }

    pub fn clock() -> FixedClock {
        FixedClock(Self::today())
    }

    pub fn context() -> AssemblyContext {
        AssemblyContext::new(Self::today())
    }
}

/// Fixture NRICs
pub struct NricFixtures;

impl NricFixtures {
    /// Testator, aged 61
    pub const TESTATOR: &'static str = "650312-10-5111";
    /// Spouse, executor and beneficiary, aged 58
    pub const SPOUSE: &'static str = "680704-10-5242";
    /// Adult son, alternate executor and beneficiary, aged 36
    pub const SON: &'static str = "900215-14-5673";
    /// Minor daughter, aged 11
    pub const DAUGHTER: &'static str = "150505-10-1234";
    pub const WITNESS_ONE: &'static str = "770808-08-5531";
    pub const WITNESS_TWO: &'static str = "830101-01-5022";
    pub const GUARDIAN: &'static str = "700909-10-5118";
    pub const BACKUP_GUARDIAN: &'static str = "720202-10-5336";
    /// Aged 16
    pub const UNDERAGE: &'static str = "100303-14-9012";
    /// Aged 19
    pub const NINETEEN: &'static str = "070101-14-5677";
    /// Beneficiary ID used in witness-conflict scenarios
    pub const CONFLICT: &'static str = "820202-10-2345";

    pub fn parse(raw: &str) -> Nric {
        Nric::parse(raw).expect("valid fixture NRIC")
    }
}

/// Fixture for people in the roles a will names
pub struct PersonFixtures;

impl PersonFixtures {
    pub fn person(name: &str, nric: &str) -> Person {
        Person::new(name, nric, "No. 8, Jalan Tun Razak, 50400 Kuala Lumpur")
            .expect("valid fixture person")
    }

    pub fn related(name: &str, nric: &str, relationship: &str) -> Person {
        Self::person(name, nric).with_relationship(relationship)
    }

    pub fn testator_person() -> Person {
        Self::person("Tan Ah Kow", NricFixtures::TESTATOR)
    }

    pub fn spouse() -> Person {
        Self::related("Lee Mei Fong", NricFixtures::SPOUSE, "wife")
    }

    pub fn son() -> Person {
        Self::related("Tan Wei Jie", NricFixtures::SON, "son")
    }

    pub fn daughter() -> Person {
        Self::related("Tan Xin Yi", NricFixtures::DAUGHTER, "daughter")
    }

    pub fn witness_one() -> Person {
        Person::new(
            "Rajesh a/l Kumar",
            NricFixtures::WITNESS_ONE,
            "22 Jalan Gasing, 46000 Petaling Jaya",
        )
        .expect("valid fixture person")
    }

    pub fn witness_two() -> Person {
        Person::new(
            "Nurul Huda binti Hassan",
            NricFixtures::WITNESS_TWO,
            "5 Lorong Bunga Raya, 10400 George Town",
        )
        .expect("valid fixture person")
    }

    pub fn guardian() -> Person {
        Self::related("Lee Mei Ling", NricFixtures::GUARDIAN, "sister-in-law")
    }

    pub fn backup_guardian() -> Person {
        Self::related("Ong Kah Seng", NricFixtures::BACKUP_GUARDIAN, "friend")
    }
}

/// Fixture for testators
pub struct TestatorFixtures;

impl TestatorFixtures {
    pub fn adult() -> Testator {
        Testator::new(PersonFixtures::testator_person(), "Buddhist", "Married")
            .expect("valid fixture testator")
    }

    pub fn muslim() -> Testator {
        Testator::new(
            PersonFixtures::person("Ahmad bin Abdullah", NricFixtures::TESTATOR),
            "Islam",
            "Married",
        )
        .expect("valid fixture testator")
    }

    /// Sixteen years old
    pub fn underage() -> Testator {
        Testator::new(
            PersonFixtures::person("Young Testator", NricFixtures::UNDERAGE),
            "Christian",
            "Single",
        )
        .expect("valid fixture testator")
    }

    /// Nineteen years old: valid, with the Sabah note
    pub fn nineteen() -> Testator {
        Testator::new(
            PersonFixtures::person("Junior Testator", NricFixtures::NINETEEN),
            "Hindu",
            "Single",
        )
        .expect("valid fixture testator")
    }
}

/// Fixture for beneficiaries
pub struct BeneficiaryFixtures;

impl BeneficiaryFixtures {
    pub fn of(person: Person, distribution_type: DistributionType) -> Beneficiary {
        Beneficiary::new(person, distribution_type, TemporalFixtures::today())
    }

    pub fn spouse() -> Beneficiary {
        Self::of(PersonFixtures::spouse(), DistributionType::Equal)
    }

    pub fn son() -> Beneficiary {
        Self::of(PersonFixtures::son(), DistributionType::Equal)
    }

    /// A minor
    pub fn daughter() -> Beneficiary {
        Self::of(PersonFixtures::daughter(), DistributionType::Equal)
    }

    pub fn percentage(person: Person, share: &str) -> Beneficiary {
        Self::of(person, DistributionType::Percentage).with_value(share)
    }
}

/// Fixture for assets, all complete unless noted
pub struct AssetFixtures;

impl AssetFixtures {
    pub fn house(to: &str) -> Asset {
        Asset::new(
            AssetType::RealProperty,
            "Double-storey terrace house",
            NricFixtures::parse(to),
        )
        .expect("valid fixture asset")
        .with_details([
            ("address", "12 Jalan Mawar, Taman Melawati, 53100 Kuala Lumpur"),
            ("title_number", "GRN 12345 Lot 678"),
            ("ownership_type", "freehold"),
        ])
        .with_value(dec!(850000))
    }

    /// Real property without a title number
    pub fn house_without_title(to: &str) -> Asset {
        let mut asset = Self::house(to);
        asset.details.remove("title_number");
        asset
    }

    pub fn bank_account(to: &str) -> Asset {
        Asset::new(AssetType::BankAccount, "Savings account", NricFixtures::parse(to))
            .expect("valid fixture asset")
            .with_details([("bank_name", "Maybank"), ("account_type", "Savings")])
            .with_value(dec!(120000))
    }

    pub fn epf(to: &str) -> Asset {
        Asset::new(AssetType::EpfKwsp, "EPF savings", NricFixtures::parse(to))
            .expect("valid fixture asset")
            .with_detail("account_number", "12345678")
    }

    pub fn vehicle(to: &str) -> Asset {
        Asset::new(AssetType::Vehicle, "Toyota Vios", NricFixtures::parse(to))
            .expect("valid fixture asset")
            .with_details([("registration_number", "WXY 1234"), ("make_model", "Toyota Vios 2019")])
            .with_value(dec!(45000))
    }

    pub fn jewelry(to: &str) -> Asset {
        Asset::new(AssetType::Jewelry, "my gold jewellery", NricFixtures::parse(to))
            .expect("valid fixture asset")
    }
}

/// Fixture for whole wills
pub struct WillFixtures;

impl WillFixtures {
    /// One executor, two witnesses, one beneficiary, no assets
    pub fn simple() -> Will {
        WillBuilder::new()
            .testator(TestatorFixtures::adult())
            .add_executor(PersonFixtures::spouse())
            .witnesses(PersonFixtures::witness_one(), PersonFixtures::witness_two())
            .add_beneficiary(BeneficiaryFixtures::spouse())
            .build()
            .expect("valid fixture will")
    }

    /// Two executors, three beneficiaries (one minor), assets and guardians
    pub fn family() -> Will {
        WillBuilder::new()
            .testator(TestatorFixtures::adult())
            .add_executor(PersonFixtures::spouse())
            .add_executor(PersonFixtures::son())
            .witnesses(PersonFixtures::witness_one(), PersonFixtures::witness_two())
            .add_beneficiary(BeneficiaryFixtures::spouse())
            .add_beneficiary(BeneficiaryFixtures::son())
            .add_beneficiary(BeneficiaryFixtures::daughter())
            .add_asset(AssetFixtures::house(NricFixtures::SPOUSE))
            .add_asset(AssetFixtures::bank_account(NricFixtures::SON))
            .add_asset(AssetFixtures::epf(NricFixtures::SPOUSE))
            .has_minor_children(true)
            .add_guardian(PersonFixtures::guardian())
            .add_guardian(PersonFixtures::backup_guardian())
            .special_instructions("I wish to be cremated and my ashes scattered at sea.")
            .build()
            .expect("valid fixture will")
    }
}
