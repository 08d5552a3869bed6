//! Test Data Builders
//!
//! Builders with valid defaults, so a test only states the parts of a will
//! it cares about.

use domain_estate::{Asset, Beneficiary, Person, Testator};
use domain_will::{Will, WillBuilder, WillError};

use crate::fixtures::{BeneficiaryFixtures, PersonFixtures, TestatorFixtures};

/// Builder for wills that start out valid
///
/// Defaults: adult Buddhist testator, the spouse as sole executor and sole
/// beneficiary, two unrelated adult witnesses, no assets or guardians.
pub struct TestWillBuilder {
    testator: Testator,
    executors: Vec<Person>,
    witnesses: Vec<Person>,
    beneficiaries: Vec<Beneficiary>,
    assets: Vec<Asset>,
    guardians: Vec<Person>,
    has_minor_children: bool,
    special_instructions: Option<String>,
}

impl Default for TestWillBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWillBuilder {
    pub fn new() -> Self {
        Self {
            testator: TestatorFixtures::adult(),
            executors: vec![PersonFixtures::spouse()],
            witnesses: vec![PersonFixtures::witness_one(), PersonFixtures::witness_two()],
            beneficiaries: vec![BeneficiaryFixtures::spouse()],
            assets: Vec::new(),
            guardians: Vec::new(),
            has_minor_children: false,
            special_instructions: None,
        }
    }

    pub fn with_testator(mut self, testator: Testator) -> Self {
        self.testator = testator;
        self
    }

    pub fn with_executors(mut self, executors: Vec<Person>) -> Self {
        self.executors = executors;
        self
    }

    pub fn with_witnesses(mut self, witnesses: Vec<Person>) -> Self {
        self.witnesses = witnesses;
        self
    }

    pub fn with_beneficiaries(mut self, beneficiaries: Vec<Beneficiary>) -> Self {
        self.beneficiaries = beneficiaries;
        self
    }

    pub fn add_beneficiary(mut self, beneficiary: Beneficiary) -> Self {
        self.beneficiaries.push(beneficiary);
        self
    }

    pub fn with_assets(mut self, assets: Vec<Asset>) -> Self {
        self.assets = assets;
        self
    }

    pub fn add_asset(mut self, asset: Asset) -> Self {
        self.assets.push(asset);
        self
    }

    pub fn with_guardians(mut self, guardians: Vec<Person>) -> Self {
        self.guardians = guardians;
        self
    }

    pub fn with_minor_children(mut self, has_minor_children: bool) -> Self {
        self.has_minor_children = has_minor_children;
        self
    }

    pub fn with_special_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.special_instructions = Some(instructions.into());
        self
    }

    /// Builds through [`WillBuilder`], returning its result
    pub fn build(self) -> Result<Will, WillError> {
        let mut builder = WillBuilder::new()
            .testator(self.testator)
            .executors(self.executors)
            .beneficiaries(self.beneficiaries)
            .assets(self.assets)
            .guardians(self.guardians)
            .has_minor_children(self.has_minor_children);

        for witness in self.witnesses {
            builder = builder.add_witness(witness);
        }
        if let Some(instructions) = self.special_instructions {
            builder = builder.special_instructions(instructions);
        }

        builder.build()
    }

    /// Builds, panicking if construction fails
    pub fn build_valid(self) -> Will {
        self.build().expect("test will should build")
    }
}
