//! Integration tests for document assembly

use domain_estate::DistributionType;
use domain_will::{assemble, AssemblyContext, Section, Will, WillError, SECTION_SEPARATOR};
use test_utils::*;

fn ctx() -> AssemblyContext {
    TemporalFixtures::context()
}

mod ordering {
    use super::*;

    #[test]
    fn test_minimal_will_sections() {
        let document = assemble(&WillFixtures::simple(), &ctx()).unwrap();
        assert_eq!(
            document.sections,
            vec![
                Section::Opening,
                Section::Executors,
                Section::Debts,
                Section::Residuary,
                Section::Testimonium,
                Section::Attestation,
            ]
        );
        assert!(!document.text.contains("DISTRIBUTION OF ASSETS"));
    }

    #[test]
    fn test_full_will_emits_every_section_in_order() {
        let document = assemble(&WillFixtures::family(), &ctx()).unwrap();

        assert_eq!(document.sections.len(), 9);
        assert_sections_in_order(&document);
        assert_text_order(
            &document.text,
            &[
                "LAST WILL AND TESTAMENT",
                "EXECUTOR APPOINTMENT",
                "PAYMENT OF DEBTS AND EXPENSES",
                "DISTRIBUTION OF ASSETS",
                "1. I give, devise and bequeath my property",
                "2. I give all my bank accounts",
                "3. I have nominated beneficiaries for my EPF/KWSP",
                "RESIDUARY ESTATE",
                "GUARDIAN APPOINTMENT",
                "SPECIAL INSTRUCTIONS",
                "I wish to be cremated",
                "TESTIMONIUM",
                "WITNESS 1:",
                "WITNESS 2:",
            ],
        );
    }

    #[test]
    fn test_sections_joined_with_separator() {
        let document = assemble(&WillFixtures::simple(), &ctx()).unwrap();
        assert!(document
            .text
            .contains(&format!("{}EXECUTOR APPOINTMENT", SECTION_SEPARATOR)));
        assert!(document
            .text
            .contains(&format!("{}RESIDUARY ESTATE", SECTION_SEPARATOR)));
    }

    #[test]
    fn test_guardians_emitted_whenever_named() {
        let will = TestWillBuilder::new()
            .with_guardians(vec![PersonFixtures::guardian()])
            .build_valid();
        let document = assemble(&will, &ctx()).unwrap();
        assert!(document.has_section(Section::Guardians));
        assert!(!will.has_minor_children());
    }
}

mod determinism {
    use super::*;

    #[test]
    fn test_assembling_twice_is_byte_identical() {
        let will = WillFixtures::family();
        let first = assemble(&will, &ctx()).unwrap();
        let second = assemble(&will, &ctx()).unwrap();
        assert_eq!(first.text, second.text);
        assert_eq!(first, second);
    }

    #[test]
    fn test_testimonium_uses_injected_date() {
        let document = assemble(&WillFixtures::simple(), &ctx()).unwrap();
        assert!(document
            .text
            .contains("set my hand and seal this 18th day of October 2026."));
    }
}

mod residuary {
    use super::*;

    #[test]
    fn test_single_beneficiary_without_assets_gets_absolute_gift() {
        let document = assemble(&WillFixtures::simple(), &ctx()).unwrap();
        assert!(document
            .text
            .contains("to my wife, LEE MEI FONG (NRIC NO. 680704-10-5242), absolutely."));
    }

    #[test]
    fn test_two_untagged_beneficiaries_share_per_stirpes() {
        let will = TestWillBuilder::new()
            .add_beneficiary(BeneficiaryFixtures::son())
            .build_valid();
        let document = assemble(&will, &ctx()).unwrap();
        assert_contains_all(
            &document.text,
            &[
                "in equal shares absolutely, per stirpes",
                "   - LEE MEI FONG (NRIC NO. 680704-10-5242)",
                "   - TAN WEI JIE (NRIC NO. 900215-14-5673)",
            ],
        );
    }

    #[test]
    fn test_tagged_residuary_beneficiary_only() {
        let will = TestWillBuilder::new()
            .add_beneficiary(BeneficiaryFixtures::of(
                PersonFixtures::son(),
                DistributionType::Residuary,
            ))
            .add_asset(AssetFixtures::house(NricFixtures::SPOUSE))
            .build_valid();
        let document = assemble(&will, &ctx()).unwrap();
        assert!(document
            .text
            .contains("I give all the rest, residue, and remainder of my estate to my son, TAN WEI JIE"));
    }
}

mod distribution {
    use super::*;

    #[test]
    fn test_unmatched_asset_skipped_and_numbering_stays_consecutive() {
        let will = TestWillBuilder::new()
            .add_asset(AssetFixtures::house(NricFixtures::CONFLICT))
            .add_asset(AssetFixtures::bank_account(NricFixtures::SPOUSE))
            .build_valid();
        let document = assemble(&will, &ctx()).unwrap();

        assert!(document.text.contains("1. I give all my bank accounts"));
        assert!(!document.text.contains("Title No."));
        assert!(document
            .warnings
            .iter()
            .any(|w| w.contains("not a named beneficiary")));
    }

    #[test]
    fn test_only_unmatched_assets_means_no_distribution_section() {
        let will = TestWillBuilder::new()
            .add_asset(AssetFixtures::vehicle(NricFixtures::CONFLICT))
            .build_valid();
        let document = assemble(&will, &ctx()).unwrap();
        assert!(!document.has_section(Section::Distribution));
        assert!(!document.text.contains("DISTRIBUTION OF ASSETS"));
    }
}

mod refusal {
    use super::*;

    #[test]
    fn test_hard_errors_block_with_full_message_list() {
        let will = TestWillBuilder::new()
            .with_testator(TestatorFixtures::underage())
            .add_asset(AssetFixtures::house_without_title(NricFixtures::SPOUSE))
            .build_valid();

        let err = assemble(&will, &ctx()).unwrap_err();
        assert_eq!(err.category().code(), "VALIDATION_ERROR");

        let (errors, warnings) = expect_validation_error(err);
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("Current age: 16"));
        assert!(errors[1].contains("title_number"));
        assert!(!warnings.is_empty());
    }

    #[test]
    fn test_deserialized_will_with_conflicted_witness_refused() {
        let mut json = serde_json::to_value(WillFixtures::simple()).unwrap();
        json["witnesses"][1] = serde_json::to_value(PersonFixtures::spouse()).unwrap();
        let will: Will = serde_json::from_value(json).unwrap();

        let err = assemble(&will, &ctx()).unwrap_err();
        assert!(matches!(err, WillError::WitnessIsBeneficiary { ref name, .. } if name == "Lee Mei Fong"));
    }

    #[test]
    fn test_warnings_returned_with_success() {
        let will = TestWillBuilder::new()
            .with_testator(TestatorFixtures::muslim())
            .build_valid();
        let document = assemble(&will, &ctx()).unwrap();
        assert!(document.warnings.iter().any(|w| w.contains("Wasiat")));
    }
}
