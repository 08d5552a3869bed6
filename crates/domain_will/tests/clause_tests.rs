//! Integration tests for clause generators
//!
//! Generators are pure, so these tests call them directly with fixtures.

use domain_estate::{Asset, AssetType, DistributionType};
use domain_will::clauses::*;
use domain_will::ClauseError;
use proptest::prelude::*;
use test_utils::*;

mod executors {
    use super::*;

    #[test]
    fn test_fallbacks_listed_in_order() {
        let clause = executor_clause(&[
            PersonFixtures::spouse(),
            PersonFixtures::son(),
            PersonFixtures::guardian(),
        ])
        .unwrap();

        assert_text_order(
            &clause,
            &[
                "EXECUTOR APPOINTMENT",
                "I APPOINT my wife, LEE MEI FONG (NRIC NO. 680704-10-5242)",
                "IF my said wife shall predecease me or be unwilling or unable to act",
                "1. TAN WEI JIE (NRIC NO. 900215-14-5673)",
                "2. LEE MEI LING (NRIC NO. 700909-10-5118)",
            ],
        );
    }

    #[test]
    fn test_fallback_wording_without_relationship() {
        let clause = executor_clause(&[
            PersonFixtures::witness_one(),
            PersonFixtures::witness_two(),
        ])
        .unwrap();
        assert_contains_all(
            &clause,
            &["I APPOINT my trusted person, RAJESH A/L KUMAR", "IF my said Executor shall"],
        );
    }

    #[test]
    fn test_zero_and_five_executors_fail() {
        assert_eq!(executor_clause(&[]), Err(ClauseError::NoExecutors));

        let five: Vec<_> = (1..=5)
            .map(|i| PersonFixtures::person(&format!("E{}", i), &format!("800101-10-{:04}", i)))
            .collect();
        let err = executor_clause(&five).unwrap_err();
        assert_eq!(err, ClauseError::TooManyExecutors(5));
        assert_eq!(
            domain_will::WillError::from(err).category().code(),
            "CLAUSE_GENERATION_ERROR"
        );
    }

    proptest! {
        #[test]
        fn prop_one_to_four_executors_succeed(
            executors in proptest::collection::vec(adult_person_strategy(), 1..=4)
        ) {
            let clause = executor_clause(&executors).unwrap();
            let alternates = executors.len() - 1;

            prop_assert_eq!(clause.contains("unwilling or unable to act"), alternates > 0);
            for i in 1..=alternates {
                let line = format!("\n{}. {}", i, executors[i].display_name());
                prop_assert!(clause.contains(&line));
            }
        }
    }
}

mod bequests {
    use super::*;

    fn spouse() -> domain_estate::Beneficiary {
        BeneficiaryFixtures::spouse()
    }

    const TO_SPOUSE: &str = "to my wife, LEE MEI FONG (NRIC NO. 680704-10-5242)";

    #[test]
    fn test_real_property_uses_address_and_title() {
        let text = specific_bequest(&AssetFixtures::house(NricFixtures::SPOUSE), &spouse());
        assert_contains_all(
            &text,
            &[
                "my property known as 12 Jalan Mawar, Taman Melawati, 53100 Kuala Lumpur",
                "held under Title No. GRN 12345 Lot 678",
                TO_SPOUSE,
                "absolutely.",
            ],
        );
    }

    #[test]
    fn test_bank_and_vehicle() {
        let bank = specific_bequest(&AssetFixtures::bank_account(NricFixtures::SPOUSE), &spouse());
        assert!(bank.contains("cash holdings with Maybank"));

        let car = specific_bequest(&AssetFixtures::vehicle(NricFixtures::SPOUSE), &spouse());
        assert!(car.contains("registration number WXY 1234 (Toyota Vios 2019)"));
    }

    #[test]
    fn test_epf_always_carries_nomination_caveat() {
        let text = specific_bequest(&AssetFixtures::epf(NricFixtures::SPOUSE), &spouse());
        assert_text_order(
            &text,
            &["Employees Provident Fund Board", TO_SPOUSE, "EPF requires separate nomination"],
        );
    }

    #[test]
    fn test_insurance_carries_nomination_caveat() {
        let asset = Asset::new(
            AssetType::Insurance,
            "my Great Eastern life policy",
            NricFixtures::parse(NricFixtures::SPOUSE),
        )
        .unwrap()
        .with_detail("policy_number", "GE-0099");
        let text = specific_bequest(&asset, &spouse());
        assert_contains_all(&text, &["(Policy No. GE-0099)", "nominee registered with the insurer"]);
    }

    #[test]
    fn test_business_investment_and_digital() {
        let to = NricFixtures::parse(NricFixtures::SPOUSE);

        let business = Asset::new(AssetType::Business, "Trading company", to.clone())
            .unwrap()
            .with_details([
                ("company_name", "Tan Trading Sdn Bhd"),
                ("registration_number", "201901012345"),
                ("ownership_percentage", "60%"),
            ]);
        assert!(specific_bequest(&business, &spouse())
            .contains("Tan Trading Sdn Bhd (Company No. 201901012345) comprising 60% shareholding"));

        let investment = Asset::new(AssetType::Investment, "Unit trusts", to.clone())
            .unwrap()
            .with_details([("investment_type", "ASB units"), ("institution", "PNB")]);
        assert!(specific_bequest(&investment, &spouse()).contains("all my ASB units held with PNB"));

        let digital = Asset::new(AssetType::Digital, "crypto wallet", to)
            .unwrap()
            .with_details([("asset_description", "my crypto wallet"), ("access_location", "my safe")]);
        assert!(specific_bequest(&digital, &spouse())
            .contains("Access credentials are stored at my safe."));
    }

    #[test]
    fn test_unmapped_types_use_generic_template() {
        let text = specific_bequest(&AssetFixtures::jewelry(NricFixtures::SPOUSE), &spouse());
        assert_eq!(text, format!("I give my gold jewellery {}, absolutely.", TO_SPOUSE));
    }

    #[test]
    fn test_missing_optional_details_use_placeholders() {
        let asset = Asset::new(
            AssetType::RealProperty,
            "Shophouse in Ipoh",
            NricFixtures::parse(NricFixtures::SPOUSE),
        )
        .unwrap();
        let text = specific_bequest(&asset, &spouse());
        assert!(text.contains("known as Shophouse in Ipoh held under Title No. [Title Number]"));
    }
}

mod residuary {
    use super::*;

    #[test]
    fn test_single_beneficiary_takes_absolutely() {
        let text = residuary_clause(&[BeneficiaryFixtures::spouse()]);
        assert_text_order(
            &text,
            &[
                "RESIDUARY ESTATE",
                "including any lapsed or void gifts",
                "to my wife, LEE MEI FONG (NRIC NO. 680704-10-5242), absolutely.",
            ],
        );
    }

    #[test]
    fn test_untagged_beneficiaries_share_equally_per_stirpes() {
        let text = residuary_clause(&[BeneficiaryFixtures::spouse(), BeneficiaryFixtures::son()]);
        assert_contains_all(
            &text,
            &[
                "in equal shares absolutely, per stirpes",
                "   - LEE MEI FONG (NRIC NO. 680704-10-5242)",
                "   - TAN WEI JIE (NRIC NO. 900215-14-5673)",
            ],
        );
    }

    #[test]
    fn test_single_tagged_beneficiary_takes_residue() {
        let text = residuary_clause(&[
            BeneficiaryFixtures::spouse(),
            BeneficiaryFixtures::of(PersonFixtures::son(), DistributionType::Residuary),
        ]);
        assert!(text.contains("remainder of my estate to my son, TAN WEI JIE"));
        assert!(!text.contains("LEE MEI FONG"));
    }

    #[test]
    fn test_several_tagged_beneficiaries_share_equally() {
        let text = residuary_clause(&[
            BeneficiaryFixtures::of(PersonFixtures::spouse(), DistributionType::Residuary),
            BeneficiaryFixtures::of(PersonFixtures::son(), DistributionType::Residuary),
            BeneficiaryFixtures::daughter(),
        ]);
        assert_contains_all(
            &text,
            &["to the following beneficiaries in equal shares:", "LEE MEI FONG", "TAN WEI JIE"],
        );
        assert!(!text.contains("TAN XIN YI"));
        assert!(!text.contains("per stirpes"));
    }
}

mod other_sections {
    use super::*;

    #[test]
    fn test_opening_declaration() {
        let text = opening_declaration(&TestatorFixtures::adult());
        assert_text_order(
            &text,
            &[
                "LAST WILL AND TESTAMENT",
                "I, TAN AH KOW (NRIC NO. 650312-10-5111) of No. 8, Jalan Tun Razak",
                "DO HEREBY REVOKE all former testamentary dispositions",
            ],
        );
    }

    #[test]
    fn test_guardian_primary_and_fallback() {
        let text = guardian_clause(&[PersonFixtures::guardian(), PersonFixtures::backup_guardian()])
            .unwrap();
        assert_text_order(
            &text,
            &[
                "I APPOINT LEE MEI LING (NRIC NO. 700909-10-5118)",
                "IF my said primary guardian is unwilling or unable to act, THEN I APPOINT ONG KAH SENG",
            ],
        );

        let single = guardian_clause(&[PersonFixtures::guardian()]).unwrap();
        assert!(!single.contains("primary guardian"));
    }

    #[test]
    fn test_attestation_names_testator_and_both_witnesses() {
        let witnesses = [PersonFixtures::witness_one(), PersonFixtures::witness_two()];
        let text = attestation_clause(&TestatorFixtures::adult(), &witnesses);

        assert_eq!(text.matches("________________________________________").count(), 3);
        assert_text_order(
            &text,
            &[
                "Signature of Testator\nTAN AH KOW\nNRIC NO. 650312-10-5111",
                "in the presence of each other",
                "WITNESS 1:",
                "RAJESH A/L KUMAR\nNRIC NO. 770808-08-5531\nAddress: 22 Jalan Gasing",
                "WITNESS 2:",
                "NURUL HUDA BINTI HASSAN",
            ],
        );
    }

    #[test]
    fn test_debts_clause_is_fixed() {
        assert_eq!(debts_clause(), debts_clause());
        assert!(debts_clause().contains("funeral and testamentary expenses"));
    }

    #[test]
    fn test_signing_instructions_cite_section_5() {
        assert!(signing_instructions().contains("Wills Act 1959, Section 5"));
    }
}
