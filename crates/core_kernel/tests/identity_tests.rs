//! Tests for NRIC parsing, formatting and age derivation

use chrono::{Datelike, NaiveDate};
use core_kernel::{
    derive_age, derive_age_with, format_id, parse_id, CenturyPolicy, GenderHint, IdentityError,
    Nric,
};
use proptest::prelude::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

mod parsing {
    use super::*;

    #[test]
    fn test_parse_dashed_and_bare_forms_agree() {
        let dashed = parse_id("820202-10-2345").unwrap();
        let bare = parse_id("820202102345").unwrap();
        assert_eq!(dashed, bare);
        assert_eq!(format_id(&bare), "820202-10-2345");
    }

    #[test]
    fn test_wrong_length_reports_count() {
        assert_eq!(parse_id("820202-10-234"), Err(IdentityError::WrongLength(11)));
        assert_eq!(parse_id(""), Err(IdentityError::WrongLength(0)));
    }

    #[test]
    fn test_non_digit_rejected() {
        assert_eq!(parse_id("82020A-10-2345"), Err(IdentityError::NonDigit('A')));
    }

    #[test]
    fn test_month_and_day_bounds() {
        assert_eq!(parse_id("820002-10-2345"), Err(IdentityError::InvalidMonth(0)));
        assert_eq!(parse_id("821302-10-2345"), Err(IdentityError::InvalidMonth(13)));
        assert_eq!(parse_id("820200-10-2345"), Err(IdentityError::InvalidDay(0)));
        assert_eq!(parse_id("820232-10-2345"), Err(IdentityError::InvalidDay(32)));
    }

    #[test]
    fn test_error_messages_name_the_violation() {
        assert_eq!(
            parse_id("1234").unwrap_err().to_string(),
            "NRIC must be 12 digits, got 4"
        );
        assert_eq!(
            parse_id("821302-10-2345").unwrap_err().to_string(),
            "Invalid month in NRIC: 13"
        );
    }

    #[test]
    fn test_component_accessors() {
        let id = parse_id("780101-14-1234").unwrap();
        let parts = id.birth_date_parts();
        assert_eq!((parts.year, parts.month, parts.day), (78, 1, 1));
        assert_eq!(id.locality_code(), "14");
        assert_eq!(id.sequence(), "1234");
        assert_eq!(id.gender_hint(), GenderHint::Female);
        assert_eq!(parse_id("780101-14-1235").unwrap().gender_hint(), GenderHint::Male);
    }

    #[test]
    fn test_serde_uses_bare_digits() {
        let id = parse_id("780101-14-1234").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"780101141234\"");

        let back: Nric = serde_json::from_str("\"780101-14-1234\"").unwrap();
        assert_eq!(back, id);

        let bad: Result<Nric, _> = serde_json::from_str("\"781301-14-1234\"");
        assert!(bad.unwrap_err().to_string().contains("Invalid month"));
    }
}

mod age {
    use super::*;

    #[test]
    fn test_age_from_twentieth_century_code() {
        let id = parse_id("780101-14-1234").unwrap();
        assert_eq!(derive_age(&id, date(2026, 10, 18)), 48);
    }

    #[test]
    fn test_age_from_twenty_first_century_code() {
        let id = parse_id("100303-14-9012").unwrap();
        assert_eq!(derive_age(&id, date(2026, 10, 18)), 16);
    }

    #[test]
    fn test_birthday_not_yet_reached() {
        let id = parse_id("081119-14-1111").unwrap();
        assert_eq!(derive_age(&id, date(2026, 11, 18)), 17);
        assert_eq!(derive_age(&id, date(2026, 11, 19)), 18);
    }

    #[test]
    fn test_same_two_digit_year_as_today_is_current_century() {
        let id = parse_id("260101-14-1111").unwrap();
        assert_eq!(derive_age(&id, date(2026, 10, 18)), 0);
    }

    #[test]
    fn test_pivot_policy_changes_century() {
        let id = parse_id("200101-14-1111").unwrap();
        let today = date(2026, 10, 18);
        assert_eq!(derive_age_with(&id, today, CenturyPolicy::RelativeToToday), 6);
        assert_eq!(derive_age_with(&id, today, CenturyPolicy::Pivot(15)), 106);
    }

    #[test]
    fn test_birth_year_follows_policy() {
        let today = date(2026, 10, 18);
        let testator = parse_id("650312-14-5678").unwrap();
        let child = parse_id("200101-14-1111").unwrap();

        assert_eq!(testator.birth_year(today, CenturyPolicy::RelativeToToday), 1965);
        assert_eq!(child.birth_year(today, CenturyPolicy::RelativeToToday), 2020);
        assert_eq!(child.birth_year(today, CenturyPolicy::Pivot(15)), 1920);
        assert_eq!(
            today.year() - child.birth_year(today, CenturyPolicy::Pivot(15)),
            child.age_on(today, CenturyPolicy::Pivot(15))
        );
    }
}

proptest! {
    #[test]
    fn prop_valid_codes_parse_and_format(
        yy in 0u32..100,
        mm in 1u32..=12,
        dd in 1u32..=31,
        ll in 0u32..100,
        seq in 0u32..10000,
    ) {
        let dashed = format!("{:02}{:02}{:02}-{:02}-{:04}", yy, mm, dd, ll, seq);
        let bare = dashed.replace('-', "");

        let from_dashed = parse_id(&dashed).unwrap();
        let from_bare = parse_id(&bare).unwrap();

        prop_assert_eq!(format_id(&from_dashed), dashed.clone());
        prop_assert_eq!(format_id(&from_bare), dashed);
        prop_assert_eq!(from_dashed.as_str(), bare.as_str());
    }

    #[test]
    fn prop_wrong_length_fails(digits in "[0-9]{0,30}") {
        prop_assume!(digits.len() != 12);
        prop_assert_eq!(parse_id(&digits), Err(IdentityError::WrongLength(digits.len())));
    }

    #[test]
    fn prop_bad_month_fails(yy in 0u32..100, mm in 13u32..100, dd in 1u32..=31) {
        let raw = format!("{:02}{:02}{:02}101234", yy, mm, dd);
        prop_assert_eq!(parse_id(&raw), Err(IdentityError::InvalidMonth(mm)));
    }

    #[test]
    fn prop_bad_day_fails(yy in 0u32..100, mm in 1u32..=12, dd in 32u32..100) {
        let raw = format!("{:02}{:02}{:02}101234", yy, mm, dd);
        prop_assert_eq!(parse_id(&raw), Err(IdentityError::InvalidDay(dd)));
    }

    #[test]
    fn prop_non_digit_fails(position in 0usize..12, letter in "[a-zA-Z]") {
        let mut raw: Vec<char> = "800101101234".chars().collect();
        let bad = letter.chars().next().unwrap();
        raw[position] = bad;
        let raw: String = raw.into_iter().collect();
        prop_assert_eq!(parse_id(&raw), Err(IdentityError::NonDigit(bad)));
    }
}
