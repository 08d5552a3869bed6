//! Property-Based Test Generators
//!
//! Proptest strategies for NRICs and people, and `fake`-backed helpers for
//! bulk test data.

use core_kernel::Nric;
use domain_estate::Person;
use fake::faker::address::en::{CityName, StreetName};
use fake::faker::name::en::Name;
use fake::Fake;
use proptest::prelude::*;

/// Twelve digits with a valid month (1-12) and day (1-31), undashed
pub fn nric_digits_strategy() -> impl Strategy<Value = String> {
    (0u32..100, 1u32..=12, 1u32..=31, 0u32..100, 0u32..10000).prop_map(
        |(yy, mm, dd, ll, seq)| format!("{:02}{:02}{:02}{:02}{:04}", yy, mm, dd, ll, seq),
    )
}

pub fn nric_strategy() -> impl Strategy<Value = Nric> {
    nric_digits_strategy().prop_map(|digits| Nric::parse(&digits).expect("strategy yields valid NRICs"))
}

/// NRICs of people born 1940-1995 (adults on any date this century)
pub fn adult_nric_strategy() -> impl Strategy<Value = String> {
    (40u32..=95, 1u32..=12, 1u32..=28, 0u32..100, 0u32..10000).prop_map(
        |(yy, mm, dd, ll, seq)| format!("{:02}{:02}{:02}-{:02}-{:04}", yy, mm, dd, ll, seq),
    )
}

/// Inputs that must fail to parse
pub fn malformed_nric_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9]{1,11}",
        "[0-9]{13,16}",
        "[0-9]{5}[A-Za-z][0-9]{6}",
        (0u32..100, 13u32..100, 1u32..=31)
            .prop_map(|(yy, mm, dd)| format!("{:02}{:02}{:02}101234", yy, mm, dd)),
        (0u32..100, 1u32..=12, 32u32..100)
            .prop_map(|(yy, mm, dd)| format!("{:02}{:02}{:02}101234", yy, mm, dd)),
    ]
}

pub fn adult_person_strategy() -> impl Strategy<Value = Person> {
    (adult_nric_strategy(), "[A-Z][a-z]{2,10} [A-Z][a-z]{2,10}").prop_map(|(nric, name)| {
        Person::new(name, &nric, "1 Jalan Test, Kuala Lumpur").expect("strategy yields valid people")
    })
}

/// A person with a fake name and address
pub fn fake_person(nric: &str) -> Person {
    let name: String = Name().fake();
    let street: String = StreetName().fake();
    let city: String = CityName().fake();
    Person::new(name, nric, format!("{}, {}", street, city)).expect("fake person should be valid")
}

/// `count` distinct adult NRICs, deterministic for a given seed
pub fn distinct_adult_nrics(count: usize, seed: u32) -> Vec<String> {
    (0..count)
        .map(|i| {
            let n = seed as usize * 1000 + i;
            format!("{:02}0101-10-{:04}", 50 + (n / 10000) % 40, n % 10000)
        })
        .collect()
}
