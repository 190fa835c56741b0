//! Known-answer vectors and input validation for the derivation engine

use hex_literal::hex;
use seedpass_hashing::HashError;
use seedpass_password::{
    CharacterClass, MIN_LENGTH, PasswordError, SeedList, derive_from_digest, derive_password,
};

fn derive(seeds: &[&str], length: usize) -> String {
    let seeds = SeedList::new(seeds.iter().copied()).expect("test seeds are valid");
    let password = derive_password(&seeds, length).expect("test length is valid");
    password.as_str().to_owned()
}

#[test]
fn test_known_answer_vectors() {
    let vectors: &[(&[&str], usize, &str)] = &[
        (&["correct", "horse", "battery"], 12, "duTV9g!MYM8b"),
        (&["correct", "horse", "battery"], 8, "d8TV9Y!M"),
        (&["correct", "horse", "battery"], 16, "dJTe9g!NYM8bMKuV"),
        (&["horse", "correct", "battery"], 12, "ozt!&5CaQRyH"),
        (&["a"], 8, "uRV494-B"),
        (&["x", "y"], 4, "0$mX"),
        (&["ab", "c"], 12, "9V#lRj#bebQk"),
        (&["a", "bc"], 12, "jJ01bIxM@jwf"),
        (&["contraseña", "ñandú"], 16, "InBa1lsOXV+p30kN"),
        (
            &["correct", "horse", "battery"],
            40,
            "d$$G9gqeYx8b-KBVT2JHGV8Me8uMK-Y!TICqeBNl",
        ),
    ];

    for &(seeds, length, expected) in vectors {
        assert_eq!(derive(seeds, length), expected, "seeds {seeds:?} at {length}");
    }
}

#[test]
fn test_derive_from_digest_matches_seed_path() {
    let digest = hex!("d3f645fd3c782d32986f5d01b99623b64de6d7fc961b3617ceebb665fb412010");
    let password = derive_from_digest(&digest, 12).expect("valid length");
    assert_eq!(password.as_str(), "duTV9g!MYM8b");
}

#[test]
fn test_repeated_calls_are_identical() {
    let first = derive(&["correct", "horse", "battery"], 12);
    let second = derive(&["correct", "horse", "battery"], 12);
    assert_eq!(first, second);
}

#[test]
fn test_single_seed_length_eight() {
    let password = derive(&["a"], 8);
    assert_eq!(password.len(), 8);
    for class in CharacterClass::ALL {
        assert!(
            password.chars().any(|c| CharacterClass::of(c) == Some(class)),
            "{class:?} missing from {password}"
        );
    }
}

#[test]
fn test_minimum_length_holds_one_of_each_class() {
    let password = derive(&["x", "y"], MIN_LENGTH);
    let mut classes: Vec<CharacterClass> = password
        .chars()
        .map(|c| CharacterClass::of(c).expect("alphabet closure"))
        .collect();
    classes.sort_by_key(|class| CharacterClass::ALL.iter().position(|c| c == class));
    assert_eq!(classes, CharacterClass::ALL);
}

#[test]
fn test_rejects_invalid_input() {
    let seeds = SeedList::new(["correct"]).expect("valid seed");
    for length in [0, 1, 3] {
        let error = derive_password(&seeds, length).expect_err("below minimum");
        assert!(error.is_invalid_input());
        assert!(matches!(
            error,
            PasswordError::LengthBelowMinimum { minimum: 4, requested } if requested == length
        ));
    }

    let error = SeedList::new(Vec::<&str>::new()).expect_err("no seeds");
    assert!(error.is_invalid_input());

    let error = SeedList::new(["correct", "   "]).expect_err("blank seed");
    assert_eq!(error.to_string(), "Invalid input: seed word 2 is blank");
}

#[test]
fn test_invalid_input_maps_to_validation_kind() {
    let error: seedpass_common::Error = PasswordError::EmptySeedList.into();
    assert_eq!(error.kind(), &seedpass_common::ErrorKind::Validation);

    let error: seedpass_common::Error = PasswordError::BlankSeed { position: 2 }.into();
    assert_eq!(error.to_string(), "Invalid input: seed word 2 is blank");

    let error: seedpass_common::Error = PasswordError::internal("boom").into();
    assert_eq!(error.kind(), &seedpass_common::ErrorKind::Internal);

    let error: seedpass_common::Error = PasswordError::from(HashError::internal("boom")).into();
    assert_eq!(error.kind(), &seedpass_common::ErrorKind::Crypto);
}

#[test]
fn test_debug_is_redacted() {
    let seeds = SeedList::new(["correct", "horse", "battery"]).expect("valid seeds");
    let password = derive_password(&seeds, 12).expect("valid length");
    let rendered = format!("{password:?}");
    assert!(!rendered.contains("duTV9g"));
    assert_eq!(rendered, "DerivedPassword(<12 chars redacted>)");
}
