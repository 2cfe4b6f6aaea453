use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use super::*;
use crate::strength::strength_report;

/// Always yields zero, so every draw picks the first candidate.
struct ZeroRng;

impl RngCore for ZeroRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        dst.fill(0);
    }
}

fn sorted(s: &str) -> Vec<char> {
    let mut chars: Vec<char> = s.chars().collect();
    chars.sort_unstable();
    chars
}

#[test]
fn rejects_lengths_below_four() {
    let mut rng = StdRng::seed_from_u64(1);
    for length in 0..MIN_GENERATED_LEN {
        assert_eq!(
            generate(&mut rng, length),
            Err(GeneratorError::TooShort {
                requested: length,
                minimum: 4
            })
        );
    }
}

#[test]
fn output_has_requested_length_and_every_class() {
    let mut rng = StdRng::seed_from_u64(7);
    for length in MIN_GENERATED_LEN..40 {
        for _ in 0..25 {
            let password = generate(&mut rng, length).expect("length is valid");
            assert_eq!(password.chars().count(), length);
            assert!(password.bytes().any(|b| LOWERCASE.contains(&b)), "{password}");
            assert!(password.bytes().any(|b| UPPERCASE.contains(&b)), "{password}");
            assert!(password.bytes().any(|b| DIGITS.contains(&b)), "{password}");
            assert!(password.bytes().any(|b| SYMBOLS.contains(&b)), "{password}");

            let report = strength_report(&password, "");
            assert!(report.digit_and_letter);
            assert!(report.has_uppercase);
            assert!(report.no_email);
            assert_eq!(report.min_length, length >= 8);
        }
    }
}

#[test]
fn never_emits_characters_outside_the_alphabet() {
    let mut rng = StdRng::seed_from_u64(99);
    let password = generate(&mut rng, 500).expect("length is valid");
    assert!(password.bytes().all(|b| CLASSES.iter().any(|class| class.contains(&b))));
    assert!(!password.contains('@'));
}

#[test]
fn same_seed_same_password() {
    let a = generate(&mut StdRng::seed_from_u64(42), 12).expect("length is valid");
    let b = generate(&mut StdRng::seed_from_u64(42), 12).expect("length is valid");
    assert_eq!(a, b);
}

#[test]
fn zero_source_draws_first_character_of_each_class() {
    let password = generate(&mut ZeroRng, 6).expect("length is valid");
    assert_eq!(sorted(&password), sorted("aA0!aa"));
}

#[test]
fn union_draw_covers_every_class() {
    let total: usize = CLASSES.iter().map(|class| class.len()).sum();
    let mut rng = StdRng::seed_from_u64(3);
    let drawn: Vec<u8> = (0..2000).map(|_| pick_from_union(&mut rng, total)).collect();
    for class in CLASSES {
        assert!(drawn.iter().any(|b| class.contains(b)));
    }
}
