//! Random password generation for the sign-up form.
//!
//! One character is drawn from each class so the result always contains a
//! lowercase letter, an uppercase letter, a digit and a symbol. The rest is
//! drawn from the union of all classes and the whole buffer is shuffled so the
//! guaranteed characters carry no positional pattern.

#[cfg(test)]
#[path = "generator_test.rs"]
mod generator_test;

use rand::Rng;
use rand::seq::SliceRandom;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!#$%^&*()_+~";
const CLASSES: [&[u8]; 4] = [LOWERCASE, UPPERCASE, DIGITS, SYMBOLS];

/// Shortest length that can hold one character of every class.
pub const MIN_GENERATED_LEN: usize = CLASSES.len();

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("password length {requested} is below the minimum of {minimum}")]
    TooShort { requested: usize, minimum: usize },
}

/// Generate a password of exactly `length` ASCII characters.
///
/// # Errors
///
/// Returns [`GeneratorError::TooShort`] when `length` is below
/// [`MIN_GENERATED_LEN`].
pub fn generate<R: Rng + ?Sized>(rng: &mut R, length: usize) -> Result<String, GeneratorError> {
    if length < MIN_GENERATED_LEN {
        return Err(GeneratorError::TooShort {
            requested: length,
            minimum: MIN_GENERATED_LEN,
        });
    }

    let mut buf: Vec<u8> = Vec::with_capacity(length);
    for class in CLASSES {
        buf.push(pick(rng, class));
    }

    let total: usize = CLASSES.iter().map(|class| class.len()).sum();
    for _ in MIN_GENERATED_LEN..length {
        buf.push(pick_from_union(rng, total));
    }

    buf.shuffle(rng);
    Ok(buf.into_iter().map(char::from).collect())
}

fn pick<R: Rng + ?Sized>(rng: &mut R, class: &[u8]) -> u8 {
    class[rng.random_range(0..class.len())]
}

// Uniform over every character of every class.
fn pick_from_union<R: Rng + ?Sized>(rng: &mut R, total: usize) -> u8 {
    let mut idx = rng.random_range(0..total);
    for class in CLASSES {
        if idx < class.len() {
            return class[idx];
        }
        idx -= class.len();
    }
    LOWERCASE[0]
}
