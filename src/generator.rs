//! Password generation and strength scoring.
//!
//! Generation guarantees that every active character class is represented
//! (mandatory-class seeding) and that both the random fill and the final
//! permutation come from a cryptographically secure, unbiased source.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::{Error, Result};

/// Lowercase class.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
/// Uppercase class.
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Digit class.
pub const DIGITS: &str = "0123456789";
/// Special (punctuation/symbol) class.
pub const SPECIAL: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Hard lower bound on any password length.
pub const MIN_LENGTH: usize = 4;
/// Hard upper bound on any password length.
pub const MAX_LENGTH: usize = 128;

const DEFAULT_MIN_LENGTH: usize = 8;
const DEFAULT_MAX_LENGTH: usize = 16;

/// Configurable password generator.
///
/// Holds only the length bounds; every call draws fresh randomness from the
/// process CSPRNG.
#[derive(Debug, Clone)]
pub struct Generator {
    min_length: usize,
    max_length: usize,
}

impl Default for Generator {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

impl Generator {
    /// Creates a generator with the given length bounds.
    ///
    /// Fails with [`Error::InvalidConfiguration`] unless
    /// `4 <= min_length <= max_length <= 128`.
    pub fn new(min_length: usize, max_length: usize) -> Result<Self> {
        validate_bounds(min_length, max_length)?;
        Ok(Self {
            min_length,
            max_length,
        })
    }

    /// Current minimum generated length.
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Current maximum generated length.
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Updates the minimum length, leaving the configuration unchanged on
    /// failure.
    pub fn set_min_length(&mut self, min_length: usize) -> Result<()> {
        validate_bounds(min_length, self.max_length)?;
        self.min_length = min_length;
        Ok(())
    }

    /// Updates the maximum length, leaving the configuration unchanged on
    /// failure.
    pub fn set_max_length(&mut self, max_length: usize) -> Result<()> {
        validate_bounds(self.min_length, max_length)?;
        self.max_length = max_length;
        Ok(())
    }

    /// Generates a password whose length is drawn uniformly from
    /// `[min_length, max_length]`.
    ///
    /// The result is returned and never logged or echoed elsewhere.
    pub fn generate(&self, include_special: bool) -> String {
        let mut rng = rand::rng();
        let length = rng.random_range(self.min_length..=self.max_length);
        fill(&mut rng, length, include_special)
    }

    /// Generates a password of exactly `length` characters.
    ///
    /// Fails with [`Error::InvalidLength`] unless `4 <= length <= 128`.
    /// Since the smallest accepted length equals the largest mandatory class
    /// count, seeded characters never overflow the requested length.
    pub fn generate_with_length(&self, length: usize, include_special: bool) -> Result<String> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            return Err(Error::InvalidLength(length));
        }
        let mut rng = rand::rng();
        Ok(fill(&mut rng, length, include_special))
    }
}

fn validate_bounds(min_length: usize, max_length: usize) -> Result<()> {
    if min_length < MIN_LENGTH {
        return Err(Error::InvalidConfiguration(format!(
            "minimum length must be at least {MIN_LENGTH} characters"
        )));
    }
    if max_length < min_length {
        return Err(Error::InvalidConfiguration(
            "maximum length cannot be less than minimum length".to_string(),
        ));
    }
    if max_length > MAX_LENGTH {
        return Err(Error::InvalidConfiguration(format!(
            "maximum length cannot exceed {MAX_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Builds the password buffer: one seeded character per active class, uniform
/// fill for the remainder, then a Fisher-Yates shuffle so the seeded
/// characters are not positionally predictable.
fn fill(rng: &mut impl Rng, length: usize, include_special: bool) -> String {
    let mut chars = Vec::with_capacity(length);
    chars.push(pick(rng, LOWERCASE.as_bytes()));
    chars.push(pick(rng, UPPERCASE.as_bytes()));
    chars.push(pick(rng, DIGITS.as_bytes()));
    if include_special {
        chars.push(pick(rng, SPECIAL.as_bytes()));
    }

    let alphabet = active_alphabet(include_special);
    while chars.len() < length {
        chars.push(pick(rng, &alphabet));
    }

    chars.shuffle(rng);
    chars.into_iter().collect()
}

/// The union of character classes selected for one generation call.
fn active_alphabet(include_special: bool) -> Vec<u8> {
    let mut alphabet = Vec::with_capacity(LOWERCASE.len() + UPPERCASE.len() + DIGITS.len() + SPECIAL.len());
    alphabet.extend_from_slice(LOWERCASE.as_bytes());
    alphabet.extend_from_slice(UPPERCASE.as_bytes());
    alphabet.extend_from_slice(DIGITS.as_bytes());
    if include_special {
        alphabet.extend_from_slice(SPECIAL.as_bytes());
    }
    alphabet
}

/// Uniform draw from an ASCII alphabet. `random_range` rejects modulo bias.
fn pick(rng: &mut impl Rng, alphabet: &[u8]) -> char {
    alphabet[rng.random_range(0..alphabet.len())] as char
}

/// Scores a password from 0 to 100.
///
/// Pure function, callable on arbitrary strings: up to 30 points for length
/// (8/12/16 thresholds), 15 per non-special class present, 25 for any
/// special character. Empty input scores 0.
pub fn strength(password: &str) -> u8 {
    if password.is_empty() {
        return 0;
    }

    let mut score = 0u32;

    let len = password.chars().count();
    if len >= 8 {
        score += 10;
    }
    if len >= 12 {
        score += 10;
    }
    if len >= 16 {
        score += 10;
    }

    if password.chars().any(|c| LOWERCASE.contains(c)) {
        score += 15;
    }
    if password.chars().any(|c| UPPERCASE.contains(c)) {
        score += 15;
    }
    if password.chars().any(|c| DIGITS.contains(c)) {
        score += 15;
    }
    if password.chars().any(|c| SPECIAL.contains(c)) {
        score += 25;
    }

    score.min(100) as u8
}

/// Human-readable label for a strength score.
pub fn strength_label(score: u8) -> &'static str {
    match score {
        80..=u8::MAX => "Very Strong",
        60..=79 => "Strong",
        40..=59 => "Medium",
        20..=39 => "Weak",
        _ => "Very Weak",
    }
}

/// `"<label> (<score>/100)"`, as written into export snapshots.
pub fn strength_description(password: &str) -> String {
    let score = strength(password);
    format!("{} ({}/100)", strength_label(score), score)
}
