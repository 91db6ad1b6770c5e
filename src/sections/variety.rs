//! Character variety section - counts lowercase, uppercase, digit and special classes.

use secrecy::{ExposeSecret, SecretString};

use super::{SectionOutcome, SectionResult};
use crate::types::Feedback;

/// Characters that count towards the "special" class.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*()-_+=~`[]{}|\\:;\"'<>,.?/";

/// Number of character classes present in `pwd`, 0 to 4.
fn class_count(pwd: &str) -> usize {
    let has_lower = pwd.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = pwd.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = pwd.chars().any(|c| c.is_ascii_digit());
    let has_special = pwd.chars().any(|c| SPECIAL_CHARACTERS.contains(c));

    [has_lower, has_upper, has_digit, has_special]
        .iter()
        .filter(|&&b| b)
        .count()
}

/// Scores the password by how many character classes it mixes.
///
/// Always applies: +4 for all four classes, +3 for three, +2 for two,
/// +1 for one or none.
pub fn character_variety_section(password: &SecretString) -> SectionResult {
    let outcome = match class_count(password.expose_secret()) {
        4 => SectionOutcome::new(4, Feedback::AllCharacterTypes),
        3 => SectionOutcome::new(3, Feedback::MostCharacterTypes),
        2 => SectionOutcome::new(2, Feedback::FewCharacterTypes),
        _ => SectionOutcome::new(1, Feedback::TooFewCharacterTypes),
    };
    Some(outcome)
}
