//! Keyboard pattern section - flags runs of adjacent keys.

use secrecy::{ExposeSecret, SecretString};

use super::{SectionOutcome, SectionResult};
use crate::types::Feedback;

/// Keyboard runs in priority order. Only the first match is reported.
pub const KEYBOARD_PATTERNS: [&str; 6] = [
    "qwerty", "asdfgh", "zxcvbn", "123456", "edcrfv", "tgbyhn",
];

/// Penalizes the first keyboard run found in the lowercased password.
///
/// Fires at most once: when several runs are present, the one listed first
/// in [`KEYBOARD_PATTERNS`] wins, regardless of where it sits in the password.
pub fn keyboard_pattern_section(password: &SecretString) -> SectionResult {
    let lowered = password.expose_secret().to_lowercase();
    KEYBOARD_PATTERNS
        .into_iter()
        .find(|pattern| lowered.contains(pattern))
        .map(|pattern| SectionOutcome::new(-1, Feedback::KeyboardPattern(pattern)))
}
