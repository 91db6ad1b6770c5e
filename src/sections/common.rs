//! Common pattern section - flags well-known weak fragments anywhere in the password.

use std::sync::LazyLock;

use regex::Regex;
use secrecy::{ExposeSecret, SecretString};

use super::{SectionOutcome, SectionResult};
use crate::types::Feedback;

static COMMON_PATTERNS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)123|abc|password|qwerty|admin").expect("common pattern regex is valid")
});

/// Penalizes passwords containing `123`, `abc`, `password`, `qwerty` or
/// `admin`, ignoring case. Substring match, not whole-password match.
///
/// # Returns
/// - `Some(outcome)` with a -2 penalty if any fragment is present
/// - `None` otherwise
pub fn common_pattern_section(password: &SecretString) -> SectionResult {
    COMMON_PATTERNS
        .is_match(password.expose_secret())
        .then_some(SectionOutcome::new(-2, Feedback::CommonPattern))
}
