//! Length section - rewards longer passwords.

use secrecy::{ExposeSecret, SecretString};

use super::{SectionOutcome, SectionResult};
use crate::types::Feedback;

const MIN_LENGTH: usize = 8;
const RECOMMENDED_LENGTH: usize = 12;

/// Scores the password by length, counted in characters rather than bytes.
///
/// Always applies: +3 from 12 characters, +2 from 8, +1 below that.
pub fn length_section(password: &SecretString) -> SectionResult {
    let len = password.expose_secret().chars().count();
    let outcome = if len >= RECOMMENDED_LENGTH {
        SectionOutcome::new(3, Feedback::GoodLength)
    } else if len >= MIN_LENGTH {
        SectionOutcome::new(2, Feedback::FairLength)
    } else {
        SectionOutcome::new(1, Feedback::ShortLength)
    };
    Some(outcome)
}
