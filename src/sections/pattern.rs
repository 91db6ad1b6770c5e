//! Repetition section - detects runs of the same character.

use secrecy::{ExposeSecret, SecretString};

use super::{SectionOutcome, SectionResult};
use crate::types::Feedback;

const MAX_RUN: usize = 2;

/// Penalizes any character repeated three or more times in a row (`aaa`).
///
/// # Returns
/// - `Some(outcome)` with a -1 penalty if a run is found
/// - `None` otherwise
pub fn repeated_characters_section(password: &SecretString) -> SectionResult {
    let chars: Vec<char> = password.expose_secret().chars().collect();
    if chars.len() <= MAX_RUN {
        return None;
    }

    let mut run = 1;
    for i in 1..chars.len() {
        // Line breaks never form a run
        if chars[i] == chars[i - 1] && chars[i] != '\n' {
            run += 1;
            if run > MAX_RUN {
                return Some(SectionOutcome::new(-1, Feedback::RepeatedCharacters));
            }
        } else {
            run = 1;
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_pattern_section_repetitive_chars() {
        let result = repeated_characters_section(&secret("xyBBBz"));
        assert_eq!(result, Some(SectionOutcome::new(-1, Feedback::RepeatedCharacters)));
    }

    #[test]
    fn test_pattern_section_run_at_end() {
        let result = repeated_characters_section(&secret("Secure!!!"));
        assert!(result.is_some());
    }

    #[test]
    fn test_pattern_section_pairs_are_fine() {
        let result = repeated_characters_section(&secret("aabbccdd11!!"));
        assert_eq!(result, None);
    }

    #[test]
    fn test_pattern_section_case_sensitive() {
        let result = repeated_characters_section(&secret("aAa"));
        assert_eq!(result, None);
    }

    #[test]
    fn test_pattern_section_long_run_penalized_once() {
        let result = repeated_characters_section(&secret("zzzzzzzzzz"));
        assert_eq!(result, Some(SectionOutcome::new(-1, Feedback::RepeatedCharacters)));
    }

    #[test]
    fn test_pattern_section_too_short() {
        assert_eq!(repeated_characters_section(&secret("aa")), None);
        assert_eq!(repeated_characters_section(&secret("")), None);
    }

    #[test]
    fn test_pattern_section_ignores_newlines() {
        assert_eq!(repeated_characters_section(&secret("a\n\n\nb")), None);
    }
}
