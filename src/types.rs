//! Evaluation result types: score, strength label and feedback table.

use std::fmt;

/// Denominator shown next to every score, e.g. `5/11`.
pub const MAX_DISPLAY_SCORE: i32 = 11;

/// Accumulated rule score. Not clamped, can be negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PasswordScore(i32);

impl PasswordScore {
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }

    /// Maps the score to a strength label, highest threshold first.
    pub fn strength(&self) -> PasswordStrength {
        match self.0 {
            s if s >= 7 => PasswordStrength::VeryStrong,
            s if s >= 5 => PasswordStrength::Strong,
            s if s >= 3 => PasswordStrength::Moderate,
            _ => PasswordStrength::Weak,
        }
    }
}

impl fmt::Display for PasswordScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, MAX_DISPLAY_SCORE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordStrength {
    VeryStrong,
    Strong,
    Moderate,
    Weak,
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PasswordStrength::VeryStrong => "Very Strong",
            PasswordStrength::Strong => "Strong",
            PasswordStrength::Moderate => "Moderate",
            PasswordStrength::Weak => "Weak",
        };
        f.write_str(label)
    }
}

/// One piece of advice, keyed by the rule and branch that produced it.
///
/// The scoring code only deals in variants; the wording lives in the
/// `Display` impl below so it can be swapped without touching the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    GoodLength,
    FairLength,
    ShortLength,
    AllCharacterTypes,
    MostCharacterTypes,
    FewCharacterTypes,
    TooFewCharacterTypes,
    CommonPattern,
    RepeatedCharacters,
    /// Carries the keyboard run that matched, e.g. `"asdfgh"`.
    KeyboardPattern(&'static str),
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feedback::GoodLength => {
                f.write_str("👍 Good length (at least 12 characters is recommended).")
            }
            Feedback::FairLength => {
                f.write_str("👌 Length could be improved (at least 12 characters is recommended).")
            }
            Feedback::ShortLength => f.write_str(
                "⚠️ Password is too short (at least 8 characters, 12 characters recommended).",
            ),
            Feedback::AllCharacterTypes => f.write_str(
                "👍 All character types (lowercase, uppercase, digits, special characters) are present.",
            ),
            Feedback::MostCharacterTypes => {
                f.write_str("👌 Almost all character types are present.")
            }
            Feedback::FewCharacterTypes => f.write_str(
                "⚠️ Add more character types (for example special characters or digits).",
            ),
            Feedback::TooFewCharacterTypes => f.write_str(
                "❗ Too few character types used (mix lowercase/uppercase letters, digits and special characters).",
            ),
            Feedback::CommonPattern => f.write_str(
                "⛔ Avoid common patterns or words (such as '123' or 'password').",
            ),
            Feedback::RepeatedCharacters => {
                f.write_str("⚠️ Do not repeat the same character in a row (such as 'aaa').")
            }
            Feedback::KeyboardPattern(pattern) => {
                write!(f, "⚠️ Avoid the keyboard pattern '{pattern}'.")
            }
        }
    }
}

/// Outcome of a single evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordEvaluation {
    pub score: PasswordScore,
    /// In rule order. Never empty.
    pub feedback: Vec<Feedback>,
}

impl PasswordEvaluation {
    pub fn strength(&self) -> PasswordStrength {
        self.score.strength()
    }

    /// Feedback rendered to display strings.
    pub fn messages(&self) -> Vec<String> {
        self.feedback.iter().map(ToString::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strength_thresholds() {
        assert_eq!(PasswordScore::new(11).strength(), PasswordStrength::VeryStrong);
        assert_eq!(PasswordScore::new(7).strength(), PasswordStrength::VeryStrong);
        assert_eq!(PasswordScore::new(6).strength(), PasswordStrength::Strong);
        assert_eq!(PasswordScore::new(5).strength(), PasswordStrength::Strong);
        assert_eq!(PasswordScore::new(4).strength(), PasswordStrength::Moderate);
        assert_eq!(PasswordScore::new(3).strength(), PasswordStrength::Moderate);
        assert_eq!(PasswordScore::new(2).strength(), PasswordStrength::Weak);
        assert_eq!(PasswordScore::new(-2).strength(), PasswordStrength::Weak);
    }

    #[test]
    fn test_score_display_is_unclamped() {
        assert_eq!(PasswordScore::new(5).to_string(), "5/11");
        assert_eq!(PasswordScore::new(-1).to_string(), "-1/11");
    }

    #[test]
    fn test_keyboard_feedback_names_pattern() {
        let message = Feedback::KeyboardPattern("zxcvbn").to_string();
        assert!(message.contains("'zxcvbn'"));
    }

    #[test]
    fn test_strength_labels() {
        assert_eq!(PasswordStrength::VeryStrong.to_string(), "Very Strong");
        assert_eq!(PasswordStrength::Weak.to_string(), "Weak");
    }
}
