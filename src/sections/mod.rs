//! Password evaluation sections
//!
//! Each section scores one aspect of the password. Sections are independent
//! and stateless; the evaluator runs them in a fixed order.

mod common;
mod keyboard;
mod length;
mod pattern;
mod variety;

pub use common::common_pattern_section;
pub use keyboard::{KEYBOARD_PATTERNS, keyboard_pattern_section};
pub use length::length_section;
pub use pattern::repeated_characters_section;
pub use variety::character_variety_section;

use crate::types::Feedback;

/// Score adjustment and advice produced by a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionOutcome {
    pub delta: i32,
    pub feedback: Feedback,
}

impl SectionOutcome {
    pub fn new(delta: i32, feedback: Feedback) -> Self {
        Self { delta, feedback }
    }
}

/// Result type for section evaluation functions.
/// - `Some(outcome)` - Section applies, adjust score and report feedback
/// - `None` - Section does not apply
pub type SectionResult = Option<SectionOutcome>;
