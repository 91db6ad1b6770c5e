//! Rule-based password strength meter
//!
//! Scores a password with a fixed set of heuristic rules and explains the
//! result with a list of suggestions. Two front ends are included: an
//! interactive console loop and a single-page form view.
//!
//! # Rules
//!
//! Applied in order, each adding to or subtracting from the score:
//!
//! 1. Length: +3 from 12 characters, +2 from 8, +1 below
//! 2. Character variety: +1 to +4 for lowercase, uppercase, digit and special
//! 3. Common fragments (`123`, `abc`, `password`, `qwerty`, `admin`): -2
//! 4. Same character three times in a row: -1
//! 5. Keyboard runs (`qwerty`, `asdfgh`, ...): -1, at most once
//!
//! A score of 7 or more is very strong, 5 strong, 3 moderate, anything
//! lower weak.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//! - `cli` (default): Builds the `pwd-meter` binary
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::{evaluate_password_strength, PasswordStrength};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Aa1!Aa1!Aa1!".to_string().into());
//! let evaluation = evaluate_password_strength(&password);
//!
//! assert_eq!(evaluation.score.value(), 7);
//! assert_eq!(evaluation.strength(), PasswordStrength::VeryStrong);
//! for line in evaluation.messages() {
//!     println!("- {line}");
//! }
//! ```

// Internal modules
mod error;
mod evaluator;
mod sections;
mod types;

pub mod console;
pub mod form;

// Public API
pub use error::DriverError;
pub use evaluator::evaluate_password_strength;
pub use sections::KEYBOARD_PATTERNS;
pub use types::{Feedback, MAX_DISPLAY_SCORE, PasswordEvaluation, PasswordScore, PasswordStrength};

#[cfg(feature = "async")]
pub use evaluator::{EVALUATION_DEBOUNCE, evaluate_password_strength_tx};
