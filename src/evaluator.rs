//! Password strength evaluator - main evaluation logic.

use secrecy::SecretString;

use crate::sections::{
    SectionResult, character_variety_section, common_pattern_section, keyboard_pattern_section,
    length_section, repeated_characters_section,
};
use crate::types::{PasswordEvaluation, PasswordScore};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

/// Delay before an async evaluation runs, so that fast typing only
/// evaluates the last value.
#[cfg(feature = "async")]
pub const EVALUATION_DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

type Section = fn(&SecretString) -> SectionResult;

/// Sections in evaluation order. Feedback follows this order.
const SECTIONS: [(&str, Section); 5] = [
    ("length", length_section),
    ("variety", character_variety_section),
    ("common", common_pattern_section),
    ("repetition", repeated_characters_section),
    ("keyboard", keyboard_pattern_section),
];

/// Evaluates password strength and returns a detailed evaluation.
///
/// Total over all inputs, including the empty string, and deterministic:
/// the result depends on `password` alone.
///
/// # Arguments
/// * `password` - The password to evaluate
///
/// # Returns
/// A `PasswordEvaluation` containing the score and feedback in rule order.
pub fn evaluate_password_strength(password: &SecretString) -> PasswordEvaluation {
    let mut score = 0;
    let mut feedback = Vec::with_capacity(SECTIONS.len());

    // Orchestrator: execute sections in sequence
    for (section_name, section_fn) in SECTIONS {
        match section_fn(password) {
            Some(outcome) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(section = section_name, delta = outcome.delta, "section applied");
                score += outcome.delta;
                feedback.push(outcome.feedback);
            }
            None => {
                #[cfg(feature = "tracing")]
                tracing::trace!(section = section_name, "section skipped");
            }
        }
        #[cfg(not(feature = "tracing"))]
        let _ = section_name;
    }

    let evaluation = PasswordEvaluation {
        score: PasswordScore::new(score),
        feedback,
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(
        score = evaluation.score.value(),
        strength = %evaluation.strength(),
        feedback = evaluation.feedback.len(),
        "password evaluated"
    );

    evaluation
}

/// Async version that sends evaluation result via channel.
///
/// Waits [`EVALUATION_DEBOUNCE`] first; if `token` was cancelled in the
/// meantime nothing is evaluated or sent.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordEvaluation>,
) {
    #[cfg(feature = "tracing")]
    tracing::debug!("evaluation is about to start...");

    tokio::time::sleep(EVALUATION_DEBOUNCE).await;

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("evaluation cancelled before start");
        return;
    }

    let evaluation = evaluate_password_strength(password);

    if let Err(e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::debug!("password evaluation result dropped: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}
