//! Single-page form front end.
//!
//! A [`FormView`] is the page state for one value of the password field:
//! either a prompt (empty field) or a strength report. Rendering goes to any
//! `Write`, styled with `colored`. With the `async` feature,
//! [`run_reactive_form`] re-renders the page as new field values arrive.

use std::io::{self, Write};

use colored::{ColoredString, Colorize};
use secrecy::{ExposeSecret, SecretString};

use crate::evaluator::evaluate_password_strength;
use crate::types::{Feedback, PasswordEvaluation, PasswordScore, PasswordStrength};

#[cfg(feature = "async")]
use crate::error::DriverError;

const TITLE: &str = "🔐 Password Strength Meter";
const INTRO: &str = "Check how strong your password is and get suggestions to improve it.";
const FIELD_LABEL: &str = "Enter your password here:";
const PROMPT: &str = "Enter your password to check its strength.";
const STRENGTH_HEADING: &str = "Password strength:";
const SUGGESTIONS_HEADING: &str = "Suggestions for improvement:";
const FOOTER: &str =
    "A simple password strength meter; more rules can be added for more thorough checks.";
const MASK: char = '*';

/// Visual treatment of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Error,
    Info,
}

impl Tone {
    fn paint(self, text: &str) -> ColoredString {
        match self {
            Tone::Success => text.green().bold(),
            Tone::Warning => text.yellow().bold(),
            Tone::Error => text.red().bold(),
            Tone::Info => text.blue(),
        }
    }
}

impl From<PasswordStrength> for Tone {
    fn from(strength: PasswordStrength) -> Self {
        match strength {
            PasswordStrength::VeryStrong | PasswordStrength::Strong => Tone::Success,
            PasswordStrength::Moderate => Tone::Warning,
            PasswordStrength::Weak => Tone::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthReport {
    pub strength: PasswordStrength,
    pub score: PasswordScore,
    pub suggestions: Vec<Feedback>,
}

impl StrengthReport {
    pub fn tone(&self) -> Tone {
        self.strength.into()
    }

    /// Status line, e.g. `Strong (score: 5/11)`.
    pub fn status_line(&self) -> String {
        format!("{} (score: {})", self.strength, self.score)
    }
}

impl From<PasswordEvaluation> for StrengthReport {
    fn from(evaluation: PasswordEvaluation) -> Self {
        Self {
            strength: evaluation.strength(),
            score: evaluation.score,
            suggestions: evaluation.feedback,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    /// Field is empty, ask for a password.
    Prompt,
    Report(StrengthReport),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    masked_len: usize,
    outcome: FormOutcome,
}

impl FormView {
    /// Page shown before anything is typed.
    pub fn empty() -> Self {
        Self {
            masked_len: 0,
            outcome: FormOutcome::Prompt,
        }
    }

    /// Builds the page for the current field value, evaluating it if non-empty.
    pub fn for_input(password: &SecretString) -> Self {
        let value = password.expose_secret();
        if value.is_empty() {
            return Self::empty();
        }
        Self::from_evaluation(value.chars().count(), evaluate_password_strength(password))
    }

    /// Builds a report page from an evaluation made elsewhere.
    pub fn from_evaluation(masked_len: usize, evaluation: PasswordEvaluation) -> Self {
        Self {
            masked_len,
            outcome: FormOutcome::Report(evaluation.into()),
        }
    }

    pub fn outcome(&self) -> &FormOutcome {
        &self.outcome
    }

    /// Field contents as displayed: one mask character per password character.
    pub fn masked_field(&self) -> String {
        std::iter::repeat_n(MASK, self.masked_len).collect()
    }

    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", TITLE.bold())?;
        writeln!(out, "{INTRO}")?;
        writeln!(out)?;
        writeln!(out, "{FIELD_LABEL} {}", self.masked_field())?;
        writeln!(out)?;

        match &self.outcome {
            FormOutcome::Prompt => writeln!(out, "{}", Tone::Info.paint(PROMPT))?,
            FormOutcome::Report(report) => {
                writeln!(out, "{}", STRENGTH_HEADING.bold())?;
                writeln!(out, "{}", report.tone().paint(&report.status_line()))?;
                writeln!(out)?;
                writeln!(out, "{}", SUGGESTIONS_HEADING.bold())?;
                for item in &report.suggestions {
                    writeln!(out, "{item}")?;
                }
            }
        }

        writeln!(out)?;
        writeln!(out, "---")?;
        writeln!(out, "{}", FOOTER.dimmed())?;
        out.flush()
    }
}

/// Evaluation running for the latest field value.
#[cfg(feature = "async")]
struct InFlight {
    masked_len: usize,
    token: tokio_util::sync::CancellationToken,
    rx: tokio::sync::mpsc::Receiver<PasswordEvaluation>,
}

#[cfg(feature = "async")]
impl InFlight {
    fn start(value: String) -> Self {
        use crate::evaluator::evaluate_password_strength_tx;

        let masked_len = value.chars().count();
        let password = SecretString::new(value.into());
        let token = tokio_util::sync::CancellationToken::new();
        // One channel per value: dropping `rx` discards a superseded result.
        let (tx, rx) = tokio::sync::mpsc::channel(1);

        let child = token.clone();
        tokio::spawn(async move {
            evaluate_password_strength_tx(&password, child, tx).await;
        });

        Self {
            masked_len,
            token,
            rx,
        }
    }

    fn cancel(self) {
        self.token.cancel();
    }
}

#[cfg(feature = "async")]
async fn next_evaluation(current: &mut Option<InFlight>) -> Option<PasswordEvaluation> {
    match current {
        Some(in_flight) => in_flight.rx.recv().await,
        None => std::future::pending().await,
    }
}

/// Pushes field values from a blocking source into the form channel.
///
/// `next_value` yields `Ok(None)` once the source is exhausted. Stops early
/// when the form side has gone away. Must run outside the async runtime,
/// typically on a dedicated reader thread.
#[cfg(feature = "async")]
pub fn feed_field_values<F>(
    tx: tokio::sync::mpsc::Sender<String>,
    mut next_value: F,
) -> Result<usize, DriverError>
where
    F: FnMut() -> io::Result<Option<String>>,
{
    let mut fed = 0;
    while let Some(value) = next_value().map_err(DriverError::Read)? {
        if tx.blocking_send(value).is_err() {
            #[cfg(feature = "tracing")]
            tracing::debug!("form closed, field reader stopping");
            break;
        }
        fed += 1;
    }
    Ok(fed)
}

/// Re-renders the form for every field value received on `input`.
///
/// Empty values show the prompt at once. Other values are evaluated after
/// the debounce delay; a newer value cancels the pending evaluation, so only
/// settled values produce a report. When `input` closes, the last pending
/// evaluation is awaited and rendered.
///
/// Returns the number of reports rendered.
#[cfg(feature = "async")]
pub async fn run_reactive_form<W: Write>(
    mut input: tokio::sync::mpsc::Receiver<String>,
    output: &mut W,
) -> Result<usize, DriverError> {
    FormView::empty().render(output).map_err(DriverError::Write)?;

    let mut reports = 0;
    let mut current: Option<InFlight> = None;

    loop {
        tokio::select! {
            value = input.recv() => {
                let Some(value) = value else { break };
                if let Some(previous) = current.take() {
                    previous.cancel();
                }
                if value.is_empty() {
                    FormView::empty().render(output).map_err(DriverError::Write)?;
                } else {
                    current = Some(InFlight::start(value));
                }
            }
            evaluation = next_evaluation(&mut current) => {
                let masked_len = current.take().map_or(0, |in_flight| in_flight.masked_len);
                match evaluation {
                    Some(evaluation) => {
                        FormView::from_evaluation(masked_len, evaluation)
                            .render(output)
                            .map_err(DriverError::Write)?;
                        reports += 1;
                    }
                    None => {
                        #[cfg(feature = "tracing")]
                        tracing::warn!("evaluation task ended without a result");
                    }
                }
            }
        }
    }

    if let Some(mut in_flight) = current.take()
        && let Some(evaluation) = in_flight.rx.recv().await
    {
        FormView::from_evaluation(in_flight.masked_len, evaluation)
            .render(output)
            .map_err(DriverError::Write)?;
        reports += 1;
    }

    #[cfg(feature = "tracing")]
    tracing::info!(reports, "form input closed");

    Ok(reports)
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;
    use crate::evaluator::EVALUATION_DEBOUNCE;
    use tokio::sync::mpsc;

    async fn drive(values: &[&str]) -> (usize, String) {
        let (tx, rx) = mpsc::channel(values.len().max(1));
        for value in values {
            tx.send(value.to_string()).await.expect("queue input");
        }
        drop(tx);

        let mut out = Vec::new();
        let reports = run_reactive_form(rx, &mut out).await.expect("form run");
        (reports, String::from_utf8(out).expect("utf8 output"))
    }

    #[test]
    fn test_feed_field_values_until_exhausted() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut values = vec!["Tr0ub4dorX".to_string(), String::new()].into_iter();

        let fed = feed_field_values(tx, || Ok(values.next())).expect("feed values");

        assert_eq!(fed, 2);
        assert_eq!(rx.try_recv().ok().as_deref(), Some("Tr0ub4dorX"));
        assert_eq!(rx.try_recv().ok().as_deref(), Some(""));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_feed_field_values_stops_when_form_closes() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let mut calls = 0;

        let fed = feed_field_values(tx, || {
            calls += 1;
            Ok(Some("secret".to_string()))
        })
        .expect("feed values");

        assert_eq!(fed, 0);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_feed_field_values_reports_read_errors() {
        let (tx, _rx) = mpsc::channel(1);
        let result = feed_field_values(tx, || {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "tty gone"))
        });
        assert!(matches!(result, Err(DriverError::Read(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reactive_form_renders_latest_value_only() {
        let (reports, page) = drive(&["abc", "Aa1!Aa1!", "Aa1!Aa1!Aa1!"]).await;
        assert_eq!(reports, 1);
        assert_eq!(page.matches(STRENGTH_HEADING).count(), 1);
        assert!(page.contains("Very Strong (score: 7/11)"));
        assert!(page.contains(&"*".repeat(12)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reactive_form_starts_with_prompt() {
        let (reports, page) = drive(&[]).await;
        assert_eq!(reports, 0);
        assert!(page.contains(PROMPT));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reactive_form_clearing_field_cancels_pending() {
        let (reports, page) = drive(&["password", ""]).await;
        assert_eq!(reports, 0);
        assert_eq!(page.matches(PROMPT).count(), 2);
        assert!(!page.contains(STRENGTH_HEADING));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reactive_form_reports_settled_values() {
        let (tx, rx) = mpsc::channel(4);
        let producer = tokio::spawn(async move {
            tx.send("password".to_string()).await.expect("queue input");
            tokio::time::sleep(EVALUATION_DEBOUNCE * 2).await;
            tx.send("Aa1!Aa1!Aa1!".to_string()).await.expect("queue input");
        });

        let mut out = Vec::new();
        let reports = run_reactive_form(rx, &mut out).await.expect("form run");
        producer.await.expect("producer finished");

        let page = String::from_utf8(out).expect("utf8 output");
        assert_eq!(reports, 2);
        let weak = page.find("Weak (score: 1/11)").expect("weak report");
        let strong = page.find("Very Strong (score: 7/11)").expect("strong report");
        assert!(weak < strong);
    }
}
