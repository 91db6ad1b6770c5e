//! Interactive console front end.
//!
//! Reads one password per line, prints the strength, the score and the
//! suggestions, and stops on `exit` or end of input.

use std::io::{BufRead, Write};

use secrecy::SecretString;

use crate::error::DriverError;
use crate::evaluator::evaluate_password_strength;
use crate::types::PasswordEvaluation;

/// Typing this (in any case) ends the session.
pub const EXIT_SENTINEL: &str = "exit";

const TITLE: &str = "Password Strength Meter";
const PROMPT: &str = "Enter your password (type 'exit' to quit): ";
const SEPARATOR_WIDTH: usize = 30;

/// Runs the read-evaluate-print loop over `input` and `output`.
///
/// Returns the number of passwords evaluated.
pub fn run_console<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<usize, DriverError> {
    writeln!(output, "{TITLE}").map_err(DriverError::Write)?;

    let mut evaluated = 0;
    let mut line = String::new();
    loop {
        write!(output, "{PROMPT}").map_err(DriverError::Write)?;
        output.flush().map_err(DriverError::Write)?;

        line.clear();
        if input.read_line(&mut line).map_err(DriverError::Read)? == 0 {
            #[cfg(feature = "tracing")]
            tracing::debug!("console input closed");
            writeln!(output).map_err(DriverError::Write)?;
            break;
        }

        let candidate = strip_line_ending(&line);
        if candidate.eq_ignore_ascii_case(EXIT_SENTINEL) {
            break;
        }

        let password = SecretString::new(candidate.into());
        let evaluation = evaluate_password_strength(&password);
        write_report(&mut output, &evaluation).map_err(DriverError::Write)?;
        evaluated += 1;
    }

    #[cfg(feature = "tracing")]
    tracing::info!(evaluated, "console session finished");

    Ok(evaluated)
}

/// Drops the trailing `\n` or `\r\n`; any other whitespace is part of the password.
fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

fn write_report<W: Write>(output: &mut W, evaluation: &PasswordEvaluation) -> std::io::Result<()> {
    writeln!(output)?;
    writeln!(
        output,
        "Password strength: {} (score: {})",
        evaluation.strength(),
        evaluation.score
    )?;
    writeln!(output, "Suggestions for improvement:")?;
    for item in &evaluation.feedback {
        writeln!(output, "- {item}")?;
    }
    writeln!(output, "{}", "-".repeat(SEPARATOR_WIDTH))
}
