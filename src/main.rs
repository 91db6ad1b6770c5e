//! pwd-meter: password strength meter CLI

use std::io::{self, BufRead, IsTerminal};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use pwd_meter::{console, form};

const FIELD_PROMPT: &str = "Password (hidden, Ctrl-C to quit): ";

/// Check how strong a password is and get suggestions to improve it
#[derive(Parser, Debug)]
#[command(name = "pwd-meter")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive loop: one password per line, `exit` to quit (default)
    Console,
    /// Form view: every input line replaces the field value and re-renders the page
    Form,
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run_console() -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    console::run_console(stdin.lock(), stdout.lock()).context("console session failed")?;
    Ok(())
}

/// Where form field values come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldSource {
    /// Interactive terminal: read with echo off so the password never shows.
    Hidden,
    /// Piped input: one field value per line.
    Lines,
}

impl FieldSource {
    fn detect(stdin_is_terminal: bool) -> Self {
        if stdin_is_terminal {
            FieldSource::Hidden
        } else {
            FieldSource::Lines
        }
    }
}

/// Reads one field value from the terminal without echoing it.
/// End of input (Ctrl-D) closes the form.
fn read_hidden_field() -> io::Result<Option<String>> {
    match rpassword::prompt_password(FIELD_PROMPT) {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
        Err(e) => Err(e),
    }
}

fn run_form() -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("failed to start async runtime")?;

    let (tx, rx) = mpsc::channel::<String>(16);
    let source = FieldSource::detect(io::stdin().is_terminal());
    tracing::debug!(?source, "form field source selected");

    // Blocking reader feeding the form one field value at a time
    std::thread::spawn(move || {
        let fed = match source {
            FieldSource::Hidden => form::feed_field_values(tx, read_hidden_field),
            FieldSource::Lines => {
                let mut lines = io::stdin().lock().lines();
                form::feed_field_values(tx, move || lines.next().transpose())
            }
        };
        if let Err(e) = fed {
            tracing::error!("{}", e);
        }
    });

    let mut stdout = io::stdout();
    let reports = runtime
        .block_on(form::run_reactive_form(rx, &mut stdout))
        .context("form session failed")?;
    tracing::debug!(reports, "form session finished");
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let result = match cli.command.unwrap_or(Commands::Console) {
        Commands::Console => run_console(),
        Commands::Form => run_form(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
