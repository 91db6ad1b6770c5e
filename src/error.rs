//! Driver errors.
//!
//! The evaluator itself cannot fail; only the front ends do I/O.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DriverError {
    #[error("Failed to read password input: {0}")]
    Read(#[source] io::Error),
    #[error("Failed to write output: {0}")]
    Write(#[source] io::Error),
}
