//! Error types for the CLI

use aoc_puzzle::PuzzleError;
use aoc_solver::{ParseError, SolverError};
use std::path::PathBuf;
use thiserror::Error;

/// Process-level failures; everything else is reported per day
#[derive(Error, Debug)]
pub enum CliError {
    /// The root directory could not be listed
    #[error("failed to read directory {}: {source}", path.display())]
    ReadRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),
}

impl CliError {
    /// Process exit status for this failure
    ///
    /// An unreadable root only ends the run early; it is reported but the
    /// process still exits successfully.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::ReadRoot { .. } => 0,
            CliError::Registration(_) => 1,
        }
    }
}

/// Why a day ended unsolved
///
/// Rendered into the `[ERROR: ...]` field of the day's status line.
#[derive(Error, Debug)]
pub enum DayError {
    /// No solver is registered for the day
    #[error("not implemented")]
    NotImplemented,

    /// The input file could not be read
    #[error("failed to read input file: {0}")]
    Input(#[source] PuzzleError),

    /// The input could not be parsed
    #[error("failed to parse input: {0}")]
    Parse(#[source] ParseError),

    /// The registry could not build a solver for the day
    #[error("failed to create solver: {0}")]
    Solver(#[source] SolverError),

    /// A part failed while solving
    #[error("failed to get solution for part {part}: {source}")]
    Solve {
        part: u8,
        #[source]
        source: aoc_solver::SolveError,
    },

    /// The recorded answer for a part could not be read
    #[error("failed to get expected solution for part {part}: {source}")]
    Expected {
        part: u8,
        #[source]
        source: PuzzleError,
    },

    /// The computed answer differs from the recorded one
    #[error("unexpected solution found for part {part}: {actual} != {expected}")]
    Mismatch {
        part: u8,
        actual: String,
        expected: i64,
    },
}

impl From<SolverError> for DayError {
    fn from(e: SolverError) -> Self {
        match e {
            SolverError::ParseError(e) => DayError::Parse(e),
            other => DayError::Solver(other),
        }
    }
}
