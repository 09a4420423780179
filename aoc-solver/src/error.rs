//! Error types for the solver library

use thiserror::Error;

/// Error type for parsing input lines
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// A specific input line could not be decoded
    #[error("invalid input line {line} {content:?}: {reason}")]
    InvalidLine {
        /// 1-based line number
        line: usize,
        /// The offending line
        content: String,
        /// Why the line was rejected
        reason: String,
    },
}

impl ParseError {
    /// Build an [`ParseError::InvalidLine`] from a 0-based line index
    pub fn invalid_line(index: usize, content: &str, reason: impl ToString) -> Self {
        Self::InvalidLine {
            line: index + 1,
            content: content.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Error type for solving a specific part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The requested part number is not implemented
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The requested part number is out of range (exceeds PARTS)
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// An error occurred while solving the part
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SolveError {
    /// Wrap a plain message as [`SolveError::SolveFailed`]
    pub fn failed(message: impl Into<String>) -> Self {
        let message: String = message.into();
        Self::SolveFailed(message.into())
    }
}

/// Error type for solver operations
#[derive(Debug, Error)]
pub enum SolverError {
    /// Solver not found for the given year and day
    #[error("Solver not found for year {0} day {1}")]
    NotFound(u16, u8),
    /// Year or day outside the supported range
    #[error("Invalid year/day: {0}/{1}")]
    InvalidYearDay(u16, u8),
    /// Error occurred during parsing
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    /// Error occurred during solving
    #[error("Solve error: {0}")]
    SolveError(#[from] SolveError),
}

/// Error type for registration failures
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// Attempted to register a solver for a year-day combination that already exists
    #[error("Duplicate solver registration for year {0} day {1}")]
    DuplicateSolver(u16, u8),
    /// Year or day outside the supported range
    #[error("Invalid year/day for registration: {0}/{1}")]
    InvalidYearDay(u16, u8),
}
