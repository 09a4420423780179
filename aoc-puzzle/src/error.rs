//! Error types for reading puzzle files

use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when reading puzzle inputs and descriptions
#[derive(Error, Debug)]
pub enum PuzzleError {
    /// The file could not be opened or read
    #[error("failed to read {}: {source}", path.display())]
    FileAccess {
        /// The file that was being read
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No `--- Day N: <Title> ---` line in the description
    #[error("title not found in {}", path.display())]
    TitleNotFound {
        /// The description file
        path: PathBuf,
    },

    /// Fewer recorded answers than the requested part
    #[error("solution not found in {} for part {part}", path.display())]
    SolutionNotFound {
        /// The description file
        path: PathBuf,
        /// The 1-based part that was requested
        part: u8,
    },

    /// The recorded answer is not an integer
    #[error("recorded solution {text:?} for part {part} is not an integer: {source}")]
    InvalidSolution {
        /// The 1-based part that was requested
        part: u8,
        /// The text found after the answer marker
        text: String,
        #[source]
        source: ParseIntError,
    },
}
