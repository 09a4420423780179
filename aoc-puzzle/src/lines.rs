//! Line reading for puzzle input files

use crate::error::PuzzleError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read a file into its ordered lines
///
/// Line terminators (`\n` or `\r\n`) are stripped and blank lines are kept
/// as empty strings. A final newline does not add an empty line. The file
/// is closed before returning, on success and on error.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>, PuzzleError> {
    let path = path.as_ref();
    let file_access = |source| PuzzleError::FileAccess {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(file_access)?;
    BufReader::new(file)
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(file_access)
}
