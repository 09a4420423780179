//! Title and recorded-answer lookup for puzzle description files

use crate::error::PuzzleError;
use crate::lines::read_lines;
use std::path::{Path, PathBuf};

/// Marker carried by the title line, e.g. `--- Day 1: Calorie Counting ---`
const TITLE_MARKER: &str = "--- Day";
/// Separator between the day number and the title
const TITLE_START: &str = ": ";
/// Closing marker after the title
const TITLE_END: &str = " ---";
/// Marker carried by each recorded answer line, one per solved part
const ANSWER_MARKER: &str = "Your puzzle answer was ";
/// Terminator after a recorded answer
const ANSWER_END: char = '.';

/// A puzzle description file (`puzzle.txt`)
///
/// Holds only the path. Every query re-reads the file, so results always
/// reflect what is on disk and repeated queries agree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleDescription {
    path: PathBuf,
}

impl PuzzleDescription {
    /// Create a description handle for the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The description file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Extract the puzzle title
    ///
    /// `--- Day 1: Calorie Counting ---` gives `Calorie Counting`.
    pub fn title(&self) -> Result<String, PuzzleError> {
        let lines = read_lines(&self.path)?;
        extract_title(&lines).ok_or_else(|| PuzzleError::TitleNotFound {
            path: self.path.clone(),
        })
    }

    /// Extract the recorded answer for the 1-based `part`
    ///
    /// The n-th `Your puzzle answer was <value>.` line holds part n.
    pub fn solution(&self, part: u8) -> Result<i64, PuzzleError> {
        let lines = read_lines(&self.path)?;
        let text = extract_solution(&lines, part).ok_or_else(|| PuzzleError::SolutionNotFound {
            path: self.path.clone(),
            part,
        })?;

        text.parse::<i64>().map_err(|source| PuzzleError::InvalidSolution {
            part,
            text: text.to_string(),
            source,
        })
    }
}

/// First title line's title; `None` when no line carries a well-formed title
fn extract_title(lines: &[String]) -> Option<String> {
    let line = lines.iter().find(|line| line.contains(TITLE_MARKER))?;
    let title = line.split(TITLE_START).nth(1)?;
    title.split(TITLE_END).next().map(str::to_string)
}

/// Raw text of the `part`-th recorded answer
fn extract_solution(lines: &[String], part: u8) -> Option<&str> {
    let line = lines
        .iter()
        .filter(|line| line.contains(ANSWER_MARKER))
        .nth(usize::from(part).checked_sub(1)?)?;
    let answer = line.split(ANSWER_MARKER).nth(1)?;
    answer.split(ANSWER_END).next()
}
