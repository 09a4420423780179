//! On-disk calendar layout

use aoc_puzzle::PuzzleDescription;
use std::path::{Path, PathBuf};

/// File name of a day's puzzle input
const INPUT_FILE: &str = "input.txt";
/// File name of a day's puzzle description
const DESCRIPTION_FILE: &str = "puzzle.txt";

/// Directory layout of the puzzle calendar
///
/// Directory structure: `{root}/{year}/{day:02}/{input.txt,puzzle.txt}`
#[derive(Debug, Clone)]
pub struct CalendarLayout {
    root: PathBuf,
}

impl CalendarLayout {
    /// Create a layout rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the directory of a specific year/day
    pub fn day_dir(&self, year: u16, day: u8) -> PathBuf {
        self.root.join(year.to_string()).join(format!("{:02}", day))
    }

    /// Get the input path of a specific year/day
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        self.day_dir(year, day).join(INPUT_FILE)
    }

    /// Get the puzzle description of a specific year/day
    pub fn description(&self, year: u16, day: u8) -> PuzzleDescription {
        PuzzleDescription::new(self.day_dir(year, day).join(DESCRIPTION_FILE))
    }
}
