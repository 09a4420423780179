//! Puzzle file access
//!
//! Every puzzle day lives in a directory holding two text files:
//!
//! - `input.txt`: the raw puzzle input, read with [`read_lines`]
//! - `puzzle.txt`: the puzzle description, queried through [`PuzzleDescription`]
//!   for the puzzle title and for answers recorded once a part was solved
//!
//! # Example
//!
//! ```no_run
//! use aoc_puzzle::{PuzzleDescription, read_lines};
//!
//! # fn main() -> Result<(), aoc_puzzle::PuzzleError> {
//! let lines = read_lines("2022/01/input.txt")?;
//! let description = PuzzleDescription::new("2022/01/puzzle.txt");
//!
//! println!("{} ({} lines)", description.title()?, lines.len());
//! println!("part 1 answer: {}", description.solution(1)?);
//! # Ok(())
//! # }
//! ```

mod description;
mod error;
mod lines;

pub use description::PuzzleDescription;
pub use error::PuzzleError;
pub use lines::read_lines;
