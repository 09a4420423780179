//! Core solver traits

use crate::error::{ParseError, SolveError};

/// Trait for parsing puzzle input lines into data shared by all parts
///
/// Input arrives as the ordered lines of the input file with line
/// terminators stripped and blank lines kept.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct Day1;
///
/// impl AocParser for Day1 {
///     type SharedData<'a> = Vec<i32>;
///
///     fn parse<'a>(lines: &'a [String]) -> Result<Self::SharedData<'a>, ParseError> {
///         lines
///             .iter()
///             .enumerate()
///             .map(|(i, l)| l.parse::<i32>().map_err(|e| ParseError::invalid_line(i, l, e)))
///             .collect()
///     }
/// }
/// ```
pub trait AocParser {
    /// The data structure every part is solved from.
    ///
    /// Use any ownership strategy:
    /// - `Vec<T>` or custom structs for owned data
    /// - `&'a str` / `&'a [String]` for zero-copy borrowed data
    type SharedData<'a>;

    /// Parse the input lines into the shared data structure.
    fn parse<'a>(lines: &'a [String]) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Trait for solving a specific part of a puzzle.
///
/// The const generic `N` is the part number (1, 2, etc.). Parts only get a
/// shared reference, so every part is computed from the same parsed data.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, PartSolver, ParseError, SolveError};
///
/// struct Day1;
///
/// impl AocParser for Day1 {
///     type SharedData<'a> = Vec<i32>;
///
///     fn parse<'a>(lines: &'a [String]) -> Result<Self::SharedData<'a>, ParseError> {
///         lines
///             .iter()
///             .enumerate()
///             .map(|(i, l)| l.parse::<i32>().map_err(|e| ParseError::invalid_line(i, l, e)))
///             .collect()
///     }
/// }
///
/// impl PartSolver<1> for Day1 {
///     fn solve(shared: &Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(shared.iter().sum::<i32>().to_string())
///     }
/// }
/// ```
pub trait PartSolver<const N: u8>: AocParser {
    /// Solve this part of the puzzle.
    fn solve(shared: &Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// Core trait that all solvers implement.
///
/// Usually derived with `#[derive(AocSolver)]`, which dispatches
/// `solve_part(shared, N)` to `PartSolver<N>`.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver};
///
/// struct Day1Solver;
///
/// impl AocParser for Day1Solver {
///     type SharedData<'a> = Vec<i64>;
///
///     fn parse<'a>(lines: &'a [String]) -> Result<Self::SharedData<'a>, ParseError> {
///         lines
///             .iter()
///             .enumerate()
///             .map(|(i, l)| l.parse::<i64>().map_err(|e| ParseError::invalid_line(i, l, e)))
///             .collect()
///     }
/// }
///
/// impl Solver for Day1Solver {
///     const PARTS: u8 = 2;
///
///     fn solve_part(shared: &Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(shared.iter().sum::<i64>().to_string()),
///             2 => Ok(shared.iter().product::<i64>().to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
/// ```
pub trait Solver: AocParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve a specific part of the problem
    ///
    /// # Returns
    /// * `Ok(String)` - The answer for this part
    /// * `Err(SolveError::PartNotImplemented)` - The part is not implemented
    /// * `Err(SolveError::SolveFailed)` - An error occurred while solving
    fn solve_part(shared: &Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

pub trait SolverExt: Solver {
    fn solve_part_checked_range(
        shared: &Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
