//! Advent of Code Solver Library
//!
//! A small, type-safe framework for solving Advent of Code puzzles across
//! years and days. Each puzzle is a solver that parses the input file's
//! lines once and computes each part from the parsed data.
//!
//! # Overview
//!
//! This library provides:
//! - A trait-based interface for defining solvers ([`AocParser`], [`PartSolver`], [`Solver`])
//! - `#[derive(AocSolver)]` to dispatch parts to `PartSolver<N>` impls
//! - A closed registry built from explicit [`SolverPlugin`] tables
//! - Parse and solve timing for every instance
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError};
//! use aoc_solver::{SolverPlugin, SolverRegistryBuilder};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! struct Day1;
//!
//! impl AocParser for Day1 {
//!     type SharedData<'a> = Vec<i64>;
//!
//!     fn parse<'a>(lines: &'a [String]) -> Result<Self::SharedData<'a>, ParseError> {
//!         lines
//!             .iter()
//!             .enumerate()
//!             .map(|(i, l)| l.parse::<i64>().map_err(|e| ParseError::invalid_line(i, l, e)))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Day1 {
//!     fn solve(shared: &Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<i64>().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Day1 {
//!     fn solve(shared: &Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().product::<i64>().to_string())
//!     }
//! }
//!
//! static SOLVERS: &[SolverPlugin] = &[SolverPlugin { year: 2023, day: 1, solver: &Day1 }];
//!
//! let registry = SolverRegistryBuilder::new()
//!     .register_plugins(SOLVERS)
//!     .unwrap()
//!     .build();
//!
//! let lines: Vec<String> = ["1", "2", "3"].map(String::from).to_vec();
//! let solver = registry.create_solver(2023, 1, &lines).unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "6");
//! assert_eq!(solver.solve(2).unwrap().answer, "6");
//! ```
//!
//! # Key Concepts
//!
//! ## Parsing and Parts
//!
//! [`AocParser::parse`] turns the input lines into `SharedData`. Each part
//! receives `&SharedData`, so parts never observe each other's work.
//!
//! ## DynSolver
//!
//! [`DynSolver`] erases the solver type. The registry returns
//! `Box<dyn DynSolver>` and callers drive `solve(part)` for `1..=parts()`.
//!
//! ## Solver Tables
//!
//! A year's solvers are a `&[SolverPlugin]` array. Registering it twice, or
//! listing a year/day twice, is a [`RegistrationError`].

// Lets `#[derive(AocSolver)]` name `::aoc_solver` from inside this crate.
extern crate self as aoc_solver;

mod error;
mod instance;
mod registry;
mod solver;

// Re-export public API
pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    BASE_YEAR, DAYS_PER_YEAR, FactoryInfo, MAX_YEARS, RegisterableSolver, SolverFactory,
    SolverFactoryStorage, SolverPlugin, SolverRegistry, SolverRegistryBuilder,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Re-export the derive macro
pub use aoc_solver_macros::AocSolver;
