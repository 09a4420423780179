//! Advent of Code puzzle solutions
//!
//! Solutions are organized by year. Each year module exposes a `SOLVERS`
//! table naming the solver for every implemented day; [`register_all`]
//! registers every table.

use aoc_solver::{RegistrationError, SolverRegistryBuilder};

pub mod year_2022;

/// Register every year's solver table with the builder
pub fn register_all(
    builder: SolverRegistryBuilder,
) -> Result<SolverRegistryBuilder, RegistrationError> {
    builder.register_plugins(year_2022::SOLVERS)
}
