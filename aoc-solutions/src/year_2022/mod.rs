//! Solutions for Advent of Code 2022

use aoc_solver::SolverPlugin;

pub mod day_1;
pub mod day_2;
pub mod day_3;
pub mod day_4;

/// Implemented days of 2022
pub static SOLVERS: &[SolverPlugin] = &[
    SolverPlugin {
        year: 2022,
        day: 1,
        solver: &day_1::Solver,
    },
    SolverPlugin {
        year: 2022,
        day: 2,
        solver: &day_2::Solver,
    },
    SolverPlugin {
        year: 2022,
        day: 3,
        solver: &day_3::Solver,
    },
    SolverPlugin {
        year: 2022,
        day: 4,
        solver: &day_4::Solver,
    },
];
