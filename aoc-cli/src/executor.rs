//! Sequential executor solving and verifying the days of one year

use crate::error::DayError;
use crate::layout::CalendarLayout;
use crate::output::format_duration;
use aoc_puzzle::{PuzzleDescription, read_lines};
use aoc_solver::SolverRegistry;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Days in an Advent of Code calendar
pub const DAYS: std::ops::RangeInclusive<u8> = 1..=25;

/// Lifecycle of a single day
#[derive(Debug)]
pub enum DayState {
    NotStarted,
    Running,
    Solved,
    Errored(DayError),
}

impl DayState {
    /// Whether the day has finished, successfully or not
    pub fn is_terminal(&self) -> bool {
        matches!(self, DayState::Solved | DayState::Errored(_))
    }

    fn start(self) -> Self {
        debug_assert!(matches!(self, DayState::NotStarted));
        DayState::Running
    }

    fn finish(self, outcome: Result<(), DayError>) -> Self {
        debug_assert!(matches!(self, DayState::Running));
        match outcome {
            Ok(()) => DayState::Solved,
            Err(e) => DayState::Errored(e),
        }
    }
}

/// Report for one day, emitted once the day reaches a terminal state
#[derive(Debug)]
pub struct DayResult {
    pub day: u8,
    pub title: String,
    /// Wall-clock time from title lookup to verdict
    pub duration: Duration,
    pub state: DayState,
}

/// Runs days 1..=25 of a year in order
pub struct Executor<'a> {
    registry: &'a SolverRegistry,
    layout: &'a CalendarLayout,
    day_filter: Option<u8>,
}

impl<'a> Executor<'a> {
    pub fn new(registry: &'a SolverRegistry, layout: &'a CalendarLayout) -> Self {
        Self {
            registry,
            layout,
            day_filter: None,
        }
    }

    /// Only run `day` when set
    pub fn with_day_filter(mut self, day_filter: Option<u8>) -> Self {
        self.day_filter = day_filter;
        self
    }

    /// Run every day of `year`, handing each finished day to `report`
    ///
    /// Days whose title cannot be read are skipped without a report. No day's
    /// failure stops the remaining days.
    pub fn execute(&self, year: u16, mut report: impl FnMut(DayResult)) {
        info!(year, "running year");

        for day in DAYS.filter(|day| self.day_filter.is_none_or(|wanted| wanted == *day)) {
            if let Some(result) = self.run_day(year, day) {
                report(result);
            }
        }
    }

    fn run_day(&self, year: u16, day: u8) -> Option<DayResult> {
        let mut state = DayState::NotStarted;
        let start = Instant::now();

        let description = self.layout.description(year, day);
        let title = match description.title() {
            Ok(title) => title,
            Err(e) => {
                warn!(year, day, error = %e, "failed to get puzzle title, skipping day");
                return None;
            }
        };

        debug!(year, day, title = %title, "starting day");
        state = state.start();
        state = state.finish(self.solve_day(year, day, &description));
        debug_assert!(state.is_terminal());

        Some(DayResult {
            day,
            title,
            duration: start.elapsed(),
            state,
        })
    }

    /// Solve every part of a day and compare each answer with the recorded one
    ///
    /// The first failing part ends the day.
    fn solve_day(
        &self,
        year: u16,
        day: u8,
        description: &PuzzleDescription,
    ) -> Result<(), DayError> {
        if !self.registry.storage().contains(year, day) {
            return Err(DayError::NotImplemented);
        }

        let lines =
            read_lines(self.layout.input_path(year, day)).map_err(DayError::Input)?;
        let solver = self.registry.create_solver(year, day, &lines)?;
        debug!(
            year,
            day,
            parse_time = %format_duration(solver.parse_duration()),
            "parsed input"
        );

        for part in 1..=solver.parts() {
            let result = solver
                .solve(part)
                .map_err(|source| DayError::Solve { part, source })?;
            debug!(
                year,
                day,
                part,
                answer = %result.answer,
                solve_time = %format_duration(result.duration()),
                "solved part"
            );

            let expected = description
                .solution(part)
                .map_err(|source| DayError::Expected { part, source })?;
            if result.answer != expected.to_string() {
                return Err(DayError::Mismatch {
                    part,
                    actual: result.answer,
                    expected,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::SolverRegistryBuilder;
    use std::fs;
    use tempfile::TempDir;

    fn registry() -> SolverRegistry {
        aoc_solutions::register_all(SolverRegistryBuilder::new())
            .unwrap()
            .build()
    }

    fn description(title: &str, answers: &[i64]) -> String {
        let mut content = format!("--- Day 0: {title} ---\n\n");
        for answer in answers {
            content.push_str(&format!("Your puzzle answer was {answer}.\n\n"));
        }
        content
    }

    /// Write a day directory; `None` leaves the file out
    fn write_day(
        layout: &CalendarLayout,
        year: u16,
        day: u8,
        puzzle: Option<&str>,
        input: Option<&str>,
    ) {
        let dir = layout.day_dir(year, day);
        fs::create_dir_all(&dir).unwrap();
        if let Some(puzzle) = puzzle {
            fs::write(dir.join("puzzle.txt"), puzzle).unwrap();
        }
        if let Some(input) = input {
            fs::write(dir.join("input.txt"), input).unwrap();
        }
    }

    fn run(layout: &CalendarLayout, day_filter: Option<u8>) -> Vec<DayResult> {
        let registry = registry();
        let mut results = Vec::new();
        Executor::new(&registry, layout)
            .with_day_filter(day_filter)
            .execute(2022, |result| results.push(result));
        results
    }

    #[test]
    fn test_solved_day() {
        let temp = TempDir::new().unwrap();
        let layout = CalendarLayout::new(temp.path());
        write_day(
            &layout,
            2022,
            1,
            Some(&description("Calorie Counting", &[11, 15])),
            Some("3\n1\n\n9\n2\n"),
        );

        let results = run(&layout, None);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].day, 1);
        assert_eq!(results[0].title, "Calorie Counting");
        assert!(matches!(results[0].state, DayState::Solved));
    }

    #[test]
    fn test_mismatch_names_part() {
        let temp = TempDir::new().unwrap();
        let layout = CalendarLayout::new(temp.path());
        write_day(
            &layout,
            2022,
            2,
            Some(&description("Rock Paper Scissors", &[8, 5])),
            Some("A Y\n"),
        );

        let results = run(&layout, None);
        match &results[0].state {
            DayState::Errored(DayError::Mismatch {
                part,
                actual,
                expected,
            }) => {
                assert_eq!(*part, 2);
                assert_eq!(actual, "4");
                assert_eq!(*expected, 5);
            }
            other => panic!("expected Mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_unregistered_day_not_implemented() {
        let temp = TempDir::new().unwrap();
        let layout = CalendarLayout::new(temp.path());
        write_day(&layout, 2022, 5, Some(&description("Supply Stacks", &[])), None);
        write_day(&layout, 2022, 6, Some(&description("Tuning Trouble", &[])), None);

        let results = run(&layout, None);
        let days: Vec<u8> = results.iter().map(|r| r.day).collect();
        assert_eq!(days, vec![5, 6]);
        for result in &results {
            match &result.state {
                DayState::Errored(e @ DayError::NotImplemented) => {
                    assert_eq!(e.to_string(), "not implemented")
                }
                other => panic!("expected NotImplemented, got {other:?}"),
            }
        }
        assert_eq!(results[1].title, "Tuning Trouble");
    }

    #[test]
    fn test_missing_title_skips_day() {
        let temp = TempDir::new().unwrap();
        let layout = CalendarLayout::new(temp.path());
        write_day(&layout, 2022, 1, None, Some("1\n"));
        write_day(&layout, 2022, 4, Some(&description("Camp Cleanup", &[0, 0])), Some(""));

        let results = run(&layout, None);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].day, 4);
        assert!(matches!(results[0].state, DayState::Solved));
    }

    #[test]
    fn test_failures_do_not_stop_later_days() {
        let temp = TempDir::new().unwrap();
        let layout = CalendarLayout::new(temp.path());
        // Missing input
        write_day(&layout, 2022, 1, Some(&description("Calorie Counting", &[1, 1])), None);
        // Unparseable input
        write_day(
            &layout,
            2022,
            3,
            Some(&description("Rucksack Reorganization", &[1, 1])),
            Some("ab1ab1\n"),
        );
        // Recorded answers missing
        write_day(&layout, 2022, 4, Some(&description("Camp Cleanup", &[])), Some(""));

        let results = run(&layout, None);
        let days: Vec<u8> = results.iter().map(|r| r.day).collect();
        assert_eq!(days, vec![1, 3, 4]);
        assert!(matches!(
            results[0].state,
            DayState::Errored(DayError::Input(_))
        ));
        match &results[1].state {
            DayState::Errored(e @ DayError::Parse(_)) => assert_eq!(
                e.to_string(),
                "failed to parse input: invalid input line 1 \"ab1ab1\": unexpected item '1'"
            ),
            other => panic!("expected Parse, got {other:?}"),
        }
        assert!(matches!(
            results[2].state,
            DayState::Errored(DayError::Expected { part: 1, .. })
        ));
        assert!(results.iter().all(|r| r.state.is_terminal()));
    }

    #[test]
    fn test_day_filter() {
        let temp = TempDir::new().unwrap();
        let layout = CalendarLayout::new(temp.path());
        write_day(&layout, 2022, 4, Some(&description("Camp Cleanup", &[0, 0])), Some(""));
        write_day(&layout, 2022, 5, Some(&description("Supply Stacks", &[])), None);

        let results = run(&layout, Some(5));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].day, 5);
    }
}
