//! Property-based tests for the AocSolver derive macro

use aoc_solver::{
    AocParser, AocSolver, DynSolver, ParseError, PartSolver, SolveError, Solver, SolverPlugin,
    SolverRegistryBuilder,
};
use proptest::prelude::*;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct TestSolver;

impl AocParser for TestSolver {
    type SharedData<'a> = Vec<i64>;

    fn parse<'a>(lines: &'a [String]) -> Result<Self::SharedData<'a>, ParseError> {
        lines
            .iter()
            .enumerate()
            .filter(|(_, l)| !l.is_empty())
            .map(|(i, l)| {
                l.parse::<i64>()
                    .map_err(|e| ParseError::invalid_line(i, l, e))
            })
            .collect()
    }
}

impl PartSolver<1> for TestSolver {
    fn solve(shared: &Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i64>().to_string())
    }
}

impl PartSolver<2> for TestSolver {
    fn solve(shared: &Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().product::<i64>().to_string())
    }
}

fn to_lines(numbers: &[i64]) -> Vec<String> {
    numbers.iter().map(|n| n.to_string()).collect()
}

/// Part N dispatches to `PartSolver<N>`.
mod part_dispatch {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn solve_part_dispatches_to_correct_part_solver(
            numbers in prop::collection::vec(1i64..10, 1..5),
            part in 1u8..=2
        ) {
            let lines = to_lines(&numbers);
            let shared = <TestSolver as AocParser>::parse(&lines).unwrap();

            let solver_result = <TestSolver as Solver>::solve_part(&shared, part);

            let direct_result = match part {
                1 => <TestSolver as PartSolver<1>>::solve(&shared),
                2 => <TestSolver as PartSolver<2>>::solve(&shared),
                _ => unreachable!(),
            };

            prop_assert_eq!(solver_result.unwrap(), direct_result.unwrap());
        }
    }
}

/// Parts outside 1..=max_parts are rejected.
mod invalid_part_rejection {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn invalid_part_returns_not_implemented(invalid_part in prop_oneof![Just(0u8), 3u8..=255]) {
            let lines = to_lines(&[1, 2, 3]);
            let shared = <TestSolver as AocParser>::parse(&lines).unwrap();

            let result = <TestSolver as Solver>::solve_part(&shared, invalid_part);

            match result {
                Err(SolveError::PartNotImplemented(p)) => prop_assert_eq!(p, invalid_part),
                _ => prop_assert!(false, "Expected PartNotImplemented error for part {}", invalid_part),
            }
        }
    }
}

/// Solving one part leaves the parsed data unchanged for the next.
mod parts_are_independent {
    use super::*;

    static TABLE: &[SolverPlugin] = &[SolverPlugin {
        year: 2022,
        day: 1,
        solver: &TestSolver,
    }];

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn part_order_does_not_matter(numbers in prop::collection::vec(1i64..100, 1..6)) {
            let registry = SolverRegistryBuilder::new().register_plugins(TABLE).unwrap().build();
            let lines = to_lines(&numbers);

            let forward = registry.create_solver(2022, 1, &lines).unwrap();
            let forward_answers = (forward.solve(1).unwrap().answer, forward.solve(2).unwrap().answer);

            let backward = registry.create_solver(2022, 1, &lines).unwrap();
            let part2 = backward.solve(2).unwrap().answer;
            let part1 = backward.solve(1).unwrap().answer;

            prop_assert_eq!(forward_answers, (part1, part2));
            prop_assert_eq!(forward.parts(), 2);
        }
    }
}

#[test]
fn parse_error_names_the_line() {
    let lines = to_lines(&[4, 5]).into_iter().chain(["x7".to_string()]).collect::<Vec<_>>();
    match <TestSolver as AocParser>::parse(&lines) {
        Err(ParseError::InvalidLine { line, content, .. }) => {
            assert_eq!(line, 3);
            assert_eq!(content, "x7");
        }
        other => panic!("expected InvalidLine, got {other:?}"),
    }
}
