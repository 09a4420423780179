use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError};

/// Camp Cleanup: placeholder with no puzzle logic. Both parts answer `0`.
#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = ();

    fn parse<'a>(_lines: &'a [String]) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(())
    }
}

impl PartSolver<1> for Solver {
    fn solve(_shared: &Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(0.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(_shared: &Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(0.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    #[test]
    fn test_always_zero() {
        let lines = vec!["2-4,6-8".to_string(), "5-7,7-9".to_string()];
        let shared = Solver::parse(&lines).unwrap();
        assert_eq!(Solver::solve_part(&shared, 1).unwrap(), "0");
        assert_eq!(Solver::solve_part(&shared, 2).unwrap(), "0");
    }
}
