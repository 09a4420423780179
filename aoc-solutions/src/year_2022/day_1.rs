use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError};

/// Calorie Counting: blank-line separated groups of calorie counts, one group per elf.
#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    /// Calories carried by each elf, largest first
    totals: Vec<u64>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(lines: &'a [String]) -> Result<Self::SharedData<'a>, ParseError> {
        let mut totals = Vec::new();
        let mut total = 0u64;

        for (index, line) in lines.iter().enumerate() {
            if line.is_empty() {
                totals.push(total);
                total = 0;
                continue;
            }

            let calories = line
                .parse::<u64>()
                .map_err(|e| ParseError::invalid_line(index, line, e))?;
            total = total
                .checked_add(calories)
                .ok_or_else(|| ParseError::invalid_line(index, line, "calorie total overflows"))?;
        }

        // The last group has no blank line after it
        totals.push(total);
        totals.sort_unstable_by(|a, b| b.cmp(a));

        Ok(SharedData { totals })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.top(1).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.top(3).to_string())
    }
}

impl SharedData {
    /// Sum of the `n` largest totals (all of them when there are fewer)
    fn top(&self, n: usize) -> u64 {
        self.totals.iter().take(n).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;
    use proptest::prelude::*;

    const EXAMPLE: &str = "1000\n2000\n3000\n\n4000\n\n5000\n6000\n\n7000\n8000\n9000\n\n10000";

    fn lines(text: &str) -> Vec<String> {
        text.split('\n').map(String::from).collect()
    }

    fn solve(text: &str, part: u8) -> String {
        let lines = lines(text);
        let shared = Solver::parse(&lines).unwrap();
        Solver::solve_part(&shared, part).unwrap()
    }

    #[test]
    fn test_example() {
        assert_eq!(solve(EXAMPLE, 1), "24000");
        assert_eq!(solve(EXAMPLE, 2), "45000");
    }

    #[test]
    fn test_trailing_group_without_blank_line() {
        let lines = lines("3\n1\n\n9\n2");
        let shared = Solver::parse(&lines).unwrap();
        assert_eq!(shared.totals, vec![11, 4]);
        assert_eq!(Solver::solve_part(&shared, 1).unwrap(), "11");
        assert_eq!(Solver::solve_part(&shared, 2).unwrap(), "15");
    }

    #[test]
    fn test_invalid_line_reported() {
        let lines = lines("100\n\nabc\n5");
        match Solver::parse(&lines) {
            Err(ParseError::InvalidLine { line, content, .. }) => {
                assert_eq!(line, 3);
                assert_eq!(content, "abc");
            }
            other => panic!("expected InvalidLine, got {other:?}"),
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// Part 1 is the largest group sum and part 2 the sum of the three largest.
        #[test]
        fn prop_top_sums(groups in prop::collection::vec(prop::collection::vec(0u64..100_000, 1..5), 1..8)) {
            let text = groups
                .iter()
                .map(|group| group.iter().map(u64::to_string).collect::<Vec<_>>().join("\n"))
                .collect::<Vec<_>>()
                .join("\n\n");

            let mut sums: Vec<u64> = groups.iter().map(|group| group.iter().sum()).collect();
            sums.sort_unstable_by(|a, b| b.cmp(a));

            prop_assert_eq!(solve(&text, 1), sums[0].to_string());
            prop_assert_eq!(solve(&text, 2), sums.iter().take(3).sum::<u64>().to_string());
        }
    }
}
