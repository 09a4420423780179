use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError};
use itertools::Itertools;

/// Rucksack Reorganization: find items shared between compartments and
/// between groups of three rucksacks.
#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

/// Priority of an item: `a..=z` is 1..=26 and `A..=Z` is 27..=52.
///
/// Anything outside those letters has no priority.
pub fn priority(item: char) -> Option<u32> {
    match item {
        'a'..='z' => Some(item as u32 - 'a' as u32 + 1),
        'A'..='Z' => Some(item as u32 - 'A' as u32 + 27),
        _ => None,
    }
}

/// First item of `first` that also appears in `second`, scanning `first` in order.
fn common_item(first: &str, second: &str) -> Option<char> {
    first
        .chars()
        .find(|&item| second.chars().any(|other| other == item))
}

/// First item of `first` that appears in both `second` and `third`.
fn common_group_item(first: &str, second: &str, third: &str) -> Option<char> {
    first.chars().find(|&item| {
        second.chars().any(|other| other == item) && third.chars().any(|other| other == item)
    })
}

/// Priority of an optional common item; no common item contributes 0.
fn item_value(item: Option<char>) -> Result<u32, SolveError> {
    match item {
        None => Ok(0),
        // Input from `Solver::parse` holds letters only, so this errors only
        // for items that bypassed parsing
        Some(item) => priority(item)
            .ok_or_else(|| SolveError::failed(format!("item {item:?} has no priority"))),
    }
}

impl AocParser for Solver {
    type SharedData<'a> = &'a [String];

    fn parse<'a>(lines: &'a [String]) -> Result<Self::SharedData<'a>, ParseError> {
        for (index, line) in lines.iter().enumerate() {
            if let Some(item) = line.chars().find(|item| !item.is_ascii_alphabetic()) {
                return Err(ParseError::invalid_line(
                    index,
                    line,
                    format!("unexpected item {item:?}"),
                ));
            }
        }
        Ok(lines)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut total = 0;
        for rucksack in shared.iter() {
            // ASCII only, so the midpoint is a char boundary
            let (left, right) = rucksack.split_at(rucksack.len() / 2);
            total += item_value(common_item(left, right))?;
        }
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &Self::SharedData<'_>) -> Result<String, SolveError> {
        if shared.len() % 3 != 0 {
            return Err(SolveError::failed(format!(
                "{} rucksacks do not form groups of three",
                shared.len()
            )));
        }

        let mut total = 0;
        for (first, second, third) in shared.iter().tuples::<(_, _, _)>() {
            total += item_value(common_group_item(first, second, third))?;
        }
        Ok(total.to_string())
    }
}
