use anyhow::{Context, anyhow, bail};
use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError};

/// Rock Paper Scissors: score a strategy guide of `<opponent> <column>` rounds.
///
/// Part 1 reads the column as the weapon to play, part 2 as the outcome to
/// reach.
#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weapon {
    Rock,
    Paper,
    Scissors,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Lose,
    Tie,
    Win,
}

/// Second column of the guide, interpreted differently per part
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    X,
    Y,
    Z,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    opponent: Weapon,
    column: Column,
}

/// Round score indexed by outcome, then by the weapon played.
const PAYOFF: [[u32; 3]; 3] = [
    // Rock Paper Scissors
    [1, 2, 3], // Lose
    [4, 5, 6], // Tie
    [7, 8, 9], // Win
];

impl Weapon {
    /// The weapon this one defeats
    fn beats(self) -> Weapon {
        match self {
            Weapon::Rock => Weapon::Scissors,
            Weapon::Paper => Weapon::Rock,
            Weapon::Scissors => Weapon::Paper,
        }
    }

    /// The weapon that defeats this one
    fn beaten_by(self) -> Weapon {
        match self {
            Weapon::Rock => Weapon::Paper,
            Weapon::Paper => Weapon::Scissors,
            Weapon::Scissors => Weapon::Rock,
        }
    }

    /// What to play against `opponent` to reach `outcome`
    fn for_outcome(opponent: Weapon, outcome: Outcome) -> Weapon {
        match outcome {
            Outcome::Lose => opponent.beats(),
            Outcome::Tie => opponent,
            Outcome::Win => opponent.beaten_by(),
        }
    }
}

impl Outcome {
    /// Outcome of playing `own` against `opponent`
    fn of(own: Weapon, opponent: Weapon) -> Outcome {
        if own == opponent {
            Outcome::Tie
        } else if own.beats() == opponent {
            Outcome::Win
        } else {
            Outcome::Lose
        }
    }
}

impl Column {
    fn as_weapon(self) -> Weapon {
        match self {
            Column::X => Weapon::Rock,
            Column::Y => Weapon::Paper,
            Column::Z => Weapon::Scissors,
        }
    }

    fn as_outcome(self) -> Outcome {
        match self {
            Column::X => Outcome::Lose,
            Column::Y => Outcome::Tie,
            Column::Z => Outcome::Win,
        }
    }
}

fn score(outcome: Outcome, own: Weapon) -> u32 {
    PAYOFF[outcome as usize][own as usize]
}

fn parse_round(line: &str) -> anyhow::Result<Round> {
    let (opponent, column) = line
        .split_once(' ')
        .context("expected '<opponent> <column>'")?;

    let opponent = match opponent {
        "A" => Weapon::Rock,
        "B" => Weapon::Paper,
        "C" => Weapon::Scissors,
        other => bail!("unknown opponent symbol {other:?}"),
    };
    let column = match column {
        "X" => Column::X,
        "Y" => Column::Y,
        "Z" => Column::Z,
        other => return Err(anyhow!("unknown strategy symbol {other:?}")),
    };

    Ok(Round { opponent, column })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Round>;

    fn parse<'a>(lines: &'a [String]) -> Result<Self::SharedData<'a>, ParseError> {
        lines
            .iter()
            .enumerate()
            .map(|(index, line)| {
                parse_round(line).map_err(|e| ParseError::invalid_line(index, line, format!("{e:#}")))
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u32 = shared
            .iter()
            .map(|round| {
                let own = round.column.as_weapon();
                score(Outcome::of(own, round.opponent), own)
            })
            .sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u32 = shared
            .iter()
            .map(|round| {
                let outcome = round.column.as_outcome();
                score(outcome, Weapon::for_outcome(round.opponent, outcome))
            })
            .sum();
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const WEAPONS: [Weapon; 3] = [Weapon::Rock, Weapon::Paper, Weapon::Scissors];
    const OUTCOMES: [Outcome; 3] = [Outcome::Lose, Outcome::Tie, Outcome::Win];

    fn solve(text: &str, part: u8) -> String {
        let lines: Vec<String> = text.lines().map(String::from).collect();
        let shared = Solver::parse(&lines).unwrap();
        Solver::solve_part(&shared, part).unwrap()
    }

    #[test]
    fn test_single_round() {
        assert_eq!(solve("A Y", 1), "8");
        assert_eq!(solve("A Y", 2), "4");
    }

    #[test]
    fn test_example() {
        let guide = "A Y\nB X\nC Z";
        assert_eq!(solve(guide, 1), "15");
        assert_eq!(solve(guide, 2), "12");
    }

    #[test]
    fn test_payoff_table_matches_rules() {
        for own in WEAPONS {
            let base = own as u32 + 1;
            for outcome in OUTCOMES {
                let bonus = outcome as u32 * 3;
                assert_eq!(score(outcome, own), base + bonus, "{own:?} {outcome:?}");
            }
        }
    }

    #[test]
    fn test_outcome_relations() {
        for opponent in WEAPONS {
            for outcome in OUTCOMES {
                let own = Weapon::for_outcome(opponent, outcome);
                assert_eq!(Outcome::of(own, opponent), outcome);
            }
            assert_eq!(Outcome::of(opponent.beaten_by(), opponent), Outcome::Win);
            assert_eq!(Outcome::of(opponent.beats(), opponent), Outcome::Lose);
        }
    }

    #[test]
    fn test_unknown_symbol_rejected() {
        let lines = vec!["A Y".to_string(), "D X".to_string()];
        match Solver::parse(&lines) {
            Err(ParseError::InvalidLine { line, content, .. }) => {
                assert_eq!(line, 2);
                assert_eq!(content, "D X");
            }
            other => panic!("expected InvalidLine, got {other:?}"),
        }

        let lines = vec!["AY".to_string()];
        assert!(Solver::parse(&lines).is_err());
    }
}
