use aoc_runner::{AocParser, ParseError, PartSolver, SolveError};
use aoc_runner_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 2, tags = ["arithmetic"])]
pub struct Solver;

/// One strategy-guide line: opponent column and own column, both mapped to 0-2.
///
/// The meaning of the second column differs between parts: a move for part 1,
/// a desired outcome (lose/draw/win) for part 2.
#[derive(Debug, Clone, Copy)]
pub struct Round {
    opponent: u8,
    own: u8,
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Round>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .trim_end()
            .lines()
            .map(|line| match line.as_bytes() {
                [a @ b'A'..=b'C', b' ', b @ b'X'..=b'Z'] => Ok(Round {
                    opponent: a - b'A',
                    own: b - b'X',
                }),
                _ => Err(ParseError::InvalidFormat(format!(
                    "expected \"<A|B|C> <X|Y|Z>\", got {line:?}"
                ))),
            })
            .collect()
    }
}

/// Score a single round given both moves (0 = rock, 1 = paper, 2 = scissors).
fn score(opponent: u8, own: u8) -> u64 {
    let outcome = match (3 + own - opponent) % 3 {
        0 => 3, // draw
        1 => 6, // win
        _ => 0, // loss
    };
    outcome + u64::from(own) + 1
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u64 = shared.iter().map(|r| score(r.opponent, r.own)).sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // own column is the outcome: 0 = lose, 1 = draw, 2 = win. The move
        // producing that outcome is opponent - 1, opponent, or opponent + 1.
        let total: u64 = shared
            .iter()
            .map(|r| {
                let own = (r.opponent + r.own + 2) % 3;
                score(r.opponent, own)
            })
            .sum();
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::Solver;
    use aoc_runner::{AocParser, Solver as _};

    const SAMPLE: &str = "A Y\nB X\nC Z\n";

    #[test]
    fn part1_sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "15");
    }

    #[test]
    fn part2_sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "12");
    }

    #[test]
    fn rejects_bad_column() {
        assert!(Solver::parse("A D\n").is_err());
    }
}
