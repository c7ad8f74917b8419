use aoc_runner::{AocParser, ParseError, PartSolver, SolveError};
use aoc_runner_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 6, tags = ["sliding-window"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = &'a [u8];

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let signal = input.trim_end().as_bytes();
        if let Some(&c) = signal.iter().find(|c| !c.is_ascii_lowercase()) {
            return Err(ParseError::InvalidFormat(format!(
                "signal must be lowercase letters, found {:?}",
                c as char
            )));
        }
        Ok(signal)
    }
}

/// Index just past the first window of `len` pairwise-distinct bytes.
fn marker_end(signal: &[u8], len: usize) -> Result<String, SolveError> {
    signal
        .windows(len)
        .position(|w| {
            let mut seen = 0u32;
            w.iter().all(|&c| {
                let bit = 1 << (c - b'a');
                let fresh = seen & bit == 0;
                seen |= bit;
                fresh
            })
        })
        .map(|i| (i + len).to_string())
        .ok_or_else(|| SolveError::SolveFailed("no marker in signal".into()))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        marker_end(shared, 4)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        marker_end(shared, 14)
    }
}

#[cfg(test)]
mod tests {
    use super::Solver;
    use aoc_runner::{AocParser, Solver as _};

    fn solve(input: &str, part: u8) -> String {
        let mut shared = Solver::parse(input).unwrap();
        Solver::solve_part(&mut shared, part).unwrap()
    }

    #[test]
    fn part1_samples() {
        assert_eq!(solve("mjqjpqmgbljsphdztnvjfqwrcgsmlb", 1), "7");
        assert_eq!(solve("bvwbjplbgvbhsrlpgdmjqwftvncz", 1), "5");
        assert_eq!(solve("nppdvjthqldpwncqszvftbrmjlhg", 1), "6");
        assert_eq!(solve("nznrnfrfntjfmvfwmzdfjlvtqnbhcprsg", 1), "10");
        assert_eq!(solve("zcfzfwzzqfrljwzlrfnpqdbhtmscgvjw", 1), "11");
    }

    #[test]
    fn part2_samples() {
        assert_eq!(solve("mjqjpqmgbljsphdztnvjfqwrcgsmlb", 2), "19");
        assert_eq!(solve("bvwbjplbgvbhsrlpgdmjqwftvncz", 2), "23");
    }

    #[test]
    fn no_marker_is_an_error() {
        let mut shared = Solver::parse("aaaaaaaa").unwrap();
        assert!(Solver::solve_part(&mut shared, 1).is_err());
    }
}
