use anyhow::{Context, anyhow};
use aoc_runner::{AocParser, ParseError, PartSolver, SolveError};
use aoc_runner_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 4, tags = ["ranges"])]
pub struct Solver;

#[derive(Debug, Clone, Copy)]
pub struct Assignment {
    start: u32,
    end: u32,
}

impl Assignment {
    fn contains(&self, other: &Assignment) -> bool {
        self.start <= other.start && self.end >= other.end
    }

    fn overlaps(&self, other: &Assignment) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

fn parse_range(s: &str) -> anyhow::Result<Assignment> {
    let (start, end) = s
        .split_once('-')
        .ok_or_else(|| anyhow!("expected <start>-<end>, got {s:?}"))?;
    Ok(Assignment {
        start: start.parse().context("bad range start")?,
        end: end.parse().context("bad range end")?,
    })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<(Assignment, Assignment)>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .trim_end()
            .lines()
            .enumerate()
            .map(|(idx, line)| {
                let (first, second) = line
                    .split_once(',')
                    .ok_or_else(|| anyhow!("expected two ranges separated by a comma"))
                    .and_then(|(a, b)| Ok((parse_range(a)?, parse_range(b)?)))
                    .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {e}", idx + 1)))?;
                Ok((first, second))
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let count = shared
            .iter()
            .filter(|(a, b)| a.contains(b) || b.contains(a))
            .count();
        Ok(count.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let count = shared.iter().filter(|(a, b)| a.overlaps(b)).count();
        Ok(count.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::Solver;
    use aoc_runner::{AocParser, Solver as _};

    const SAMPLE: &str = "\
2-4,6-8
2-3,4-5
5-7,7-9
2-8,3-7
6-6,4-6
2-6,4-8
";

    #[test]
    fn part1_sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "2");
    }

    #[test]
    fn part2_sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "4");
    }

    #[test]
    fn parse_error_names_line() {
        let err = Solver::parse("1-2,3-4\n5-6\n").unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
