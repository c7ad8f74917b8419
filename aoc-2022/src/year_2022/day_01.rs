use aoc_runner::{AocParser, ParseError, PartSolver, SolveError};
use aoc_runner_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 1, tags = ["parsing"])]
pub struct Solver;

impl AocParser for Solver {
    /// Calorie totals per elf, sorted descending.
    type SharedData<'a> = Vec<u64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut totals = input
            .trim_end()
            .split("\n\n")
            .map(|group| {
                group
                    .lines()
                    .map(|line| {
                        line.trim().parse::<u64>().map_err(|_| {
                            ParseError::InvalidFormat(format!("expected calorie count, got {line:?}"))
                        })
                    })
                    .sum()
            })
            .collect::<Result<Vec<u64>, _>>()?;

        totals.sort_unstable_by(|a, b| b.cmp(a));
        Ok(totals)
    }
}

fn top_k_sum(totals: &[u64], k: usize) -> u64 {
    totals.iter().take(k).sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(top_k_sum(shared, 1).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(top_k_sum(shared, 3).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::Solver;
    use aoc_runner::{AocParser, Solver as _};

    const SAMPLE: &str = "\
1000
2000
3000

4000

5000
6000

7000
8000
9000

10000
";

    #[test]
    fn part1_sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "24000");
    }

    #[test]
    fn part2_sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "45000");
    }

    #[test]
    fn rejects_garbage() {
        assert!(Solver::parse("12\nnope\n").is_err());
    }
}
