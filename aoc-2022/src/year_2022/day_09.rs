use std::collections::HashSet;

use aoc_runner::{AocParser, ParseError, PartSolver, SolveError};
use aoc_runner_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 9, tags = ["simulation"])]
pub struct Solver;

pub type Motion = ((i32, i32), u32);

impl AocParser for Solver {
    type SharedData<'a> = Vec<Motion>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .trim_end()
            .lines()
            .enumerate()
            .map(|(idx, line)| {
                let bad_line =
                    |msg: String| ParseError::InvalidFormat(format!("(line {}) {msg}", idx + 1));
                let (dir, steps) = line
                    .split_once(' ')
                    .ok_or_else(|| bad_line("expected <direction> <steps>".into()))?;
                let dir = match dir {
                    "U" => (0, 1),
                    "D" => (0, -1),
                    "L" => (-1, 0),
                    "R" => (1, 0),
                    other => return Err(bad_line(format!("unknown direction {other:?}"))),
                };
                let steps = steps
                    .parse()
                    .map_err(|_| bad_line(format!("bad step count {steps:?}")))?;
                Ok((dir, steps))
            })
            .collect()
    }
}

/// Number of positions the last knot visits when the rope has `knots` knots.
fn tail_coverage(motions: &[Motion], knots: usize) -> usize {
    let mut rope = vec![(0i32, 0i32); knots];
    let mut visited = HashSet::from([(0, 0)]);
    for &((dx, dy), steps) in motions {
        for _ in 0..steps {
            rope[0].0 += dx;
            rope[0].1 += dy;
            for i in 1..rope.len() {
                let lead = rope[i - 1];
                let knot = &mut rope[i];
                let (gx, gy) = (lead.0 - knot.0, lead.1 - knot.1);
                if gx.abs() <= 1 && gy.abs() <= 1 {
                    break;
                }
                knot.0 += gx.signum();
                knot.1 += gy.signum();
            }
            if let Some(&tail) = rope.last() {
                visited.insert(tail);
            }
        }
    }
    visited.len()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(tail_coverage(shared, 2).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(tail_coverage(shared, 10).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::Solver;
    use aoc_runner::{AocParser, Solver as _};

    const SAMPLE: &str = "\
R 4
U 4
L 3
D 1
R 4
D 1
L 5
R 2
";

    const LARGER_SAMPLE: &str = "\
R 5
U 8
L 8
D 3
R 17
D 10
L 25
U 20
";

    #[test]
    fn part1_sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "13");
    }

    #[test]
    fn part2_short_rope_barely_moves() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "1");
    }

    #[test]
    fn part2_larger_sample() {
        let mut shared = Solver::parse(LARGER_SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "36");
    }

    #[test]
    fn rejects_diagonal_direction() {
        assert!(Solver::parse("Q 3\n").is_err());
    }
}
