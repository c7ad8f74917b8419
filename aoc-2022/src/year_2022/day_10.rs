use aoc_runner::{AocParser, ParseError, PartSolver, SolveError};
use aoc_runner_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 10, tags = ["vm"])]
pub struct Solver;

const CRT_WIDTH: i64 = 40;
const CRT_HEIGHT: i64 = 6;

impl AocParser for Solver {
    /// Value of the X register during each cycle, starting at cycle 1.
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut x = 1;
        let mut trace = Vec::new();
        for (idx, line) in input.trim_end().lines().enumerate() {
            match line.split_once(' ') {
                None if line == "noop" => trace.push(x),
                Some(("addx", v)) => {
                    let v: i64 = v.parse().map_err(|_| {
                        ParseError::InvalidFormat(format!(
                            "(line {}) bad addx operand {v:?}",
                            idx + 1
                        ))
                    })?;
                    trace.push(x);
                    trace.push(x);
                    x += v;
                }
                _ => {
                    return Err(ParseError::InvalidFormat(format!(
                        "(line {}) unknown instruction {line:?}",
                        idx + 1
                    )));
                }
            }
        }
        Ok(trace)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        (20..=220)
            .step_by(40)
            .map(|cycle: usize| {
                shared
                    .get(cycle - 1)
                    .map(|x| cycle as i64 * x)
                    .ok_or_else(|| {
                        SolveError::SolveFailed(
                            format!("program halts before cycle {cycle}").into(),
                        )
                    })
            })
            .sum::<Result<i64, _>>()
            .map(|total| total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        if (shared.len() as i64) < CRT_WIDTH * CRT_HEIGHT {
            return Err(SolveError::SolveFailed(
                "program halts before the frame finishes".into(),
            ));
        }
        let mut screen = String::new();
        for row in 0..CRT_HEIGHT {
            if row > 0 {
                screen.push('\n');
            }
            for col in 0..CRT_WIDTH {
                let x = shared[(row * CRT_WIDTH + col) as usize];
                screen.push(if (col - x).abs() <= 1 { '#' } else { '.' });
            }
        }
        Ok(screen)
    }
}

#[cfg(test)]
mod tests {
    use super::Solver;
    use aoc_runner::{AocParser, Solver as _};

    const SAMPLE: &str = "\
addx 15
addx -11
addx 6
addx -3
addx 5
addx -1
addx -8
addx 13
addx 4
noop
addx -1
addx 5
addx -1
addx 5
addx -1
addx 5
addx -1
addx 5
addx -1
addx -35
addx 1
addx 24
addx -19
addx 1
addx 16
addx -11
noop
noop
addx 21
addx -15
noop
noop
addx -3
addx 9
addx 1
addx -3
addx 8
addx 1
addx 5
noop
noop
noop
noop
noop
addx -36
noop
addx 1
addx 7
noop
noop
noop
addx 2
addx 6
noop
noop
noop
noop
noop
addx 1
noop
noop
addx 7
addx 1
noop
addx -13
addx 13
addx 7
noop
addx 1
addx -33
noop
noop
noop
addx 2
noop
noop
noop
addx 8
noop
addx -1
addx 2
addx 1
noop
addx 17
addx -9
addx 1
addx 1
addx -3
addx 11
noop
noop
addx 1
noop
addx 1
noop
noop
addx -13
addx -19
addx 1
addx 3
addx 26
addx -30
addx 12
addx -1
addx 3
addx 1
noop
noop
noop
addx -9
addx 18
addx 1
addx 2
noop
noop
addx 9
noop
noop
noop
addx -1
addx 2
addx -37
addx 1
addx 3
noop
addx 15
addx -21
addx 22
addx -6
addx 1
noop
addx 2
addx 1
noop
addx -10
noop
noop
addx 20
addx 1
addx 2
addx 2
addx -6
addx -11
noop
noop
noop
";

    const EXPECTED_IMAGE: &str = "\
##..##..##..##..##..##..##..##..##..##..
###...###...###...###...###...###...###.
####....####....####....####....####....
#####.....#####.....#####.....#####.....
######......######......######......####
#######.......#######.......#######.....";

    #[test]
    fn part1_sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "13140");
    }

    #[test]
    fn part2_renders_sample_image() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), EXPECTED_IMAGE);
    }

    #[test]
    fn rejects_unknown_instruction() {
        assert!(Solver::parse("jmp 4\n").is_err());
    }

    #[test]
    fn short_program_is_an_error_in_both_parts() {
        let mut shared = Solver::parse("noop\naddx 3\n").unwrap();
        assert!(Solver::solve_part(&mut shared, 1).is_err());
        assert!(Solver::solve_part(&mut shared, 2).is_err());
    }
}
