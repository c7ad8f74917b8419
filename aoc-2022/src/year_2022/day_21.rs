use std::collections::HashMap;

use aoc_runner::{AocParser, ParseError, PartSolver, SolveError};
use aoc_runner_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 21, tags = ["expression-tree"])]
pub struct Solver;

const ROOT: &str = "root";
const HUMAN: &str = "humn";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

#[derive(Debug, Clone)]
pub enum Job<'a> {
    Number(i64),
    Math(&'a str, Op, &'a str),
}

pub type Riddle<'a> = HashMap<&'a str, Job<'a>>;

impl AocParser for Solver {
    type SharedData<'a> = Riddle<'a>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let monkeys: Riddle = input
            .trim_end()
            .lines()
            .map(|line| {
                let bad =
                    || ParseError::InvalidFormat(format!("bad monkey job {line:?}"));
                let (name, job) = line.split_once(": ").ok_or_else(bad)?;
                let job = match job.split(' ').collect::<Vec<_>>()[..] {
                    [number] => Job::Number(number.parse().map_err(|_| bad())?),
                    [lhs, op, rhs] => {
                        let op = match op {
                            "+" => Op::Add,
                            "-" => Op::Sub,
                            "*" => Op::Mul,
                            "/" => Op::Div,
                            _ => return Err(bad()),
                        };
                        Job::Math(lhs, op, rhs)
                    }
                    _ => return Err(bad()),
                };
                Ok((name, job))
            })
            .collect::<Result<_, _>>()?;
        if !monkeys.contains_key(ROOT) {
            return Err(ParseError::MissingData(format!("no {ROOT:?} monkey")));
        }
        Ok(monkeys)
    }
}

fn eval(monkeys: &Riddle, name: &str) -> Result<i64, SolveError> {
    match monkeys
        .get(name)
        .ok_or_else(|| SolveError::SolveFailed(format!("unknown monkey {name:?}").into()))?
    {
        Job::Number(n) => Ok(*n),
        Job::Math(lhs, op, rhs) => {
            let (a, b) = (eval(monkeys, lhs)?, eval(monkeys, rhs)?);
            match op {
                Op::Add => Ok(a + b),
                Op::Sub => Ok(a - b),
                Op::Mul => Ok(a * b),
                Op::Div if b != 0 && a % b == 0 => Ok(a / b),
                Op::Div => Err(SolveError::SolveFailed(
                    format!("{name:?} divides unevenly").into(),
                )),
            }
        }
    }
}

fn depends_on_human(monkeys: &Riddle, name: &str) -> bool {
    if name == HUMAN {
        return true;
    }
    match monkeys.get(name) {
        Some(Job::Math(lhs, _, rhs)) => {
            depends_on_human(monkeys, lhs) || depends_on_human(monkeys, rhs)
        }
        _ => false,
    }
}

/// Walks down the branch containing the human, inverting each operation to
/// find the value the human must yell for `name` to equal `target`.
fn required_yell(monkeys: &Riddle, name: &str, target: i64) -> Result<i64, SolveError> {
    if name == HUMAN {
        return Ok(target);
    }
    let Some(Job::Math(lhs, op, rhs)) = monkeys.get(name) else {
        return Err(SolveError::SolveFailed(
            format!("{name:?} cannot depend on the human").into(),
        ));
    };
    if depends_on_human(monkeys, lhs) {
        let known = eval(monkeys, rhs)?;
        let next = match op {
            Op::Add => target - known,
            Op::Sub => target + known,
            Op::Mul if known != 0 && target % known == 0 => target / known,
            Op::Div => target * known,
            _ => {
                return Err(SolveError::SolveFailed(
                    format!("cannot invert {name:?}").into(),
                ));
            }
        };
        required_yell(monkeys, lhs, next)
    } else {
        let known = eval(monkeys, lhs)?;
        // With the human on the right, subtraction and division flip.
        let next = match op {
            Op::Add => target - known,
            Op::Sub => known - target,
            Op::Mul if known != 0 && target % known == 0 => target / known,
            Op::Div if target != 0 && known % target == 0 => known / target,
            _ => {
                return Err(SolveError::SolveFailed(
                    format!("cannot invert {name:?}").into(),
                ));
            }
        };
        required_yell(monkeys, rhs, next)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(eval(shared, ROOT)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let Some(Job::Math(lhs, _, rhs)) = shared.get(ROOT) else {
            return Err(SolveError::SolveFailed(
                "root must compare two monkeys".into(),
            ));
        };
        let (human_side, other) = if depends_on_human(shared, lhs) {
            (lhs, rhs)
        } else {
            (rhs, lhs)
        };
        let target = eval(shared, other)?;
        Ok(required_yell(shared, human_side, target)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::Solver;
    use aoc_runner::{AocParser, Solver as _};

    const SAMPLE: &str = "\
root: pppw + sjmn
dbpl: 5
cczh: sllz + lgvd
zczc: 2
ptdq: humn - dvpt
dvpt: 3
lfqf: 4
humn: 5
ljgn: 2
sjmn: drzm * dbpl
sllz: 4
pppw: cczh / lfqf
lgvd: ljgn * ptdq
drzm: hmdt - zczc
hmdt: 32
";

    #[test]
    fn part1_sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "152");
    }

    #[test]
    fn part2_sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "301");
    }

    #[test]
    fn missing_root_is_rejected() {
        assert!(Solver::parse("aaaa: 1\n").is_err());
    }
}
