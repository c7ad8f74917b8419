use anyhow::{Context, anyhow};
use aoc_runner::{AocParser, ParseError, PartSolver, SolveError};
use aoc_runner_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 5, tags = ["stacks", "simulation"])]
pub struct Solver;

#[derive(Debug, Clone, Copy)]
pub struct Move {
    count: usize,
    from: usize,
    to: usize,
}

#[derive(Debug, Clone)]
pub struct Supplies {
    /// Bottom of each stack first.
    stacks: Vec<Vec<u8>>,
    moves: Vec<Move>,
}

fn parse_drawing(drawing: &str) -> anyhow::Result<Vec<Vec<u8>>> {
    let mut rows = drawing.lines().rev();
    let labels = rows.next().ok_or_else(|| anyhow!("empty crate drawing"))?;
    let stack_count = labels.split_whitespace().count();
    let mut stacks = vec![Vec::new(); stack_count];
    for row in rows {
        let bytes = row.as_bytes();
        for (i, stack) in stacks.iter_mut().enumerate() {
            match bytes.get(1 + 4 * i) {
                Some(b' ') | None => {}
                Some(&c @ b'A'..=b'Z') => stack.push(c),
                Some(&c) => return Err(anyhow!("unexpected crate label {:?}", c as char)),
            }
        }
    }
    Ok(stacks)
}

fn parse_move(line: &str, stack_count: usize) -> anyhow::Result<Move> {
    let mut words = line.split_whitespace();
    let mut field = |name: &str| {
        words
            .nth(1)
            .ok_or_else(|| anyhow!("truncated move instruction"))?
            .parse::<usize>()
            .context(format!("bad {name}"))
    };
    let count = field("count")?;
    let from = field("source stack")?;
    let to = field("target stack")?;
    if from == 0 || from > stack_count || to == 0 || to > stack_count {
        return Err(anyhow!("stack index out of range in {line:?}"));
    }
    Ok(Move {
        count,
        from: from - 1,
        to: to - 1,
    })
}

impl AocParser for Solver {
    type SharedData<'a> = Supplies;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let (drawing, procedure) = input
            .split_once("\n\n")
            .ok_or_else(|| ParseError::MissingData("blank line before move list".into()))?;
        let stacks =
            parse_drawing(drawing).map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        let moves = procedure
            .trim_end()
            .lines()
            .map(|line| {
                parse_move(line, stacks.len())
                    .map_err(|e| ParseError::InvalidFormat(e.to_string()))
            })
            .collect::<Result<_, _>>()?;
        Ok(Supplies { stacks, moves })
    }
}

fn top_crates(stacks: &[Vec<u8>]) -> Result<String, SolveError> {
    let tops: Vec<u8> = stacks.iter().filter_map(|s| s.last().copied()).collect();
    String::from_utf8(tops).map_err(|e| SolveError::SolveFailed(e.into()))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut stacks = shared.stacks.clone();
        for m in &shared.moves {
            for _ in 0..m.count {
                let c = stacks[m.from]
                    .pop()
                    .ok_or_else(|| SolveError::SolveFailed("popped an empty stack".into()))?;
                stacks[m.to].push(c);
            }
        }
        top_crates(&stacks)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut stacks = shared.stacks.clone();
        for m in &shared.moves {
            let source = &mut stacks[m.from];
            if m.count > source.len() {
                return Err(SolveError::SolveFailed(
                    "move exceeds stack height".into(),
                ));
            }
            let moved = source.split_off(source.len() - m.count);
            stacks[m.to].extend(moved);
        }
        top_crates(&stacks)
    }
}

#[cfg(test)]
mod tests {
    use super::Solver;
    use aoc_runner::{AocParser, Solver as _};

    const SAMPLE: &str = "    [D]
[N] [C]
[Z] [M] [P]
 1   2   3

move 1 from 2 to 1
move 3 from 1 to 3
move 2 from 2 to 1
move 1 from 1 to 2
";

    #[test]
    fn part1_sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "CMZ");
    }

    #[test]
    fn part2_sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "MCD");
    }

    #[test]
    fn parts_do_not_disturb_each_other() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "CMZ");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "MCD");
    }

    #[test]
    fn rejects_out_of_range_stack() {
        assert!(Solver::parse("[A]\n 1 \n\nmove 1 from 1 to 9\n").is_err());
    }
}
