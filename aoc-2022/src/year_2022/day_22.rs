use aoc_runner::{AocParser, ParseError, PartSolver, SolveError};
use aoc_runner_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2022, day = 22, tags = ["grid", "simulation"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tile {
    /// Padding outside the board.
    Void,
    Open,
    Wall,
}

#[derive(Debug, Clone, Copy)]
pub enum Step {
    Walk(u32),
    TurnLeft,
    TurnRight,
}

#[derive(Debug, Clone)]
pub struct Notes {
    board: Vec<Vec<Tile>>,
    path: Vec<Step>,
}

/// Facings in password order: right, down, left, up.
const HEADINGS: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

impl AocParser for Solver {
    type SharedData<'a> = Notes;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let (map, path) = input
            .split_once("\n\n")
            .ok_or_else(|| ParseError::MissingData("blank line before the path".into()))?;
        let width = map.lines().map(str::len).max().unwrap_or(0);
        if width == 0 {
            return Err(ParseError::MissingData("empty board".into()));
        }
        let board = map
            .lines()
            .map(|line| {
                let mut row = line
                    .bytes()
                    .map(|c| match c {
                        b' ' => Ok(Tile::Void),
                        b'.' => Ok(Tile::Open),
                        b'#' => Ok(Tile::Wall),
                        _ => Err(ParseError::InvalidFormat(format!(
                            "bad board tile {:?}",
                            c as char
                        ))),
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                row.resize(width, Tile::Void);
                Ok(row)
            })
            .collect::<Result<Vec<_>, _>>()?;
        let token_re = Regex::new(r"\d+|[LR]|\S").map_err(|e| ParseError::Other(e.to_string()))?;
        let path = token_re
            .find_iter(path.trim())
            .map(|token| match token.as_str() {
                "L" => Ok(Step::TurnLeft),
                "R" => Ok(Step::TurnRight),
                t => t.parse().map(Step::Walk).map_err(|_| {
                    ParseError::InvalidFormat(format!("bad path token {t:?}"))
                }),
            })
            .collect::<Result<_, _>>()?;
        Ok(Notes { board, path })
    }
}

/// Next tile in the given heading, wrapping around the board over void
/// padding. Returns the landing position unless a wall blocks it.
fn step(board: &[Vec<Tile>], pos: (usize, usize), heading: usize) -> Option<(usize, usize)> {
    let (dr, dc) = HEADINGS[heading];
    let (rows, cols) = (board.len() as isize, board[0].len() as isize);
    let (mut r, mut c) = (pos.0 as isize, pos.1 as isize);
    loop {
        r = (r + dr).rem_euclid(rows);
        c = (c + dc).rem_euclid(cols);
        match board[r as usize][c as usize] {
            Tile::Void => continue,
            Tile::Open => return Some((r as usize, c as usize)),
            Tile::Wall => return None,
        }
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let board = &shared.board;
        let start_col = board
            .first()
            .and_then(|row| row.iter().position(|&t| t == Tile::Open))
            .ok_or_else(|| SolveError::SolveFailed("top row has no open tile".into()))?;
        let mut pos = (0, start_col);
        let mut heading = 0;
        for &step_cmd in &shared.path {
            match step_cmd {
                Step::TurnLeft => heading = (heading + 3) % 4,
                Step::TurnRight => heading = (heading + 1) % 4,
                Step::Walk(n) => {
                    for _ in 0..n {
                        match step(board, pos, heading) {
                            Some(next) => pos = next,
                            None => break,
                        }
                    }
                }
            }
        }
        let password = 1000 * (pos.0 + 1) + 4 * (pos.1 + 1) + heading;
        Ok(password.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::Solver;
    use aoc_runner::{AocParser, Solver as _};

    const SAMPLE: &str = "        ...#
        .#..
        #...
        ....
...#.......#
........#...
..#....#....
..........#.
        ...#....
        .....#..
        .#......
        ......#.

10R5L5R10L4R5L5
";

    #[test]
    fn part1_sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "6032");
    }

    #[test]
    fn part2_is_not_implemented() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert!(Solver::solve_part(&mut shared, 2).is_err());
    }

    #[test]
    fn rejects_stray_path_token() {
        assert!(Solver::parse("..\n\n1X2\n").is_err());
    }
}
