use std::collections::HashMap;

use aoc_runner::{AocParser, ParseError, PartSolver, SolveError};
use aoc_runner_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 17, tags = ["simulation", "cycle-detection"])]
pub struct Solver;

const CHAMBER_WIDTH: usize = 7;
/// Rows of settled rock hashed into the cycle-detection key.
const SKYLINE_ROWS: usize = 32;

/// Each shape as offsets from its bottom-left corner, (dx, dy) with y up.
const SHAPES: [&[(usize, usize)]; 5] = [
    &[(0, 0), (1, 0), (2, 0), (3, 0)],
    &[(1, 0), (0, 1), (1, 1), (2, 1), (1, 2)],
    &[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)],
    &[(0, 0), (0, 1), (0, 2), (0, 3)],
    &[(0, 0), (1, 0), (0, 1), (1, 1)],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Jet {
    Left,
    Right,
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Jet>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let jets: Vec<Jet> = input
            .trim_end()
            .bytes()
            .map(|c| match c {
                b'<' => Ok(Jet::Left),
                b'>' => Ok(Jet::Right),
                _ => Err(ParseError::InvalidFormat(format!(
                    "jet must be '<' or '>', found {:?}",
                    c as char
                ))),
            })
            .collect::<Result<_, _>>()?;
        if jets.is_empty() {
            return Err(ParseError::MissingData("empty jet pattern".into()));
        }
        Ok(jets)
    }
}

struct Chamber {
    rows: Vec<[bool; CHAMBER_WIDTH]>,
}

impl Chamber {
    fn height(&self) -> usize {
        self.rows.len()
    }

    fn fits(&self, shape: &[(usize, usize)], x: usize, y: usize) -> bool {
        shape.iter().all(|&(dx, dy)| {
            x + dx < CHAMBER_WIDTH
                && self
                    .rows
                    .get(y + dy)
                    .is_none_or(|row| !row[x + dx])
        })
    }

    fn settle(&mut self, shape: &[(usize, usize)], x: usize, y: usize) {
        for &(dx, dy) in shape {
            while self.rows.len() <= y + dy {
                self.rows.push([false; CHAMBER_WIDTH]);
            }
            self.rows[y + dy][x + dx] = true;
        }
    }

    fn skyline(&self) -> [u8; SKYLINE_ROWS] {
        let mut packed = [0u8; SKYLINE_ROWS];
        for (slot, row) in packed
            .iter_mut()
            .zip(self.rows.iter().rev().take(SKYLINE_ROWS))
        {
            *slot = row
                .iter()
                .enumerate()
                .map(|(i, &filled)| (filled as u8) << i)
                .sum();
        }
        packed
    }
}

/// Height of the tower after `rocks` rocks have fallen. Detects when the
/// (next shape, jet position, surface shape) state repeats and skips whole
/// cycles instead of simulating them.
fn tower_height(jets: &[Jet], rocks: u64) -> u64 {
    let mut chamber = Chamber { rows: Vec::new() };
    let mut jet_idx = 0;
    let mut skipped_height = 0u64;
    let mut seen: HashMap<(usize, usize, [u8; SKYLINE_ROWS]), (u64, u64)> = HashMap::new();
    let mut rock = 0u64;
    while rock < rocks {
        let shape_idx = (rock % SHAPES.len() as u64) as usize;
        if skipped_height == 0 && chamber.height() >= SKYLINE_ROWS {
            let key = (shape_idx, jet_idx, chamber.skyline());
            if let Some(&(prev_rock, prev_height)) = seen.get(&key) {
                let period = rock - prev_rock;
                let gain = chamber.height() as u64 - prev_height;
                let cycles = (rocks - rock) / period;
                skipped_height = cycles * gain;
                rock += cycles * period;
                if rock >= rocks {
                    break;
                }
            } else {
                seen.insert(key, (rock, chamber.height() as u64));
            }
        }
        let shape = SHAPES[shape_idx];
        let (mut x, mut y) = (2usize, chamber.height() + 3);
        loop {
            let pushed = match jets[jet_idx] {
                Jet::Left => x.checked_sub(1),
                Jet::Right => Some(x + 1),
            };
            jet_idx = (jet_idx + 1) % jets.len();
            if let Some(nx) = pushed {
                if chamber.fits(shape, nx, y) {
                    x = nx;
                }
            }
            match y.checked_sub(1) {
                Some(ny) if chamber.fits(shape, x, ny) => y = ny,
                _ => break,
            }
        }
        chamber.settle(shape, x, y);
        rock += 1;
    }
    chamber.height() as u64 + skipped_height
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(tower_height(shared, 2022).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(tower_height(shared, 1_000_000_000_000).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{Solver, tower_height};
    use aoc_runner::{AocParser, Solver as _};

    const SAMPLE: &str = ">>><<><>><<<>><>>><<<>>><<<><<<>><>><<>>\n";

    #[test]
    fn part1_sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "3068");
    }

    #[test]
    fn part2_sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "1514285714288");
    }

    #[test]
    fn first_rock_lands_flat() {
        let jets = Solver::parse(SAMPLE).unwrap();
        assert_eq!(tower_height(&jets, 1), 1);
    }

    #[test]
    fn rejects_unknown_jet() {
        assert!(Solver::parse("<>^<>\n").is_err());
    }
}
