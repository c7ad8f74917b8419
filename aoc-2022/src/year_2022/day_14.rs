use std::collections::HashSet;

use anyhow::{Context, anyhow};
use aoc_runner::{AocParser, ParseError, PartSolver, SolveError};
use aoc_runner_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 14, tags = ["simulation"])]
pub struct Solver;

const SOURCE: (i32, i32) = (500, 0);

#[derive(Debug, Clone)]
pub struct Cave {
    rock: HashSet<(i32, i32)>,
    max_y: i32,
}

fn parse_point(s: &str) -> anyhow::Result<(i32, i32)> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| anyhow!("expected <x>,<y>, got {s:?}"))?;
    Ok((x.parse().context("bad x")?, y.parse().context("bad y")?))
}

impl AocParser for Solver {
    type SharedData<'a> = Cave;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut rock = HashSet::new();
        for line in input.trim_end().lines() {
            for (a, b) in line
                .split(" -> ")
                .map(parse_point)
                .map(|p| p.map_err(|e| ParseError::InvalidFormat(e.to_string())))
                .process_results(|points| points.tuple_windows().collect::<Vec<_>>())?
            {
                if a.0 != b.0 && a.1 != b.1 {
                    return Err(ParseError::InvalidFormat(format!(
                        "diagonal rock segment {a:?} -> {b:?}"
                    )));
                }
                for x in a.0.min(b.0)..=a.0.max(b.0) {
                    for y in a.1.min(b.1)..=a.1.max(b.1) {
                        rock.insert((x, y));
                    }
                }
            }
        }
        let max_y = rock
            .iter()
            .map(|&(_, y)| y)
            .max()
            .ok_or_else(|| ParseError::MissingData("no rock in scan".into()))?;
        Ok(Cave { rock, max_y })
    }
}

/// Drops sand grains from the source until one falls past `max_y` (no floor)
/// or the source clogs (with floor), returning how many came to rest.
fn pour(cave: &Cave, floor: bool) -> u32 {
    let mut filled = cave.rock.clone();
    let floor_y = cave.max_y + 2;
    let mut resting = 0;
    while !filled.contains(&SOURCE) {
        let (mut x, mut y) = SOURCE;
        loop {
            if !floor && y > cave.max_y {
                return resting;
            }
            let below = y + 1;
            let blocked =
                |nx: i32| (floor && below == floor_y) || filled.contains(&(nx, below));
            match [x, x - 1, x + 1].into_iter().find(|&nx| !blocked(nx)) {
                Some(nx) => (x, y) = (nx, below),
                None => break,
            }
        }
        filled.insert((x, y));
        resting += 1;
    }
    resting
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(pour(shared, false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(pour(shared, true).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::Solver;
    use aoc_runner::{AocParser, Solver as _};

    const SAMPLE: &str = "\
498,4 -> 498,6 -> 496,6
503,4 -> 502,4 -> 502,9 -> 494,9
";

    #[test]
    fn part1_sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "24");
    }

    #[test]
    fn part2_sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "93");
    }

    #[test]
    fn diagonal_segments_are_rejected() {
        assert!(Solver::parse("1,1 -> 3,3\n").is_err());
    }
}
