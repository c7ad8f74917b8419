use std::collections::{HashSet, VecDeque};

use anyhow::Context;
use aoc_runner::{AocParser, ParseError, PartSolver, SolveError};
use aoc_runner_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 18, tags = ["flood-fill"])]
pub struct Solver;

type Cube = (i32, i32, i32);

const NEIGHBOR_OFFSETS: [Cube; 6] = [
    (1, 0, 0),
    (-1, 0, 0),
    (0, 1, 0),
    (0, -1, 0),
    (0, 0, 1),
    (0, 0, -1),
];

fn neighbors((x, y, z): Cube) -> impl Iterator<Item = Cube> {
    NEIGHBOR_OFFSETS
        .iter()
        .map(move |&(dx, dy, dz)| (x + dx, y + dy, z + dz))
}

impl AocParser for Solver {
    type SharedData<'a> = HashSet<Cube>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .trim_end()
            .lines()
            .map(|line| {
                line.split(',')
                    .collect_tuple()
                    .ok_or_else(|| anyhow::anyhow!("expected three coordinates"))
                    .and_then(|(x, y, z): (&str, &str, &str)| {
                        Ok((
                            x.parse().context("bad x")?,
                            y.parse().context("bad y")?,
                            z.parse().context("bad z")?,
                        ))
                    })
                    .map_err(|e| ParseError::InvalidFormat(format!("{e} in {line:?}")))
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let faces: usize = shared
            .iter()
            .map(|&cube| neighbors(cube).filter(|n| !shared.contains(n)).count())
            .sum();
        Ok(faces.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (min, max) = match shared.iter().fold(None, |acc: Option<(Cube, Cube)>, &c| {
            let (lo, hi) = acc.unwrap_or((c, c));
            Some((
                (lo.0.min(c.0), lo.1.min(c.1), lo.2.min(c.2)),
                (hi.0.max(c.0), hi.1.max(c.1), hi.2.max(c.2)),
            ))
        }) {
            Some(bounds) => bounds,
            None => return Err(SolveError::SolveFailed("no cubes in scan".into())),
        };
        // Flood the box one cell beyond the droplet on every side, so the
        // outside air is a single connected region.
        let lo = (min.0 - 1, min.1 - 1, min.2 - 1);
        let hi = (max.0 + 1, max.1 + 1, max.2 + 1);
        let in_box = |(x, y, z): Cube| {
            (lo.0..=hi.0).contains(&x) && (lo.1..=hi.1).contains(&y) && (lo.2..=hi.2).contains(&z)
        };
        let mut outside = HashSet::from([lo]);
        let mut queue = VecDeque::from([lo]);
        let mut surface = 0;
        while let Some(cell) = queue.pop_front() {
            for next in neighbors(cell).filter(|&n| in_box(n)) {
                if shared.contains(&next) {
                    surface += 1;
                } else if outside.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        Ok(surface.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::Solver;
    use aoc_runner::{AocParser, Solver as _};

    const SAMPLE: &str = "\
2,2,2
1,2,2
3,2,2
2,1,2
2,3,2
2,2,1
2,2,3
2,2,4
2,2,6
1,2,5
3,2,5
2,1,5
2,3,5
";

    #[test]
    fn part1_sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "64");
    }

    #[test]
    fn part2_excludes_trapped_pocket() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "58");
    }

    #[test]
    fn two_touching_cubes() {
        let mut shared = Solver::parse("0,0,0\n1,0,0\n").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "10");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "10");
    }

    #[test]
    fn rejects_two_coordinates() {
        assert!(Solver::parse("1,2\n").is_err());
    }
}
