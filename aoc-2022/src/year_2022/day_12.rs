use std::collections::VecDeque;

use aoc_runner::{AocParser, ParseError, PartSolver, SolveError};
use aoc_runner_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 12, tags = ["bfs", "grid"])]
pub struct Solver;

#[derive(Debug, Clone)]
pub struct HeightMap {
    elevations: Vec<u8>,
    width: usize,
    start: usize,
    end: usize,
}

impl AocParser for Solver {
    type SharedData<'a> = HeightMap;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut elevations = Vec::new();
        let mut width = None;
        let mut start = None;
        let mut end = None;
        for line in input.trim_end().lines() {
            if *width.get_or_insert(line.len()) != line.len() {
                return Err(ParseError::InvalidFormat("ragged grid".into()));
            }
            for c in line.bytes() {
                let elevation = match c {
                    b'a'..=b'z' => c - b'a',
                    b'S' => {
                        start = Some(elevations.len());
                        0
                    }
                    b'E' => {
                        end = Some(elevations.len());
                        25
                    }
                    _ => {
                        return Err(ParseError::InvalidFormat(format!(
                            "bad map square {:?}",
                            c as char
                        )));
                    }
                };
                elevations.push(elevation);
            }
        }
        let width = width.filter(|&w| w > 0).ok_or_else(|| {
            ParseError::MissingData("empty map".into())
        })?;
        Ok(HeightMap {
            elevations,
            width,
            start: start.ok_or_else(|| ParseError::MissingData("no start square".into()))?,
            end: end.ok_or_else(|| ParseError::MissingData("no end square".into()))?,
        })
    }
}

/// Fewest steps from any of `sources` to the end square, climbing at most one
/// elevation level per step.
fn shortest_hike(
    map: &HeightMap,
    sources: impl Iterator<Item = usize>,
) -> Result<String, SolveError> {
    let mut distance = vec![None; map.elevations.len()];
    let mut queue = VecDeque::new();
    for source in sources {
        if distance[source].is_none() {
            distance[source] = Some(0u32);
            queue.push_back(source);
        }
    }
    while let Some(cell) = queue.pop_front() {
        let steps = distance[cell].unwrap_or(0);
        if cell == map.end {
            return Ok(steps.to_string());
        }
        let (row, col) = (cell / map.width, cell % map.width);
        let neighbors = [
            (row > 0).then(|| cell - map.width),
            (cell + map.width < map.elevations.len()).then(|| cell + map.width),
            (col > 0).then(|| cell - 1),
            (col + 1 < map.width).then(|| cell + 1),
        ];
        for next in neighbors.into_iter().flatten() {
            if distance[next].is_none() && map.elevations[next] <= map.elevations[cell] + 1 {
                distance[next] = Some(steps + 1);
                queue.push_back(next);
            }
        }
    }
    Err(SolveError::SolveFailed("end square is unreachable".into()))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shortest_hike(shared, std::iter::once(shared.start))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let lowest = shared
            .elevations
            .iter()
            .enumerate()
            .filter(|&(_, &e)| e == 0)
            .map(|(i, _)| i)
            .collect::<Vec<_>>();
        shortest_hike(shared, lowest.into_iter())
    }
}

#[cfg(test)]
mod tests {
    use super::Solver;
    use aoc_runner::{AocParser, Solver as _};

    const SAMPLE: &str = "\
Sabqponm
abcryxxl
accszExk
acctuvwj
abdefghi
";

    #[test]
    fn part1_sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "31");
    }

    #[test]
    fn part2_sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "29");
    }

    #[test]
    fn unreachable_end_is_an_error() {
        let mut shared = Solver::parse("Sz\nzE\n").unwrap();
        assert!(Solver::solve_part(&mut shared, 1).is_err());
    }
}
