use aoc_runner::{AocParser, ParseError, PartSolver, SolveError};
use aoc_runner_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;
use regex::Regex;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 15, tags = ["intervals"])]
pub struct Solver;

const PART1_ROW: i64 = 2_000_000;
const PART2_LIMIT: i64 = 4_000_000;

#[derive(Debug, Clone, Copy)]
pub struct Sensor {
    x: i64,
    y: i64,
    beacon_x: i64,
    beacon_y: i64,
    radius: i64,
}

impl Sensor {
    /// Inclusive x-interval this sensor rules out in `row`, if it reaches it.
    fn coverage_in_row(&self, row: i64) -> Option<(i64, i64)> {
        let spare = self.radius - (self.y - row).abs();
        (spare >= 0).then_some((self.x - spare, self.x + spare))
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Sensor>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let re = Regex::new(
            r"^Sensor at x=(-?\d+), y=(-?\d+): closest beacon is at x=(-?\d+), y=(-?\d+)$",
        )
        .map_err(|e| ParseError::Other(e.to_string()))?;
        input
            .trim_end()
            .lines()
            .map(|line| {
                let caps = re.captures(line).ok_or_else(|| {
                    ParseError::InvalidFormat(format!("bad sensor report {line:?}"))
                })?;
                let field = |i: usize| {
                    caps[i]
                        .parse::<i64>()
                        .map_err(|e| ParseError::InvalidFormat(e.to_string()))
                };
                let (x, y, beacon_x, beacon_y) = (field(1)?, field(2)?, field(3)?, field(4)?);
                Ok(Sensor {
                    x,
                    y,
                    beacon_x,
                    beacon_y,
                    radius: (x - beacon_x).abs() + (y - beacon_y).abs(),
                })
            })
            .collect()
    }
}

/// Merged, sorted coverage intervals for one row.
fn row_coverage(sensors: &[Sensor], row: i64) -> Vec<(i64, i64)> {
    let mut merged: Vec<(i64, i64)> = Vec::new();
    for (lo, hi) in sensors
        .iter()
        .filter_map(|s| s.coverage_in_row(row))
        .sorted_unstable()
    {
        match merged.last_mut() {
            Some(last) if lo <= last.1 + 1 => last.1 = last.1.max(hi),
            _ => merged.push((lo, hi)),
        }
    }
    merged
}

fn excluded_in_row(sensors: &[Sensor], row: i64) -> i64 {
    let covered: i64 = row_coverage(sensors, row)
        .iter()
        .map(|(lo, hi)| hi - lo + 1)
        .sum();
    let beacons_in_row = sensors
        .iter()
        .filter(|s| s.beacon_y == row)
        .map(|s| s.beacon_x)
        .unique()
        .count() as i64;
    covered - beacons_in_row
}

/// Finds the one uncovered position with both coordinates in `0..=limit`.
fn tuning_frequency(sensors: &[Sensor], limit: i64) -> Result<i64, SolveError> {
    for row in 0..=limit {
        let mut x = 0;
        for (lo, hi) in row_coverage(sensors, row) {
            if x < lo {
                break;
            }
            x = x.max(hi + 1);
        }
        if x <= limit {
            return Ok(x * 4_000_000 + row);
        }
    }
    Err(SolveError::SolveFailed(
        "no position can hold the distress beacon".into(),
    ))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(excluded_in_row(shared, PART1_ROW).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(tuning_frequency(shared, PART2_LIMIT)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{Solver, excluded_in_row, tuning_frequency};
    use aoc_runner::AocParser;

    const SAMPLE: &str = "\
Sensor at x=2, y=18: closest beacon is at x=-2, y=15
Sensor at x=9, y=16: closest beacon is at x=10, y=16
Sensor at x=13, y=2: closest beacon is at x=15, y=3
Sensor at x=12, y=14: closest beacon is at x=10, y=16
Sensor at x=10, y=20: closest beacon is at x=10, y=16
Sensor at x=14, y=17: closest beacon is at x=10, y=16
Sensor at x=8, y=7: closest beacon is at x=2, y=10
Sensor at x=2, y=0: closest beacon is at x=2, y=10
Sensor at x=0, y=11: closest beacon is at x=2, y=10
Sensor at x=20, y=14: closest beacon is at x=25, y=17
Sensor at x=17, y=20: closest beacon is at x=21, y=22
Sensor at x=16, y=7: closest beacon is at x=15, y=3
Sensor at x=14, y=3: closest beacon is at x=15, y=3
Sensor at x=20, y=1: closest beacon is at x=15, y=3
";

    #[test]
    fn excluded_positions_in_sample_row() {
        let sensors = Solver::parse(SAMPLE).unwrap();
        assert_eq!(excluded_in_row(&sensors, 10), 26);
    }

    #[test]
    fn distress_beacon_in_sample_area() {
        let sensors = Solver::parse(SAMPLE).unwrap();
        assert_eq!(tuning_frequency(&sensors, 20).unwrap(), 56000011);
    }

    #[test]
    fn rejects_malformed_report() {
        assert!(Solver::parse("Sensor near x=1, y=2\n").is_err());
    }
}
