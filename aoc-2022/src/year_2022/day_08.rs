use aoc_runner::{AocParser, ParseError, PartSolver, SolveError};
use aoc_runner_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 8, tags = ["grid"])]
pub struct Solver;

#[derive(Debug, Clone)]
pub struct Forest {
    heights: Vec<u8>,
    width: usize,
    height: usize,
}

impl Forest {
    fn at(&self, row: usize, col: usize) -> u8 {
        self.heights[row * self.width + col]
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Forest;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut heights = Vec::new();
        let mut width = None;
        let mut rows = 0;
        for line in input.trim_end().lines() {
            match width {
                None => width = Some(line.len()),
                Some(w) if w != line.len() => {
                    return Err(ParseError::InvalidFormat("ragged grid".into()));
                }
                Some(_) => {}
            }
            for c in line.bytes() {
                if !c.is_ascii_digit() {
                    return Err(ParseError::InvalidFormat(format!(
                        "tree height must be a digit, found {:?}",
                        c as char
                    )));
                }
                heights.push(c - b'0');
            }
            rows += 1;
        }
        let width = width.filter(|&w| w > 0).ok_or_else(|| {
            ParseError::MissingData("empty grid".into())
        })?;
        Ok(Forest {
            heights,
            width,
            height: rows,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let forest = &*shared;
        let mut visible = vec![false; forest.heights.len()];
        // Scan each row and column from both ends, marking trees taller than
        // everything before them.
        let mut sweep = |cells: &mut dyn Iterator<Item = (usize, usize)>| {
            let mut tallest = None;
            for (r, c) in cells {
                let h = forest.at(r, c);
                if tallest.is_none_or(|t| h > t) {
                    visible[r * forest.width + c] = true;
                    tallest = Some(h);
                }
            }
        };
        for r in 0..forest.height {
            sweep(&mut (0..forest.width).map(|c| (r, c)));
            sweep(&mut (0..forest.width).rev().map(|c| (r, c)));
        }
        for c in 0..forest.width {
            sweep(&mut (0..forest.height).map(|r| (r, c)));
            sweep(&mut (0..forest.height).rev().map(|r| (r, c)));
        }
        Ok(visible.iter().filter(|&&v| v).count().to_string())
    }
}

fn viewing_distance(
    forest: &Forest,
    from: (usize, usize),
    step: (isize, isize),
) -> usize {
    let own = forest.at(from.0, from.1);
    let mut distance = 0;
    let (mut r, mut c) = (from.0 as isize, from.1 as isize);
    loop {
        r += step.0;
        c += step.1;
        if r < 0 || c < 0 || r as usize >= forest.height || c as usize >= forest.width {
            return distance;
        }
        distance += 1;
        if forest.at(r as usize, c as usize) >= own {
            return distance;
        }
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let forest = &*shared;
        let best = (0..forest.height)
            .flat_map(|r| (0..forest.width).map(move |c| (r, c)))
            .map(|pos| {
                [(0, 1), (0, -1), (1, 0), (-1, 0)]
                    .iter()
                    .map(|&step| viewing_distance(forest, pos, step))
                    .product::<usize>()
            })
            .max()
            .ok_or_else(|| SolveError::SolveFailed("empty grid".into()))?;
        Ok(best.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::Solver;
    use aoc_runner::{AocParser, Solver as _};

    const SAMPLE: &str = "\
30373
25512
65332
33549
35390
";

    #[test]
    fn part1_sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "21");
    }

    #[test]
    fn part2_sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "8");
    }

    #[test]
    fn ragged_grid_is_rejected() {
        assert!(Solver::parse("123\n45\n").is_err());
    }
}
