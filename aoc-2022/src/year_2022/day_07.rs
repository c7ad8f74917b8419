use aoc_runner::{AocParser, ParseError, PartSolver, SolveError};
use aoc_runner_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 7, tags = ["filesystem"])]
pub struct Solver;

const DISK_SIZE: u64 = 70_000_000;
const UPDATE_SIZE: u64 = 30_000_000;

impl AocParser for Solver {
    /// Total size of every directory in the transcript; the root is the
    /// largest entry.
    type SharedData<'a> = Vec<u64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut totals = Vec::new();
        // Sizes of the directories on the current `cd` path, innermost last.
        let mut path = Vec::new();
        for (idx, line) in input.trim_end().lines().enumerate() {
            let bad_line =
                |msg: &str| ParseError::InvalidFormat(format!("(line {}) {msg}", idx + 1));
            match line.split_whitespace().collect::<Vec<_>>()[..] {
                ["$", "cd", ".."] => {
                    let done = path.pop().ok_or_else(|| bad_line("cd .. above root"))?;
                    if let Some(parent) = path.last_mut() {
                        *parent += done;
                    }
                    totals.push(done);
                }
                ["$", "cd", _] => path.push(0),
                ["$", "ls"] | ["dir", _] => {}
                [size, _name] => {
                    let size: u64 = size.parse().map_err(|_| bad_line("bad file size"))?;
                    *path.last_mut().ok_or_else(|| bad_line("file outside any directory"))? +=
                        size;
                }
                _ => return Err(bad_line("unrecognized terminal line")),
            }
        }
        // Unwind the directories still on the path at end of transcript.
        while let Some(done) = path.pop() {
            if let Some(parent) = path.last_mut() {
                *parent += done;
            }
            totals.push(done);
        }
        if totals.is_empty() {
            return Err(ParseError::MissingData("no directories in transcript".into()));
        }
        Ok(totals)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: u64 = shared.iter().filter(|&&size| size <= 100_000).sum();
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let used = shared
            .iter()
            .copied()
            .max()
            .ok_or_else(|| SolveError::SolveFailed("no directories".into()))?;
        let needed = UPDATE_SIZE.saturating_sub(DISK_SIZE - used);
        shared
            .iter()
            .filter(|&&size| size >= needed)
            .min()
            .map(|size| size.to_string())
            .ok_or_else(|| SolveError::SolveFailed("no directory frees enough space".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::Solver;
    use aoc_runner::{AocParser, Solver as _};

    const SAMPLE: &str = "\
$ cd /
$ ls
dir a
14848514 b.txt
8504156 c.dat
dir d
$ cd a
$ ls
dir e
29116 f
2557 g
62596 h.lst
$ cd e
$ ls
584 i
$ cd ..
$ cd ..
$ cd d
$ ls
4060174 j
8033020 d.log
5626152 d.ext
7214296 k
";

    #[test]
    fn part1_sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "95437");
    }

    #[test]
    fn part2_sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "24933642");
    }

    #[test]
    fn cd_above_root_is_rejected() {
        assert!(Solver::parse("$ cd /\n$ cd ..\n$ cd ..\n").is_err());
    }
}
