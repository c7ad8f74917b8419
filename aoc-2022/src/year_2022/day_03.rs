use aoc_runner::{AocParser, ParseError, PartSolver, SolveError};
use aoc_runner_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 3, tags = ["sets"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<&'a str>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim_end()
            .lines()
            .map(|line| {
                if line.bytes().all(|b| b.is_ascii_alphabetic()) && !line.is_empty() {
                    Ok(line)
                } else {
                    Err(ParseError::InvalidFormat(format!(
                        "rucksack must be non-empty ASCII letters, got {line:?}"
                    )))
                }
            })
            .collect()
    }
}

/// Item priority: a-z map to 1-26, A-Z to 27-52.
fn priority(item: u8) -> u32 {
    if item.is_ascii_lowercase() {
        u32::from(item - b'a') + 1
    } else {
        u32::from(item - b'A') + 27
    }
}

/// Bitmask over priorities 1-52 of all items in a compartment.
fn item_mask(items: &str) -> u64 {
    items.bytes().fold(0u64, |mask, b| mask | 1 << priority(b))
}

fn common_priority(mask: u64) -> Result<u32, SolveError> {
    if mask.count_ones() == 1 {
        Ok(mask.trailing_zeros())
    } else {
        Err(SolveError::SolveFailed(
            format!("expected exactly one shared item, mask {mask:#x}").into(),
        ))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut total = 0;
        for rucksack in shared.iter() {
            let (left, right) = rucksack.split_at(rucksack.len() / 2);
            total += common_priority(item_mask(left) & item_mask(right))?;
        }
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut total = 0;
        for group in &shared.iter().chunks(3) {
            let badge = group.map(|r| item_mask(r)).fold(!0u64, |acc, mask| acc & mask);
            total += common_priority(badge)?;
        }
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::Solver;
    use aoc_runner::{AocParser, Solver as _};

    const SAMPLE: &str = "\
vJrwpWtwJgWrhcsFMMfFFhFp
jqHRNqRjqzjGDLGLrsFMfFZSrLrFZsSL
PmmdzqPrVvPwwTWBwg
wMqvLMZHhHMvwLHjbvcjnnSBnvTQFn
ttgJtRGJQctTZtZT
CrZsJsPPZsGzwwsLwLmpwMDw
";

    #[test]
    fn part1_sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "157");
    }

    #[test]
    fn part2_sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "70");
    }
}
