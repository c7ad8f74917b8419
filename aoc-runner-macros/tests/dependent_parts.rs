use aoc_runner::{AocParser, ParseError, PartSolver, SolveError, Solver};
use aoc_runner_macros::AocSolver;

#[derive(Debug, Clone)]
struct SharedData {
    numbers: Vec<i32>,
    sum: Option<i32>,
}

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct TestDependentSolver;

impl AocParser for TestDependentSolver {
    type SharedData<'a> = SharedData;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let numbers = input
            .lines()
            .map(|line| {
                line.trim()
                    .parse::<i32>()
                    .map_err(|_| ParseError::InvalidFormat("Expected integer".into()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SharedData { numbers, sum: None })
    }
}

impl PartSolver<1> for TestDependentSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: i32 = shared.numbers.iter().sum();
        // Cache for part 2
        shared.sum = Some(sum);
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for TestDependentSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum = shared
            .sum
            .unwrap_or_else(|| shared.numbers.iter().sum());
        let count = shared.numbers.len();

        let avg = if count > 0 {
            sum as f64 / count as f64
        } else {
            0.0
        };
        Ok(format!("{:.2}", avg))
    }
}

#[test]
fn part1_stores_data() {
    let mut shared = TestDependentSolver::parse("10\n20\n30").unwrap();

    let result = <TestDependentSolver as Solver>::solve_part(&mut shared, 1).unwrap();
    assert_eq!(result, "60");
    assert_eq!(shared.sum, Some(60));
}

#[test]
fn part2_uses_part1_data() {
    let mut shared = TestDependentSolver::parse("10\n20\n30").unwrap();

    let _ = <TestDependentSolver as Solver>::solve_part(&mut shared, 1).unwrap();
    let part2 = <TestDependentSolver as Solver>::solve_part(&mut shared, 2).unwrap();

    assert_eq!(part2, "20.00");
}

#[test]
fn part2_solves_independently() {
    let mut shared = TestDependentSolver::parse("10\n20\n30").unwrap();

    // Part 2 without part 1: shared.sum is still None
    let result = <TestDependentSolver as Solver>::solve_part(&mut shared, 2).unwrap();
    assert_eq!(result, "20.00");
}
