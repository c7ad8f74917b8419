use aoc_runner::{AocParser, ParseError, PartSolver, SolveError, Solver};
use aoc_runner_macros::AocSolver;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct TestIndependentSolver;

impl AocParser for TestIndependentSolver {
    type SharedData<'a> = Vec<i32>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .map(|line| {
                line.trim()
                    .parse::<i32>()
                    .map_err(|_| ParseError::InvalidFormat("Expected integer".into()))
            })
            .collect()
    }
}

impl PartSolver<1> for TestIndependentSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i32>().to_string())
    }
}

impl PartSolver<2> for TestIndependentSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().product::<i32>().to_string())
    }
}

#[test]
fn parts_constant_matches_attribute() {
    assert_eq!(<TestIndependentSolver as Solver>::PARTS, 2);
}

#[test]
fn dispatches_to_part_impls() {
    let mut shared = TestIndependentSolver::parse("2\n3\n4").unwrap();

    let part1 = <TestIndependentSolver as Solver>::solve_part(&mut shared, 1).unwrap();
    assert_eq!(part1, "9");

    let part2 = <TestIndependentSolver as Solver>::solve_part(&mut shared, 2).unwrap();
    assert_eq!(part2, "24");
}

#[test]
fn unknown_part_not_implemented() {
    let mut shared = TestIndependentSolver::parse("1").unwrap();
    let err = <TestIndependentSolver as Solver>::solve_part(&mut shared, 3).unwrap_err();
    assert!(matches!(err, SolveError::PartNotImplemented(3)));
}
