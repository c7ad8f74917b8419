//! Core solver traits

use crate::error::{ParseError, SolveError};

/// Trait for parsing puzzle input into shared data
///
/// This trait defines the shared data type and parsing logic for a solver,
/// providing clean separation between parsing and solving concerns.
///
/// # Example
///
/// ```
/// use aoc_runner::{AocParser, ParseError};
///
/// struct Day1;
///
/// impl AocParser for Day1 {
///     type SharedData<'a> = Vec<i32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
///             .collect()
///     }
/// }
/// ```
pub trait AocParser {
    /// The shared data structure that holds parsed input and intermediate results.
    ///
    /// Use any ownership strategy:
    /// - `Vec<T>` or custom structs for owned data (simplest, supports mutation)
    /// - `&'a str` for zero-copy borrowed data when no transformation is needed
    type SharedData<'a>;

    /// Parse the input string into the shared data structure.
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Trait for solving a specific part of a puzzle.
///
/// The const generic `N` is the part number (1, 2, ...). Implementing it per
/// part gives compile-time validation that the part exists; the `AocSolver`
/// derive generates the dispatching [`Solver`] impl.
///
/// # Example
///
/// ```
/// use aoc_runner::{AocParser, PartSolver, ParseError, SolveError};
///
/// struct Day1;
///
/// impl AocParser for Day1 {
///     type SharedData<'a> = Vec<i32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
///             .collect()
///     }
/// }
///
/// impl PartSolver<1> for Day1 {
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(shared.iter().sum::<i32>().to_string())
///     }
/// }
/// ```
pub trait PartSolver<const N: u8>: AocParser {
    /// Solve this part of the puzzle.
    ///
    /// # Arguments
    /// * `shared` - Mutable reference to shared data
    ///
    /// # Returns
    /// * `Ok(String)` - The answer for this part
    /// * `Err(SolveError)` - An error occurred while solving
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// Core trait that all solvers must implement.
///
/// Extends `AocParser` to inherit the `SharedData` type and `parse()`.
/// Normally generated from the per-part [`PartSolver`] impls by the
/// `#[derive(AocSolver)]` macro rather than written by hand.
pub trait Solver: AocParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve a specific part of the problem
    ///
    /// # Arguments
    /// * `shared` - Mutable reference to shared data (parsed input and intermediate results)
    /// * `part` - The part number (1, 2, etc.)
    ///
    /// # Returns
    /// * `Ok(String)` - The answer for this part
    /// * `Err(SolveError::PartNotImplemented)` - The part is not implemented
    /// * `Err(SolveError::SolveFailed)` - An error occurred while solving
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

pub trait SolverExt: Solver {
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
