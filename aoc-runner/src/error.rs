//! Error types for the runner library

use thiserror::Error;

/// Error type for parsing puzzle input
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// Input format doesn't match expected structure
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// Required data is missing from input
    #[error("Missing data: {0}")]
    MissingData(String),
    /// Other parsing errors
    #[error("Parse error: {0}")]
    Other(String),
}

/// Error type for solving a specific part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The requested part number is not implemented
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The requested part number is outside `1..=PARTS`
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// An error occurred while solving the part
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Error type for registry operations
#[derive(Debug, Error)]
pub enum SolverError {
    /// Solver not found for the given year and day
    #[error("Solver not found for year {0} day {1}")]
    NotFound(u16, u8),
    /// Year or day is outside the supported range
    #[error("Year {0} day {1} is outside the supported range")]
    InvalidYearDay(u16, u8),
    /// Error occurred during parsing
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    /// Error occurred during solving
    #[error("Solve error: {0}")]
    Solve(#[from] SolveError),
}

/// Error type for registration failures
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// A solver is already registered for this year-day combination
    #[error("Duplicate solver registration for year {0} day {1}")]
    DuplicateSolver(u16, u8),
    /// Year or day is outside the supported range
    #[error("Year {0} day {1} is outside the supported range")]
    InvalidYearDay(u16, u8),
}
