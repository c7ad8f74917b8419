//! Advent of Code runner library
//!
//! A type-safe framework for running Advent of Code solvers across multiple
//! years and days. Each puzzle is implemented as a solver with custom input
//! parsing that can produce results for multiple parts.
//!
//! # Overview
//!
//! This library provides:
//! - Trait-based interfaces for parsing ([`AocParser`]) and solving
//!   ([`PartSolver`], [`Solver`])
//! - Type-erased solver instances with parse/solve timing ([`DynSolver`])
//! - A registry for looking up solvers by year and day
//! - Automatic registration through the plugin system
//!
//! # Quick Example
//!
//! ```
//! use aoc_runner::{AocParser, ParseError, PartSolver, RegisterableSolver,
//!                  RegistryBuilder, SolveError};
//! use aoc_runner_macros::AocSolver;
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 1)]
//! struct SumSolver;
//!
//! impl AocParser for SumSolver {
//!     type SharedData<'a> = Vec<i32>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for SumSolver {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<i32>().to_string())
//!     }
//! }
//!
//! let registry = SumSolver
//!     .register_with(RegistryBuilder::new(), 2022, 1)
//!     .unwrap()
//!     .build();
//! let mut solver = registry.create_solver(2022, 1, "1\n2\n3").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "6");
//! ```
//!
//! # Part Dependencies
//!
//! Parts receive the shared data mutably in turn, so part 1 may cache
//! intermediate results for part 2 (store an `Option` in the shared struct).
//! A part must not destroy state another part still needs.

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    FactoryInfo, RegisterableSolver, RegistryBuilder, SolverFactory, SolverPlugin, SolverRegistry,
    SolverStorage,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Re-export inventory for use by the derive macros
pub use inventory;

// Re-export the derive macros
pub use aoc_runner_macros::{AocSolver, AutoRegisterSolver};
