//! Advent of Code 2022 puzzle solutions
//!
//! One module per day. Each solution registers itself with the runner's
//! plugin system via the `AutoRegisterSolver` derive, so linking this crate
//! is enough to make the solvers discoverable.

pub mod year_2022;
