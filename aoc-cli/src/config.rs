//! Configuration resolution from CLI args

use crate::cli::{Args, ParallelizeBy};
use std::path::PathBuf;

/// Resolved runtime configuration
pub struct Config {
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    /// Directory holding puzzle inputs
    pub input_dir: PathBuf,
    /// Number of threads for parallel execution
    pub thread_count: usize,
    /// Parallelization level
    pub parallelize_by: ParallelizeBy,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args
    pub fn from_args(args: Args) -> Self {
        Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            input_dir: args.input_dir,
            thread_count: args.threads.unwrap_or_else(num_cpus),
            parallelize_by: args.parallelize_by,
            quiet: args.quiet,
        }
    }
}

/// Get number of CPUs
fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
