//! Parallel executor for running solvers

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError};
use crate::inputs::InputStore;
use aoc_runner::{DynSolver, SolverRegistry};
use chrono::TimeDelta;
use itertools::Itertools;
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::sync::mpsc::Sender;

/// Result from a single solver execution
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, aoc_runner::SolverError>,
    /// Parse time, reported with the first part only
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// Work item representing a solver to execute
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Parallel executor for running solvers
pub struct Executor {
    sync_executor_config: SyncExecutorConfig,
    thread_pool: rayon::ThreadPool,
}

pub struct SyncExecutorConfig {
    registry: SolverRegistry,
    inputs: InputStore,
    parallelize_by: ParallelizeBy,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: SolverRegistry, config: &Config) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self {
            sync_executor_config: SyncExecutorConfig {
                registry,
                inputs: InputStore::new(config.input_dir.clone()),
                parallelize_by: config.parallelize_by,
                year_filter: config.year_filter,
                day_filter: config.day_filter,
                part_filter: config.part_filter,
            },
            thread_pool,
        })
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        let cfg = &self.sync_executor_config;
        cfg.registry
            .storage()
            .iter_info()
            .filter(|info| cfg.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| cfg.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on config.part_filter and solver's max parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.sync_executor_config.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0, // Empty range - intentional
            None => 1..=max_parts,
        }
    }

    /// Execute all work items and send results to channel
    pub fn execute(&self, tx: Sender<SolverResult>) -> Result<(), ArcExecutorError> {
        let work_items = self.collect_work_items();

        match self.sync_executor_config.parallelize_by {
            ParallelizeBy::Sequential => {
                // No parallelization, execute all in order
                let mut collected_error: Option<ArcExecutorError> = None;
                for work in work_items {
                    if let Err(e) =
                        run_solver_parallel(&work, &tx, &self.sync_executor_config)
                    {
                        collected_error = Some(ArcExecutorError::combine_opt(collected_error, e));
                    }
                }
                collected_error.map_or(Ok(()), Err)
            }
            ParallelizeBy::Year => {
                // Group by year, parallelize years using configured thread pool
                let by_year: Vec<Vec<WorkItem>> = work_items
                    .into_iter()
                    .chunk_by(|w| w.year)
                    .into_iter()
                    .map(|(_, group)| group.collect())
                    .collect();

                self.execute_parallel_grouped(by_year, &tx)
            }
            // Day and Part both parallelize across all work items (Part additionally
            // parallelizes within each item)
            ParallelizeBy::Day | ParallelizeBy::Part => self.execute_parallel(work_items, &tx),
        }
    }

    /// Execute work items in parallel, collecting errors
    fn execute_parallel(
        &self,
        work_items: Vec<WorkItem>,
        tx: &Sender<SolverResult>,
    ) -> Result<(), ArcExecutorError> {
        let sync_executor_config = &self.sync_executor_config;

        self.thread_pool.install(|| {
            work_items
                .into_par_iter()
                .map(|work| run_solver_parallel(&work, tx, sync_executor_config).err())
                .reduce_with(|err1, err2| {
                    err1.map(|err1| ArcExecutorError::combine_opt(err2, err1))
                })
                .unwrap_or_default()
                .map_or(Ok(()), Err)
        })
    }

    /// Execute grouped work items in parallel (for year-level parallelism)
    fn execute_parallel_grouped(
        &self,
        groups: Vec<Vec<WorkItem>>,
        tx: &Sender<SolverResult>,
    ) -> Result<(), ArcExecutorError> {
        let sync_executor_config = &self.sync_executor_config;

        self.thread_pool.install(|| {
            groups
                .into_par_iter()
                .map(|items| {
                    let mut err = None;
                    for work in items {
                        if let Err(e) = run_solver_parallel(&work, tx, sync_executor_config) {
                            err = Some(ArcExecutorError::combine_opt(err, e))
                        }
                    }
                    err
                })
                .reduce_with(|err1, err2| {
                    err1.map(|err1| ArcExecutorError::combine_opt(err2, err1))
                })
                .unwrap_or_default()
                .map_or(Ok(()), Err)
        })
    }
}

/// Create an error result for a part that never ran
fn make_error_result(year: u16, day: u8, part: u8, error: aoc_runner::SolverError) -> SolverResult {
    SolverResult {
        year,
        day,
        part,
        answer: Err(error),
        parse_duration: None,
        solve_duration: TimeDelta::zero(),
    }
}

/// Run the solver for one work item, dispatching on the parallelization mode
fn run_solver_parallel(
    work: &WorkItem,
    tx: &Sender<SolverResult>,
    sync_executor_config: &SyncExecutorConfig,
) -> Result<(), ArcExecutorError> {
    let input = match sync_executor_config.inputs.load(work.year, work.day) {
        Ok(input) => input,
        Err(source) => {
            // Report the failure on every requested part so the aggregator
            // still sees a result for each expected key
            let message = ExecutorError::InputLoad {
                year: work.year,
                day: work.day,
                source,
            }
            .to_string();
            for part in work.parts.clone() {
                let error = aoc_runner::SolverError::Parse(aoc_runner::ParseError::Other(
                    message.clone(),
                ));
                tx.send(make_error_result(work.year, work.day, part, error))
                    .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))?;
            }
            return Ok(());
        }
    };

    if matches!(sync_executor_config.parallelize_by, ParallelizeBy::Part) {
        run_solver_parts_parallel(work, &input, tx, sync_executor_config)
    } else {
        run_solver_sequential(work, &input, tx, sync_executor_config)
    }
}

/// Run solver with part-level parallelism, buffering results to emit in order
///
/// Each part gets its own solver instance, so the parse cost is paid once per
/// part; the parse duration is only reported with the first part.
fn run_solver_parts_parallel(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    sync_executor_config: &SyncExecutorConfig,
) -> Result<(), ArcExecutorError> {
    let (result_tx, result_rx) = std::sync::mpsc::channel();
    let (year, day) = (work.year, work.day);
    let registry = &sync_executor_config.registry;
    let start_part = *work.parts.start();

    work.parts
        .clone()
        .into_par_iter()
        .for_each_with(result_tx, |rtx, part| {
            let result = match registry.create_solver(year, day, input) {
                Ok(mut solver) => {
                    let parse_duration =
                        (part == start_part).then(|| solver.parse_duration());
                    let mut result = solve_part_internal(year, day, part, &mut *solver);
                    result.parse_duration = parse_duration;
                    result
                }
                Err(e) => make_error_result(year, day, part, e),
            };
            rtx.send(result).ok();
        });

    // Buffer and emit results in part order, one slot per requested part
    let mut buffer: Vec<Option<SolverResult>> = Vec::new();
    buffer.resize_with(work.parts.clone().count(), || None);
    let mut next_part = start_part;

    for result in result_rx {
        let slot = (result.part - start_part) as usize;
        buffer[slot] = Some(result);
        while let Some(result) = buffer
            .get_mut((next_part - start_part) as usize)
            .and_then(Option::take)
        {
            tx.send(result)
                .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))?;
            next_part += 1;
        }
    }
    Ok(())
}

/// Run all parts of one solver sequentially, streaming results as they finish
fn run_solver_sequential(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    sync_executor_config: &SyncExecutorConfig,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);
    let mut solver = match sync_executor_config.registry.create_solver(year, day, input) {
        Ok(solver) => solver,
        Err(e) => {
            // Parse failed; every requested part gets the same error
            let message = e.to_string();
            for part in work.parts.clone() {
                let error = aoc_runner::SolverError::Parse(
                    aoc_runner::ParseError::Other(message.clone()),
                );
                tx.send(make_error_result(year, day, part, error))
                    .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))?;
            }
            return Ok(());
        }
    };

    let mut parse_duration = Some(solver.parse_duration());
    for part in work.parts.clone() {
        let mut result = solve_part_internal(year, day, part, &mut *solver);
        result.parse_duration = parse_duration.take();
        tx.send(result)
            .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))?;
    }
    Ok(())
}

/// Solve a single part, converting timing into a result row
fn solve_part_internal(year: u16, day: u8, part: u8, solver: &mut dyn DynSolver) -> SolverResult {
    match solver.solve(part) {
        Ok(solved) => SolverResult {
            year,
            day,
            part,
            solve_duration: solved.duration(),
            answer: Ok(solved.answer),
            parse_duration: None,
        },
        Err(e) => SolverResult {
            year,
            day,
            part,
            answer: Err(e.into()),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_runner::{
        AocParser, ParseError, RegisterableSolver, RegistryBuilder, SolveError, Solver,
    };
    use std::path::PathBuf;

    struct TriPart;

    impl AocParser for TriPart {
        type SharedData<'a> = i64;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            input
                .trim()
                .parse()
                .map_err(|_| ParseError::InvalidFormat("expected integer".into()))
        }
    }

    impl Solver for TriPart {
        const PARTS: u8 = 3;

        fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
            match part {
                1..=3 => Ok((*shared * i64::from(part)).to_string()),
                _ => Err(SolveError::PartNotImplemented(part)),
            }
        }
    }

    fn config_with(solver: impl RegisterableSolver, year: u16, day: u8) -> SyncExecutorConfig {
        let registry = solver
            .register_with(RegistryBuilder::new(), year, day)
            .unwrap()
            .build();
        SyncExecutorConfig {
            registry,
            inputs: InputStore::new(PathBuf::from("inputs")),
            parallelize_by: ParallelizeBy::Part,
            year_filter: None,
            day_filter: None,
            part_filter: None,
        }
    }

    #[test]
    fn parts_parallel_emits_every_part_in_order() {
        let config = config_with(TriPart, 2022, 9);
        let work = WorkItem {
            year: 2022,
            day: 9,
            parts: 1..=3,
        };
        let (tx, rx) = std::sync::mpsc::channel();

        run_solver_parts_parallel(&work, "7", &tx, &config).unwrap();
        drop(tx);

        let results: Vec<SolverResult> = rx.iter().collect();
        let parts: Vec<u8> = results.iter().map(|r| r.part).collect();
        assert_eq!(parts, vec![1, 2, 3]);

        let answers: Vec<&str> = results
            .iter()
            .map(|r| r.answer.as_deref().unwrap())
            .collect();
        assert_eq!(answers, vec!["7", "14", "21"]);

        // Parse time rides with the first part only
        assert!(results[0].parse_duration.is_some());
        assert!(results[1..].iter().all(|r| r.parse_duration.is_none()));
    }

    #[test]
    fn parts_parallel_respects_partial_range() {
        let config = config_with(TriPart, 2022, 9);
        let work = WorkItem {
            year: 2022,
            day: 9,
            parts: 2..=3,
        };
        let (tx, rx) = std::sync::mpsc::channel();

        run_solver_parts_parallel(&work, "5", &tx, &config).unwrap();
        drop(tx);

        let parts: Vec<u8> = rx.iter().map(|r| r.part).collect();
        assert_eq!(parts, vec![2, 3]);
    }
}
