//! Command-line interface for running Advent of Code solutions

mod aggregator;
mod cli;
mod config;
mod error;
mod executor;
mod inputs;
mod output;

// Import aoc-2022 to link the solver plugins
use aoc_2022 as _;

use aoc_runner::RegistryBuilder;
use clap::Parser;
use cli::Args;
use config::Config;
use executor::Executor;
use inputs::InputStore;
use output::OutputFormatter;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), error::CliError> {
    let list = args.list;
    let config = Config::from_args(args);

    // Build registry with tag filtering (only once)
    let registry = build_registry(&config.tags)?;

    if list {
        return list_solvers(&registry, &config);
    }

    // Create executor
    let executor =
        Executor::new(registry, &config).map_err(|e| error::CliError::Config(e.to_string()))?;

    // Collect work items
    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    // Report missing inputs up front; those days run anyway and surface as
    // per-part errors so the exit code reflects them
    let missing_inputs = check_missing_inputs(&work_items, &config);
    if !missing_inputs.is_empty() {
        let store = InputStore::new(config.input_dir.clone());
        eprintln!("Missing {} input file(s):", missing_inputs.len());
        for (year, day) in &missing_inputs {
            eprintln!("  - {}", store.input_path(*year, *day).display());
        }
    }

    run_executor(executor, config.quiet)
}

/// Print the registered solvers matching the filters
fn list_solvers(registry: &aoc_runner::SolverRegistry, config: &Config) -> Result<(), error::CliError> {
    let store = InputStore::new(config.input_dir.clone());
    let mut count = 0;
    for info in registry
        .storage()
        .iter_info()
        .filter(|info| config.year_filter.is_none_or(|y| info.year == y))
        .filter(|info| config.day_filter.is_none_or(|d| info.day == d))
    {
        let input = if store.contains(info.year, info.day) {
            "input present"
        } else {
            "input missing"
        };
        println!(
            "{}/{:02} ({} part{}, {})",
            info.year,
            info.day,
            info.parts,
            if info.parts == 1 { "" } else { "s" },
            input
        );
        count += 1;
    }
    println!("{} solver(s) registered.", count);
    Ok(())
}

/// Check which inputs are missing from the input directory
fn check_missing_inputs(work_items: &[executor::WorkItem], config: &Config) -> Vec<(u16, u8)> {
    let store = InputStore::new(config.input_dir.clone());
    work_items
        .iter()
        .filter(|w| !store.contains(w.year, w.day))
        .map(|w| (w.year, w.day))
        .collect()
}

/// Run the executor and collect results
fn run_executor(executor: Executor, quiet: bool) -> Result<(), error::CliError> {
    let work_items = executor.collect_work_items();
    if !quiet {
        println!("Running {} solver(s)...", work_items.len());
    }

    // Build expected keys for result aggregation
    let expected_keys: Vec<aggregator::ResultKey> = work_items
        .iter()
        .flat_map(|w| {
            w.parts.clone().map(move |p| aggregator::ResultKey {
                year: w.year,
                day: w.day,
                part: p,
            })
        })
        .collect();

    // Set up result channel
    let (tx, rx) = std::sync::mpsc::channel();

    // Run executor in background thread
    let executor_handle = std::thread::spawn(move || executor.execute(tx));

    // Collect and display results in order using aggregator
    let formatter = OutputFormatter::new(quiet);
    let mut aggregator = aggregator::ResultAggregator::new(expected_keys);
    let mut results = Vec::new();

    for result in rx {
        // Add to aggregator and print any results that are ready (in order)
        for ready in aggregator.add(result) {
            formatter.print_result(&ready);
            results.push(ready);
        }
    }

    // Drain any remaining buffered results (shouldn't happen if all results arrived)
    for ready in aggregator.drain() {
        formatter.print_result(&ready);
        results.push(ready);
    }

    // Verify all expected results were received
    if !aggregator.is_complete() {
        eprintln!("Warning: Not all expected results were received");
    }

    // Wait for executor to finish
    executor_handle
        .join()
        .map_err(|_| error::CliError::Config("Executor thread panicked".to_string()))?
        .map_err(error::CliError::Executor)?;

    // Print summary
    formatter.print_summary(&results);

    let failures = results.iter().filter(|r| r.answer.is_err()).count();
    if failures > 0 {
        return Err(error::CliError::Config(format!(
            "{} part(s) failed to solve",
            failures
        )));
    }
    Ok(())
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<aoc_runner::SolverRegistry, error::CliError> {
    let builder = RegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
