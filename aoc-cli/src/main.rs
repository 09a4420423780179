//! AOC CLI - solves every implemented Advent of Code day found on disk and
//! checks each answer against the recorded one

mod calendar;
mod cli;
mod config;
mod error;
mod executor;
mod layout;
mod output;

use aoc_solver::{SolverRegistry, SolverRegistryBuilder};
use calendar::CalendarRunner;
use clap::Parser;
use cli::Args;
use config::Config;
use output::OutputFormatter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    init_tracing();
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`)
fn init_tracing() {
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap_or_default();
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}

fn run(args: Args) -> Result<(), error::CliError> {
    let config = Config::from_args(args);
    let registry = build_registry()?;
    let formatter = OutputFormatter::new(config.quiet);

    CalendarRunner::new(&config, &registry, &formatter).run()?;
    Ok(())
}

/// Build the registry from every year's solver table
fn build_registry() -> Result<SolverRegistry, error::CliError> {
    let builder = aoc_solutions::register_all(SolverRegistryBuilder::new())?;
    Ok(builder.build())
}
