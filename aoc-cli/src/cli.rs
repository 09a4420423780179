//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Advent of Code calendar runner
///
/// Solves every implemented day found under the root directory and checks
/// each answer against the one recorded in the day's puzzle description.
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Solve and verify Advent of Code days on disk", version)]
pub struct Args {
    /// Directory holding the year directories (`<YYYY>/<DD>/input.txt`)
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Year to run (runs all years if omitted)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Day to run (runs all days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Quiet mode - only print day status lines
    #[arg(short, long)]
    pub quiet: bool,
}
