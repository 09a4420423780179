//! Configuration resolution from CLI args

use crate::cli::Args;
use std::path::PathBuf;

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the year directories
    pub root: PathBuf,
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args
    pub fn from_args(args: Args) -> Self {
        Config {
            root: args.root,
            year_filter: args.year,
            day_filter: args.day,
            quiet: args.quiet,
        }
    }

    /// Whether the year directory `name` passes the year filter
    pub fn wants_year(&self, name: &str) -> bool {
        self.year_filter
            .is_none_or(|year| name.parse::<u16>().is_ok_and(|parsed| parsed == year))
    }
}
