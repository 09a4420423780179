//! Year discovery and the top-level calendar run

use crate::config::Config;
use crate::error::CliError;
use crate::executor::Executor;
use crate::layout::CalendarLayout;
use crate::output::{OutputFormatter, Summary};
use aoc_solver::SolverRegistry;
use itertools::Itertools;
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::debug;

/// Whether a directory name denotes a year: four characters forming an integer
pub fn is_year_dir(name: &str) -> bool {
    name.chars().count() == 4 && name.parse::<i64>().is_ok()
}

/// Year directory names directly under `root`, in name order
pub fn discover_years(root: &Path) -> Result<Vec<String>, CliError> {
    let read_root = |source| CliError::ReadRoot {
        path: root.to_path_buf(),
        source,
    };

    let mut years = Vec::new();
    for entry in fs::read_dir(root).map_err(read_root)? {
        let entry = entry.map_err(read_root)?;
        if !entry.file_type().map_err(read_root)?.is_dir() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str()
            && is_year_dir(name)
        {
            years.push(name.to_string());
        }
    }

    Ok(years.into_iter().sorted().collect())
}

/// Runs every registered year found under the root directory
pub struct CalendarRunner<'a> {
    config: &'a Config,
    registry: &'a SolverRegistry,
    formatter: &'a OutputFormatter,
}

impl<'a> CalendarRunner<'a> {
    pub fn new(
        config: &'a Config,
        registry: &'a SolverRegistry,
        formatter: &'a OutputFormatter,
    ) -> Self {
        Self {
            config,
            registry,
            formatter,
        }
    }

    /// Print a banner for every year directory, dispatch registered years and
    /// finish with the total time
    pub fn run(&self) -> Result<Summary, CliError> {
        let start = Instant::now();
        let layout = CalendarLayout::new(&self.config.root);
        let executor =
            Executor::new(self.registry, &layout).with_day_filter(self.config.day_filter);
        let mut summary = Summary::default();

        let years = discover_years(layout.root())?;
        debug!(?years, "discovered year directories");

        for name in years.iter().filter(|name| self.config.wants_year(name)) {
            self.formatter.print_banner(name);

            match name.parse::<u16>() {
                Ok(year) if self.registry.storage().contains_year(year) => {
                    executor.execute(year, |result| {
                        self.formatter.print_day(&result);
                        summary.record(&result);
                    });
                }
                _ => debug!(year = %name, "no solvers registered, skipping"),
            }
        }

        self.formatter.print_total(start.elapsed());
        self.formatter.print_summary(&summary);
        Ok(summary)
    }
}
