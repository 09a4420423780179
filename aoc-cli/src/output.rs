//! Output formatting for the calendar report

use crate::executor::{DayResult, DayState};
use chrono::TimeDelta;
use std::time::Duration;

/// Width of the banner rule
const RULE_WIDTH: usize = 80;
/// Padding before and after the year in the banner
const BANNER_LEFT: usize = 35;
const BANNER_RIGHT: usize = 39;
/// Column width for durations
const DURATION_WIDTH: usize = 12;

/// Day counts across the whole run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub solved: usize,
    pub todo: usize,
}

impl Summary {
    pub fn record(&mut self, result: &DayResult) {
        match result.state {
            DayState::Solved => self.solved += 1,
            _ => self.todo += 1,
        }
    }
}

/// Output formatter for the calendar report
pub struct OutputFormatter {
    quiet: bool,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Print the banner opening a year directory
    pub fn print_banner(&self, year: &str) {
        if self.quiet {
            return;
        }
        println!("{}", format_banner(year));
    }

    /// Print the status line of a finished day
    pub fn print_day(&self, result: &DayResult) {
        println!("{}", format_status(result));
    }

    /// Print the total wall-clock time of the run
    pub fn print_total(&self, elapsed: Duration) {
        if self.quiet {
            return;
        }
        println!(
            "TOTAL EXECUTION TIME: {:>width$}",
            format_std_duration(elapsed),
            width = DURATION_WIDTH
        );
    }

    /// Print solved/todo counts
    pub fn print_summary(&self, summary: &Summary) {
        if self.quiet {
            return;
        }
        println!("Days: {} solved, {} todo", summary.solved, summary.todo);
    }
}

fn format_banner(year: &str) -> String {
    let rule = "-".repeat(RULE_WIDTH);
    format!(
        "{rule}\n{}{year}{}\n{rule}",
        " ".repeat(BANNER_LEFT),
        " ".repeat(BANNER_RIGHT)
    )
}

/// `DAY 01: [      3.00ms]\t[SOLVED][Calorie Counting]`
fn format_status(result: &DayResult) -> String {
    let prefix = format!(
        "DAY {:02}: [{:>width$}]\t",
        result.day,
        format_std_duration(result.duration),
        width = DURATION_WIDTH
    );

    match &result.state {
        DayState::Solved => format!("{prefix}[SOLVED][{}]", result.title),
        DayState::Errored(e) => format!("{prefix}[TODO][{}][ERROR: {}]", result.title, e),
        // Only finished days are reported
        DayState::NotStarted | DayState::Running => format!("{prefix}[TODO][{}]", result.title),
    }
}

/// Format a TimeDelta for display
pub fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
pub fn format_std_duration(d: Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}
