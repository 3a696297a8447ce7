//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

/// Input file used when none is given on the command line.
pub const DEFAULT_INPUT: &str = "employees.csv";

/// Audit an organization's manager salaries and reporting lines.
#[derive(Debug, Parser)]
#[command(name = "orgaudit", version)]
#[command(about = "Audit an organization's manager salaries and reporting lines")]
pub struct Cli {
    /// CSV file with columns Id,firstName,lastName,salary,managerId
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// TOML policy file with [salary] and [reporting] thresholds
    #[arg(long, value_name = "FILE")]
    pub policy: Option<PathBuf>,

    /// Minimum manager salary as a multiple of the direct reports' average
    #[arg(long, value_name = "RATIO")]
    pub min_ratio: Option<f64>,

    /// Maximum manager salary as a multiple of the direct reports' average
    #[arg(long, value_name = "RATIO")]
    pub max_ratio: Option<f64>,

    /// Maximum number of managers between an employee and the top
    #[arg(long, value_name = "LEVELS")]
    pub max_depth: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// How the report is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable console report
    Text,
    /// Pretty-printed JSON document
    Json,
}
