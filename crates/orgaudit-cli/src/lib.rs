//! # orgaudit-cli
//!
//! Command-line front end for the organization audit. Reads an employee CSV,
//! builds the reporting hierarchy and prints a salary and reporting-line
//! compliance report as text or JSON.
//!
//! ```text
//! orgaudit [FILE] [--format text|json] [--policy policy.toml]
//!          [--min-ratio R] [--max-ratio R] [--max-depth N] [-v...]
//! ```
//!
//! Thresholds come from the built-in defaults, then an optional TOML policy
//! file, then the flags. Diagnostics go to stderr through `tracing`, the
//! report to stdout.

pub mod cli;
pub mod logging;
pub mod policy;
pub mod report;
pub mod run;

pub use cli::{Cli, OutputFormat, DEFAULT_INPUT};
pub use run::run;
