//! The audit pipeline behind the `orgaudit` binary.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use orgaudit_core::{ComplianceAnalyzer, OrgChart};
use orgaudit_records::read_records;
use tracing::{debug, info, warn};

use crate::cli::{Cli, OutputFormat, DEFAULT_INPUT};
use crate::policy::resolve_config;
use crate::report::{render_json, TextReport};

const USAGE_RULE: &str = "===========================================";

/// Reads, builds, analyzes and writes the report to `out`.
///
/// Findings are part of a successful run. Errors are returned for unreadable
/// or malformed input and for an invalid policy.
pub fn run(cli: &Cli, out: &mut dyn Write) -> Result<()> {
    let config = resolve_config(cli)?;
    debug!(?config, "resolved compliance policy");

    let path = input_path(cli, out)?;
    info!(path = %path.display(), "reading employee data");
    let records = read_records(&path).context("error reading employee data")?;

    if records.is_empty() {
        writeln!(out, "No employee data found in file: {}", path.display())?;
        return Ok(());
    }
    info!(records = records.len(), "parsed employee records");

    let chart = OrgChart::build(records).context("error building organizational hierarchy")?;
    debug!(
        employees = chart.len(),
        roots = chart.roots().count(),
        "hierarchy built"
    );

    let analyzer = ComplianceAnalyzer::with_config(&chart, config)?;
    let report = analyzer.analyze();
    info!(
        salary = report.salary_findings.len(),
        reporting = report.depth_findings.len(),
        "analysis complete"
    );
    if !report.is_compliant() {
        warn!(findings = report.finding_count(), "organization has compliance findings");
    }

    match cli.format {
        OutputFormat::Text => write!(out, "{}", TextReport::new(&report, analyzer.config()))?,
        OutputFormat::Json => {
            let json = render_json(&report, analyzer.config()).context("error encoding report")?;
            writeln!(out, "{json}")?;
        }
    }
    Ok(())
}

fn input_path(cli: &Cli, out: &mut dyn Write) -> Result<PathBuf> {
    if let Some(file) = &cli.file {
        return Ok(file.clone());
    }

    // JSON output stays machine-readable.
    if cli.format == OutputFormat::Text {
        print_usage_banner(out)?;
    }
    Ok(Path::new(DEFAULT_INPUT).to_path_buf())
}

fn print_usage_banner(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{USAGE_RULE}")?;
    writeln!(out, "No CSV file specified. Using {DEFAULT_INPUT}.")?;
    writeln!(out, "{USAGE_RULE}")?;
    writeln!(out)?;
    writeln!(out, "Usage: orgaudit <path-to-csv-file>")?;
    writeln!(out, "Example: orgaudit {DEFAULT_INPUT}")?;
    writeln!(out)?;
    Ok(())
}
