//! Compliance policy resolution: defaults, then policy file, then flags.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use orgaudit_core::{ComplianceConfig, ComplianceConfigBuilder};
use serde::Deserialize;

use crate::cli::Cli;

/// Contents of a TOML policy file. Every key is optional.
///
/// ```toml
/// [salary]
/// min_ratio = 1.2
/// max_ratio = 1.5
///
/// [reporting]
/// max_depth = 4
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyFile {
    /// The `[salary]` table.
    #[serde(default)]
    pub salary: SalaryPolicy,
    /// The `[reporting]` table.
    #[serde(default)]
    pub reporting: ReportingPolicy,
}

/// Salary band ratios, relative to the direct reports' average.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SalaryPolicy {
    /// Lower bound of the band.
    pub min_ratio: Option<f64>,
    /// Upper bound of the band.
    pub max_ratio: Option<f64>,
}

/// Reporting line limits.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportingPolicy {
    /// Most managers allowed between an employee and the top.
    pub max_depth: Option<usize>,
}

impl PolicyFile {
    /// Reads and parses a policy file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read policy file {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("invalid policy file {}", path.display()))
    }

    /// Parses policy file contents.
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Overrides the builder's values with the ones this file sets.
    ///
    /// Keys absent from the file leave the builder untouched.
    pub fn apply(&self, mut builder: ComplianceConfigBuilder) -> ComplianceConfigBuilder {
        if let Some(ratio) = self.salary.min_ratio {
            builder = builder.with_min_salary_ratio(ratio);
        }
        if let Some(ratio) = self.salary.max_ratio {
            builder = builder.with_max_salary_ratio(ratio);
        }
        if let Some(depth) = self.reporting.max_depth {
            builder = builder.with_max_reporting_depth(depth);
        }
        builder
    }
}

/// Builds the effective policy for a run and validates it.
pub fn resolve_config(cli: &Cli) -> Result<ComplianceConfig> {
    let mut builder = ComplianceConfig::builder();

    if let Some(path) = &cli.policy {
        builder = PolicyFile::load(path)?.apply(builder);
    }
    if let Some(ratio) = cli.min_ratio {
        builder = builder.with_min_salary_ratio(ratio);
    }
    if let Some(ratio) = cli.max_ratio {
        builder = builder.with_max_salary_ratio(ratio);
    }
    if let Some(depth) = cli.max_depth {
        builder = builder.with_max_reporting_depth(depth);
    }

    let config = builder.build();
    config.validate()?;
    Ok(config)
}
