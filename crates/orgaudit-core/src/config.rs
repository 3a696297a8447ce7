//! Compliance policy for the analyzer.

use crate::error::{AuditError, AuditResult};

/// Managers must earn at least this multiple of their reports' average.
pub const DEFAULT_MIN_SALARY_RATIO: f64 = 1.20;
/// Managers must earn at most this multiple of their reports' average.
pub const DEFAULT_MAX_SALARY_RATIO: f64 = 1.50;
/// Maximum number of managers between an employee and the root.
pub const DEFAULT_MAX_REPORTING_DEPTH: usize = 4;

/// Thresholds used by the [`ComplianceAnalyzer`](crate::ComplianceAnalyzer).
///
/// # Example
///
/// ```rust
/// use orgaudit_core::ComplianceConfig;
///
/// let config = ComplianceConfig::builder()
///     .with_salary_band(1.1, 1.6)
///     .with_max_reporting_depth(5)
///     .build();
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.max_reporting_depth, 5);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ComplianceConfig {
    /// Lower bound of the salary band, as a multiple of the reports' average.
    pub min_salary_ratio: f64,
    /// Upper bound of the salary band, as a multiple of the reports' average.
    pub max_salary_ratio: f64,
    /// Deepest allowed reporting line (managers above an employee).
    pub max_reporting_depth: usize,
}

impl Default for ComplianceConfig {
    fn default() -> Self {
        Self {
            min_salary_ratio: DEFAULT_MIN_SALARY_RATIO,
            max_salary_ratio: DEFAULT_MAX_SALARY_RATIO,
            max_reporting_depth: DEFAULT_MAX_REPORTING_DEPTH,
        }
    }
}

impl ComplianceConfig {
    /// Creates a new builder for ComplianceConfig.
    pub fn builder() -> ComplianceConfigBuilder {
        ComplianceConfigBuilder::default()
    }

    /// Checks that the salary band is usable.
    ///
    /// Ratios must be finite and non-negative, and the lower bound must not
    /// exceed the upper bound.
    pub fn validate(&self) -> AuditResult<()> {
        let (min, max) = (self.min_salary_ratio, self.max_salary_ratio);
        if !min.is_finite() || !max.is_finite() {
            return Err(AuditError::InvalidPolicy(format!(
                "salary ratios must be finite (got {min} and {max})"
            )));
        }
        if min < 0.0 || max < 0.0 {
            return Err(AuditError::InvalidPolicy(format!(
                "salary ratios must not be negative (got {min} and {max})"
            )));
        }
        if min > max {
            return Err(AuditError::InvalidPolicy(format!(
                "minimum salary ratio {min} exceeds maximum {max}"
            )));
        }
        Ok(())
    }
}

/// Builder for ComplianceConfig.
#[derive(Debug, Clone)]
pub struct ComplianceConfigBuilder {
    min_salary_ratio: f64,
    max_salary_ratio: f64,
    max_reporting_depth: usize,
}

impl Default for ComplianceConfigBuilder {
    fn default() -> Self {
        let defaults = ComplianceConfig::default();
        Self {
            min_salary_ratio: defaults.min_salary_ratio,
            max_salary_ratio: defaults.max_salary_ratio,
            max_reporting_depth: defaults.max_reporting_depth,
        }
    }
}

impl ComplianceConfigBuilder {
    /// Sets the lower salary ratio.
    pub fn with_min_salary_ratio(mut self, ratio: f64) -> Self {
        self.min_salary_ratio = ratio;
        self
    }

    /// Sets the upper salary ratio.
    pub fn with_max_salary_ratio(mut self, ratio: f64) -> Self {
        self.max_salary_ratio = ratio;
        self
    }

    /// Sets both salary ratios.
    pub fn with_salary_band(self, min: f64, max: f64) -> Self {
        self.with_min_salary_ratio(min).with_max_salary_ratio(max)
    }

    /// Sets the deepest allowed reporting line.
    pub fn with_max_reporting_depth(mut self, depth: usize) -> Self {
        self.max_reporting_depth = depth;
        self
    }

    /// Builds the ComplianceConfig.
    pub fn build(self) -> ComplianceConfig {
        ComplianceConfig {
            min_salary_ratio: self.min_salary_ratio,
            max_salary_ratio: self.max_salary_ratio,
            max_reporting_depth: self.max_reporting_depth,
        }
    }
}
