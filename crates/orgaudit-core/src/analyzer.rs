//! Salary-band and reporting-depth checks.

use crate::config::ComplianceConfig;
use crate::employee::{Employee, EmployeeIndex};
use crate::error::AuditResult;
use crate::findings::{
    AnalysisStats, ComplianceReport, ReportingDepthFinding, SalaryClassification, SalaryFinding,
};
use crate::traits::OrgQueryable;

/// The compliant salary range derived from a reports' average.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalaryBand {
    /// Lowest compliant salary.
    pub minimum: f64,
    /// Highest compliant salary.
    pub maximum: f64,
}

impl SalaryBand {
    /// Scales `average` by the configured ratios.
    pub fn from_average(average: f64, config: &ComplianceConfig) -> Self {
        Self {
            minimum: average * config.min_salary_ratio,
            maximum: average * config.max_salary_ratio,
        }
    }

    /// Classifies a salary against the band.
    ///
    /// Returns the violation direction and its (positive) magnitude, or
    /// `None` when the salary is inside the band. Both bounds are inclusive.
    pub fn classify(&self, actual: f64) -> Option<(SalaryClassification, f64)> {
        if actual < self.minimum {
            Some((SalaryClassification::Underpaid, self.minimum - actual))
        } else if actual > self.maximum {
            Some((SalaryClassification::Overpaid, actual - self.maximum))
        } else {
            None
        }
    }
}

/// Runs the compliance checks over any [`OrgQueryable`] store.
///
/// The analyzer never mutates the store; both checks are independent and
/// report findings in the store's index order.
///
/// # Example
///
/// ```rust
/// use orgaudit_core::{ComplianceAnalyzer, EmployeeRecord, OrgChart};
///
/// let chart = OrgChart::build(vec![
///     EmployeeRecord::new("1", "CEO", "Person", 100000.0, None),
///     EmployeeRecord::new("2", "Sub", "Person", 40000.0, Some("1")),
/// ])?;
///
/// let report = ComplianceAnalyzer::new(&chart).analyze();
/// let finding = &report.salary_findings[0];
/// assert!(finding.is_overpaid());
/// assert_eq!(finding.maximum_salary, 60000.0);
/// assert_eq!(finding.deviation, 40000.0);
/// # Ok::<(), orgaudit_core::AuditError>(())
/// ```
pub struct ComplianceAnalyzer<'a> {
    store: &'a dyn OrgQueryable,
    config: ComplianceConfig,
}

impl<'a> ComplianceAnalyzer<'a> {
    /// Creates an analyzer with the default policy.
    pub fn new(store: &'a dyn OrgQueryable) -> Self {
        Self {
            store,
            config: ComplianceConfig::default(),
        }
    }

    /// Creates an analyzer with a custom policy.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::InvalidPolicy`](crate::AuditError::InvalidPolicy)
    /// if the policy fails [`ComplianceConfig::validate`].
    pub fn with_config(store: &'a dyn OrgQueryable, config: ComplianceConfig) -> AuditResult<Self> {
        config.validate()?;
        Ok(Self { store, config })
    }

    /// Returns the policy in use.
    pub fn config(&self) -> &ComplianceConfig {
        &self.config
    }

    /// Runs both checks.
    pub fn analyze(&self) -> ComplianceReport<'a> {
        let salary_findings = self.analyze_salaries();
        let depth_findings = self.analyze_reporting_depth();
        let stats = AnalysisStats {
            employees_examined: self.store.employee_count(),
            managers_examined: self
                .employees()
                .filter(|&(index, _)| self.store.is_manager(index))
                .count(),
        };

        ComplianceReport {
            salary_findings,
            depth_findings,
            stats,
        }
    }

    /// Checks every manager's salary against their direct reports' average.
    pub fn analyze_salaries(&self) -> Vec<SalaryFinding<'a>> {
        self.employees()
            .filter(|&(index, _)| self.store.is_manager(index))
            .filter_map(|(index, manager)| self.check_salary(index, manager))
            .collect()
    }

    /// Checks every employee's distance from the root.
    pub fn analyze_reporting_depth(&self) -> Vec<ReportingDepthFinding<'a>> {
        let max_depth = self.config.max_reporting_depth;
        self.employees()
            .filter_map(|(index, employee)| {
                let depth = self.store.depth_from_root(index);
                (depth > max_depth).then(|| ReportingDepthFinding {
                    employee,
                    depth,
                    max_depth,
                    excess: depth - max_depth,
                })
            })
            .collect()
    }

    fn check_salary(&self, index: EmployeeIndex, manager: &'a Employee) -> Option<SalaryFinding<'a>> {
        let average = self.store.average_direct_report_salary(index);
        let band = SalaryBand::from_average(average, &self.config);
        let (classification, deviation) = band.classify(manager.salary)?;

        Some(SalaryFinding {
            manager,
            actual_salary: manager.salary,
            average_report_salary: average,
            minimum_salary: band.minimum,
            maximum_salary: band.maximum,
            deviation,
            classification,
        })
    }

    fn employees(&self) -> impl Iterator<Item = (EmployeeIndex, &'a Employee)> + 'a {
        let store = self.store;
        (0..store.employee_count()).filter_map(move |index| store.employee(index).map(|e| (index, e)))
    }
}
