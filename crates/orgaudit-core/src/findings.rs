//! Analysis result types.
//!
//! Findings borrow the employees they describe from the store they were
//! computed on, so a report lives no longer than its [`OrgChart`](crate::OrgChart).

use crate::employee::Employee;

/// Which side of the salary band a manager falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SalaryClassification {
    /// Below the minimum of the band.
    Underpaid,
    /// Above the maximum of the band.
    Overpaid,
}

impl std::fmt::Display for SalaryClassification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SalaryClassification::Underpaid => write!(f, "underpaid"),
            SalaryClassification::Overpaid => write!(f, "overpaid"),
        }
    }
}

/// A manager whose salary is outside the band around their reports' average.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SalaryFinding<'a> {
    /// The manager.
    pub manager: &'a Employee,
    /// The manager's salary.
    pub actual_salary: f64,
    /// Mean salary of the manager's direct reports.
    pub average_report_salary: f64,
    /// Lowest compliant salary.
    pub minimum_salary: f64,
    /// Highest compliant salary.
    pub maximum_salary: f64,
    /// Distance to the nearest compliant salary (always positive).
    pub deviation: f64,
    /// Direction of the violation.
    pub classification: SalaryClassification,
}

impl SalaryFinding<'_> {
    /// Returns true if the manager earns less than the band allows.
    pub fn is_underpaid(&self) -> bool {
        self.classification == SalaryClassification::Underpaid
    }

    /// Returns true if the manager earns more than the band allows.
    pub fn is_overpaid(&self) -> bool {
        self.classification == SalaryClassification::Overpaid
    }
}

/// An employee with too many managers between them and the root.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ReportingDepthFinding<'a> {
    /// The employee.
    pub employee: &'a Employee,
    /// Managers between the employee and the root, root included.
    pub depth: usize,
    /// The limit that was exceeded.
    pub max_depth: usize,
    /// `depth - max_depth`.
    pub excess: usize,
}

/// Counts gathered while analyzing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AnalysisStats {
    /// Employees visited by the reporting-depth check.
    pub employees_examined: usize,
    /// Managers visited by the salary check.
    pub managers_examined: usize,
}

/// Both finding lists, each in input order.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ComplianceReport<'a> {
    /// Salary band violations.
    pub salary_findings: Vec<SalaryFinding<'a>>,
    /// Reporting line violations.
    pub depth_findings: Vec<ReportingDepthFinding<'a>>,
    /// Analysis counts.
    pub stats: AnalysisStats,
}

impl<'a> ComplianceReport<'a> {
    /// Returns true when neither check found anything.
    pub fn is_compliant(&self) -> bool {
        self.salary_findings.is_empty() && self.depth_findings.is_empty()
    }

    /// Total number of findings.
    pub fn finding_count(&self) -> usize {
        self.salary_findings.len() + self.depth_findings.len()
    }

    /// Underpaid managers, in input order.
    pub fn underpaid(&self) -> impl Iterator<Item = &SalaryFinding<'a>> {
        self.salary_findings.iter().filter(|f| f.is_underpaid())
    }

    /// Overpaid managers, in input order.
    pub fn overpaid(&self) -> impl Iterator<Item = &SalaryFinding<'a>> {
        self.salary_findings.iter().filter(|f| f.is_overpaid())
    }
}
