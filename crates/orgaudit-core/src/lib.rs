//! # orgaudit-core
//!
//! In-memory organizational hierarchy and the compliance checks run over it.
//!
//! ## Key Features
//!
//! - **Flat record store** - every employee lives in one `Vec`; manager and
//!   direct-report links are indices, never owning pointers
//! - **Two-pass builder** - index all ids first, then link, so input order
//!   does not matter
//! - **Strict structure** - unknown managers, duplicate ids and reporting
//!   cycles abort the build
//! - **Pure analyzers** - checks run against any [`OrgQueryable`] store
//!
//! ## Quick Start
//!
//! ```rust
//! use orgaudit_core::{ComplianceAnalyzer, EmployeeRecord, OrgChart};
//!
//! let chart = OrgChart::build(vec![
//!     EmployeeRecord::new("123", "Joe", "Doe", 60000.0, None),
//!     EmployeeRecord::new("124", "Martin", "Chekov", 45000.0, Some("123")),
//!     EmployeeRecord::new("300", "Alice", "Hasacat", 50000.0, Some("124")),
//! ])?;
//!
//! let report = ComplianceAnalyzer::new(&chart).analyze();
//!
//! for finding in report.underpaid() {
//!     println!("{} is underpaid by {:.2}", finding.manager.full_name(), finding.deviation);
//! }
//! assert_eq!(report.underpaid().count(), 1);
//! # Ok::<(), orgaudit_core::AuditError>(())
//! ```
//!
//! ## Rules
//!
//! | Check | Applies to | Violation |
//! |-------|------------|-----------|
//! | Salary band | Employees with direct reports | salary < avg × 1.20 or > avg × 1.50 |
//! | Reporting depth | Every employee | more than 4 managers up to the root |
//!
//! Both thresholds are configurable through [`ComplianceConfig`].
//!
//! ## Feature Flags
//!
//! - `serde` - `Serialize` for employees, findings, reports and the policy
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       orgaudit-core                         │
//! │                                                             │
//! │  EmployeeRecord (orgaudit-records)                          │
//! │  └── HierarchyBuilder: index → link → acyclicity            │
//! │       └── OrgChart (implements OrgQueryable)                │
//! │            └── ComplianceAnalyzer                           │
//! │                 ├── analyze_salaries   → SalaryFinding      │
//! │                 └── analyze_reporting_depth                 │
//! │                                        → ReportingDepthFinding │
//! └─────────────────────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod analyzer;
mod builder;
mod config;
mod employee;
mod error;
mod findings;
mod store;
mod traits;

// Public re-exports
pub use analyzer::{ComplianceAnalyzer, SalaryBand};
pub use builder::HierarchyBuilder;
pub use config::{
    ComplianceConfig, ComplianceConfigBuilder, DEFAULT_MAX_REPORTING_DEPTH,
    DEFAULT_MAX_SALARY_RATIO, DEFAULT_MIN_SALARY_RATIO,
};
pub use employee::{Employee, EmployeeIndex};
pub use error::{AuditError, AuditResult};
pub use findings::{
    AnalysisStats, ComplianceReport, ReportingDepthFinding, SalaryClassification, SalaryFinding,
};
pub use store::OrgChart;
pub use traits::OrgQueryable;

// Re-export the record types callers build charts from
pub use orgaudit_records::{EmployeeId, EmployeeRecord};
