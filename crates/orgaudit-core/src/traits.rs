//! Read-only query interface over a built hierarchy.
//!
//! The [`ComplianceAnalyzer`](crate::ComplianceAnalyzer) only talks to the
//! hierarchy through [`OrgQueryable`]. [`OrgChart`](crate::OrgChart) is the
//! production implementation; tests can supply their own store.
//!
//! # Example: A Hand-Wired Store
//!
//! ```rust
//! use orgaudit_core::{Employee, EmployeeIndex, EmployeeRecord, OrgQueryable};
//!
//! struct Pair {
//!     people: Vec<Employee>,
//!     reports: Vec<Vec<EmployeeIndex>>,
//! }
//!
//! impl OrgQueryable for Pair {
//!     fn employee_count(&self) -> usize {
//!         self.people.len()
//!     }
//!
//!     fn employee(&self, index: EmployeeIndex) -> Option<&Employee> {
//!         self.people.get(index)
//!     }
//!
//!     fn manager_of(&self, index: EmployeeIndex) -> Option<EmployeeIndex> {
//!         (index == 1).then_some(0)
//!     }
//!
//!     fn direct_reports_of(&self, index: EmployeeIndex) -> &[EmployeeIndex] {
//!         self.reports.get(index).map(Vec::as_slice).unwrap_or(&[])
//!     }
//! }
//!
//! let store = Pair {
//!     people: vec![
//!         Employee::from(EmployeeRecord::new("1", "Ceo", "A", 100.0, None)),
//!         Employee::from(EmployeeRecord::new("2", "Dev", "B", 80.0, Some("1"))),
//!     ],
//!     reports: vec![vec![1], vec![]],
//! };
//!
//! assert!(store.is_root(0));
//! assert!(store.is_manager(0));
//! assert_eq!(store.depth_from_root(1), 1);
//! assert_eq!(store.average_direct_report_salary(0), 80.0);
//! ```

use crate::employee::{Employee, EmployeeIndex};

/// Trait for stores that expose an employee hierarchy.
///
/// # Required Methods
///
/// - [`employee_count`](Self::employee_count) - Number of employees
/// - [`employee`](Self::employee) - Employee at an index
/// - [`manager_of`](Self::manager_of) - Direct manager link
/// - [`direct_reports_of`](Self::direct_reports_of) - Direct report links
///
/// The analysis queries are provided on top of these. Implementations must
/// not contain reporting cycles: [`depth_from_root`](Self::depth_from_root)
/// follows manager links until none remain.
pub trait OrgQueryable {
    /// Number of employees in the store. Valid indices are `0..count`,
    /// in input order.
    fn employee_count(&self) -> usize;

    /// Gets the employee at an index.
    fn employee(&self, index: EmployeeIndex) -> Option<&Employee>;

    /// Gets the direct manager of an employee.
    fn manager_of(&self, index: EmployeeIndex) -> Option<EmployeeIndex>;

    /// Gets the direct reports of an employee, in input order.
    ///
    /// Returns an empty slice for individual contributors and unknown
    /// indices.
    fn direct_reports_of(&self, index: EmployeeIndex) -> &[EmployeeIndex];

    /// True iff the employee has no manager.
    fn is_root(&self, index: EmployeeIndex) -> bool {
        self.manager_of(index).is_none()
    }

    /// True iff the employee has at least one direct report.
    fn is_manager(&self, index: EmployeeIndex) -> bool {
        !self.direct_reports_of(index).is_empty()
    }

    /// Mean salary of the direct reports; `0.0` when there are none.
    fn average_direct_report_salary(&self, index: EmployeeIndex) -> f64 {
        let reports = self.direct_reports_of(index);
        if reports.is_empty() {
            return 0.0;
        }
        let total: f64 = reports
            .iter()
            .filter_map(|&report| self.employee(report))
            .map(|report| report.salary)
            .sum();
        total / reports.len() as f64
    }

    /// Number of manager hops from the employee up to the root.
    ///
    /// The root has depth 0.
    fn depth_from_root(&self, index: EmployeeIndex) -> usize {
        let mut depth = 0;
        let mut current = self.manager_of(index);
        while let Some(manager) = current {
            depth += 1;
            current = self.manager_of(manager);
        }
        depth
    }
}
