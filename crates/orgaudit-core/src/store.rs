//! The record store: every employee in one flat collection.

use std::collections::HashMap;

use orgaudit_records::{EmployeeId, EmployeeRecord};

use crate::builder::HierarchyBuilder;
use crate::employee::{Employee, EmployeeIndex};
use crate::error::AuditResult;
use crate::traits::OrgQueryable;

/// A fully built, immutable organizational hierarchy.
///
/// Employees keep their input order; [`EmployeeIndex`] values are positions
/// in that order. Construct one with [`OrgChart::build`] or a
/// [`HierarchyBuilder`].
///
/// # Example
///
/// ```rust
/// use orgaudit_core::{EmployeeRecord, OrgChart, OrgQueryable};
///
/// let chart = OrgChart::build(vec![
///     EmployeeRecord::new("123", "Joe", "Doe", 60000.0, None),
///     EmployeeRecord::new("124", "Martin", "Chekov", 45000.0, Some("123")),
/// ])?;
///
/// let martin = chart.index_of("124").unwrap();
/// assert_eq!(chart.depth_from_root(martin), 1);
/// assert_eq!(chart.manager(martin).map(|m| m.id.as_str()), Some("123"));
/// # Ok::<(), orgaudit_core::AuditError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct OrgChart {
    employees: Vec<Employee>,
    index: HashMap<EmployeeId, EmployeeIndex>,
}

impl OrgChart {
    /// Builds a chart from records in input order.
    ///
    /// Shorthand for [`HierarchyBuilder::from_records`] followed by
    /// [`HierarchyBuilder::build`].
    pub fn build(records: impl IntoIterator<Item = EmployeeRecord>) -> AuditResult<Self> {
        HierarchyBuilder::from_records(records).build()
    }

    pub(crate) fn from_parts(
        employees: Vec<Employee>,
        index: HashMap<EmployeeId, EmployeeIndex>,
    ) -> Self {
        Self { employees, index }
    }

    /// Returns the number of employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if the chart has no employees.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Gets the employee at an index.
    pub fn get(&self, index: EmployeeIndex) -> Option<&Employee> {
        self.employees.get(index)
    }

    /// Looks up an employee by id.
    pub fn find(&self, id: &str) -> Option<&Employee> {
        self.index_of(id).and_then(|index| self.get(index))
    }

    /// Looks up the index of an employee id.
    pub fn index_of(&self, id: &str) -> Option<EmployeeIndex> {
        self.index.get(id).copied()
    }

    /// Iterates over all employees in input order.
    pub fn iter(&self) -> impl Iterator<Item = &Employee> {
        self.employees.iter()
    }

    /// Iterates over employees without a manager.
    pub fn roots(&self) -> impl Iterator<Item = &Employee> {
        self.employees.iter().filter(|e| e.manager.is_none())
    }

    /// Gets the direct manager of the employee at an index.
    pub fn manager(&self, index: EmployeeIndex) -> Option<&Employee> {
        self.manager_of(index).and_then(|m| self.get(m))
    }

    /// Iterates over the direct reports of the employee at an index.
    pub fn direct_reports(&self, index: EmployeeIndex) -> impl Iterator<Item = &Employee> {
        self.direct_reports_of(index)
            .iter()
            .filter_map(|&report| self.get(report))
    }
}

impl OrgQueryable for OrgChart {
    fn employee_count(&self) -> usize {
        self.employees.len()
    }

    fn employee(&self, index: EmployeeIndex) -> Option<&Employee> {
        self.employees.get(index)
    }

    fn manager_of(&self, index: EmployeeIndex) -> Option<EmployeeIndex> {
        self.employees.get(index).and_then(|e| e.manager)
    }

    fn direct_reports_of(&self, index: EmployeeIndex) -> &[EmployeeIndex] {
        self.employees
            .get(index)
            .map(|e| e.direct_reports.as_slice())
            .unwrap_or(&[])
    }
}

impl<'a> IntoIterator for &'a OrgChart {
    type Item = &'a Employee;
    type IntoIter = std::slice::Iter<'a, Employee>;

    fn into_iter(self) -> Self::IntoIter {
        self.employees.iter()
    }
}
