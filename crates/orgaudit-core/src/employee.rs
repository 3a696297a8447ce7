//! The employee entity held by the record store.

use orgaudit_records::{EmployeeId, EmployeeRecord};

/// Position of an employee in an [`OrgChart`](crate::OrgChart).
pub type EmployeeIndex = usize;

/// An employee together with their place in the hierarchy.
///
/// `manager` and `direct_reports` are indices into the owning store, not
/// owned references. They are filled in once by the
/// [`HierarchyBuilder`](crate::HierarchyBuilder) and never change afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Employee {
    /// Unique employee identifier.
    pub id: EmployeeId,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Salary.
    pub salary: f64,
    /// Raw manager reference from the input (None = root).
    pub manager_id: Option<EmployeeId>,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) manager: Option<EmployeeIndex>,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) direct_reports: Vec<EmployeeIndex>,
}

impl From<EmployeeRecord> for Employee {
    /// Creates an unlinked employee; links are set when a hierarchy is built.
    fn from(record: EmployeeRecord) -> Self {
        Self {
            id: record.id,
            first_name: record.first_name,
            last_name: record.last_name,
            salary: record.salary,
            manager_id: record.manager_id,
            manager: None,
            direct_reports: Vec::new(),
        }
    }
}

impl Employee {
    /// Index of the direct manager, if any.
    pub fn manager(&self) -> Option<EmployeeIndex> {
        self.manager
    }

    /// Indices of direct reports, in input order.
    pub fn direct_reports(&self) -> &[EmployeeIndex] {
        &self.direct_reports
    }

    /// Returns "first last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl std::fmt::Display for Employee {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} (ID: {})", self.first_name, self.last_name, self.id)
    }
}
