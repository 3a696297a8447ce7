//! Hierarchy construction from flat records.
//!
//! Building runs in explicit passes over the complete record set:
//!
//! 1. **index** - one [`Employee`] per record, id → position map
//! 2. **link** - resolve every manager id, set back-references and append
//!    direct reports in input order
//! 3. **acyclicity** - every reporting line must end at a root
//!
//! Managers may appear after their reports in the input, so no link is
//! attempted until every id is known. The first error in input order aborts
//! the build and nothing is returned.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use orgaudit_records::{EmployeeId, EmployeeRecord};

use crate::employee::{Employee, EmployeeIndex};
use crate::error::{AuditError, AuditResult};
use crate::store::OrgChart;

/// Collects raw records and wires them into an [`OrgChart`].
///
/// # Example
///
/// ```rust
/// use orgaudit_core::{AuditError, EmployeeRecord, HierarchyBuilder};
///
/// let mut builder = HierarchyBuilder::new();
/// builder.push(EmployeeRecord::new("1", "Ceo", "A", 100.0, None));
/// builder.push(EmployeeRecord::new("2", "Dev", "B", 80.0, Some("9")));
///
/// let err = builder.build().unwrap_err();
/// assert_eq!(
///     err,
///     AuditError::UnknownManager {
///         manager_id: "9".to_string(),
///         employee_id: "2".to_string(),
///     }
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct HierarchyBuilder {
    records: Vec<EmployeeRecord>,
}

impl HierarchyBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder pre-loaded with records.
    pub fn from_records(records: impl IntoIterator<Item = EmployeeRecord>) -> Self {
        Self {
            records: records.into_iter().collect(),
        }
    }

    /// Appends one record.
    pub fn push(&mut self, record: EmployeeRecord) -> &mut Self {
        self.records.push(record);
        self
    }

    /// Number of records collected so far.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no records were collected.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Builds the hierarchy.
    ///
    /// # Errors
    ///
    /// - [`AuditError::DuplicateEmployeeId`] if an id repeats
    /// - [`AuditError::UnknownManager`] if a manager id resolves to nobody
    /// - [`AuditError::CyclicReportingLine`] if a reporting line loops
    pub fn build(self) -> AuditResult<OrgChart> {
        let (mut employees, index) = index_records(self.records)?;
        link_managers(&mut employees, &index)?;
        check_acyclic(&employees)?;
        Ok(OrgChart::from_parts(employees, index))
    }
}

impl Extend<EmployeeRecord> for HierarchyBuilder {
    fn extend<I: IntoIterator<Item = EmployeeRecord>>(&mut self, iter: I) {
        self.records.extend(iter);
    }
}

impl FromIterator<EmployeeRecord> for HierarchyBuilder {
    fn from_iter<I: IntoIterator<Item = EmployeeRecord>>(iter: I) -> Self {
        Self::from_records(iter)
    }
}

fn index_records(
    records: Vec<EmployeeRecord>,
) -> AuditResult<(Vec<Employee>, HashMap<EmployeeId, EmployeeIndex>)> {
    let mut employees = Vec::with_capacity(records.len());
    let mut index = HashMap::with_capacity(records.len());

    for record in records {
        match index.entry(record.id.clone()) {
            Entry::Occupied(_) => return Err(AuditError::DuplicateEmployeeId(record.id)),
            Entry::Vacant(slot) => {
                slot.insert(employees.len());
            }
        }
        employees.push(Employee::from(record));
    }

    Ok((employees, index))
}

fn link_managers(
    employees: &mut [Employee],
    index: &HashMap<EmployeeId, EmployeeIndex>,
) -> AuditResult<()> {
    for position in 0..employees.len() {
        let Some(manager_id) = employees[position].manager_id.as_ref() else {
            continue;
        };
        let manager = index
            .get(manager_id)
            .copied()
            .ok_or_else(|| AuditError::UnknownManager {
                manager_id: manager_id.clone(),
                employee_id: employees[position].id.clone(),
            })?;

        employees[position].manager = Some(manager);
        employees[manager].direct_reports.push(position);
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    Pending,
    OnPath,
    Done,
}

/// Walks every reporting line upwards once. Reaching an employee that is
/// already on the current walk means the line loops.
fn check_acyclic(employees: &[Employee]) -> AuditResult<()> {
    let mut state = vec![Visit::Pending; employees.len()];
    let mut path = Vec::new();

    for start in 0..employees.len() {
        let mut current = Some(start);
        while let Some(position) = current {
            match state[position] {
                Visit::Done => break,
                Visit::OnPath => {
                    return Err(AuditError::CyclicReportingLine {
                        employee_id: employees[position].id.clone(),
                    })
                }
                Visit::Pending => {
                    state[position] = Visit::OnPath;
                    path.push(position);
                    current = employees[position].manager;
                }
            }
        }
        for position in path.drain(..) {
            state[position] = Visit::Done;
        }
    }
    Ok(())
}
