//! Error types for hierarchy building and analysis.

use orgaudit_records::EmployeeId;
use thiserror::Error;

/// Errors that can occur while building or analyzing a hierarchy.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AuditError {
    /// An employee names a manager that is not in the record set.
    #[error("Manager with ID {manager_id} not found for employee {employee_id}")]
    UnknownManager {
        /// The unresolved manager id.
        manager_id: EmployeeId,
        /// The employee holding the reference.
        employee_id: EmployeeId,
    },

    /// Two records share the same id.
    #[error("Duplicate employee ID: {0}")]
    DuplicateEmployeeId(EmployeeId),

    /// Following manager references from this employee never reaches a root.
    #[error("Reporting line of employee {employee_id} loops back on itself")]
    CyclicReportingLine {
        /// Employee at which the first looping walk, started in input
        /// order, closes its loop.
        employee_id: EmployeeId,
    },

    /// The compliance policy is not usable.
    #[error("Invalid compliance policy: {0}")]
    InvalidPolicy(String),
}

impl AuditError {
    /// Returns true for errors caused by the shape of the input hierarchy.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            AuditError::UnknownManager { .. }
                | AuditError::DuplicateEmployeeId(_)
                | AuditError::CyclicReportingLine { .. }
        )
    }
}

/// Result type for orgaudit-core operations.
pub type AuditResult<T> = std::result::Result<T, AuditError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_unknown_manager() {
        let err = AuditError::UnknownManager {
            manager_id: "999".to_string(),
            employee_id: "123".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Manager with ID 999 not found for employee 123"
        );
    }

    #[test]
    fn test_error_display_duplicate() {
        let err = AuditError::DuplicateEmployeeId("42".to_string());
        assert_eq!(err.to_string(), "Duplicate employee ID: 42");
    }

    #[test]
    fn test_error_display_cycle() {
        let err = AuditError::CyclicReportingLine {
            employee_id: "7".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Reporting line of employee 7 loops back on itself"
        );
    }

    #[test]
    fn test_structural_classification() {
        assert!(AuditError::DuplicateEmployeeId("1".into()).is_structural());
        assert!(AuditError::CyclicReportingLine {
            employee_id: "1".into()
        }
        .is_structural());
        assert!(!AuditError::InvalidPolicy("min above max".into()).is_structural());
    }
}
