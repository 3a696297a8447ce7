//! The raw employee record.

use crate::EmployeeId;

/// One validated line of employee input.
///
/// Records carry no relationships; `manager_id` is only a reference by id
/// and is resolved later when the hierarchy is built.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EmployeeRecord {
    /// Unique employee identifier.
    pub id: EmployeeId,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Salary (finite, non-negative).
    pub salary: f64,
    /// Id of the direct manager (None = top of the hierarchy).
    pub manager_id: Option<EmployeeId>,
}

impl EmployeeRecord {
    /// Creates a record.
    ///
    /// A blank `manager_id` is normalized to `None`, so callers may pass the
    /// raw column text.
    pub fn new(
        id: impl Into<EmployeeId>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        salary: f64,
        manager_id: Option<&str>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            salary,
            manager_id: manager_id
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .map(str::to_string),
        }
    }

    /// Returns true if the record names no manager.
    pub fn is_root(&self) -> bool {
        self.manager_id.is_none()
    }

    /// Returns "first last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl std::fmt::Display for EmployeeRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} (ID: {})", self.first_name, self.last_name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_manager_is_root() {
        assert!(EmployeeRecord::new("1", "Joe", "Doe", 1.0, None).is_root());
        assert!(EmployeeRecord::new("1", "Joe", "Doe", 1.0, Some("")).is_root());
        assert!(EmployeeRecord::new("1", "Joe", "Doe", 1.0, Some("   ")).is_root());
    }

    #[test]
    fn test_manager_id_trimmed() {
        let record = EmployeeRecord::new("2", "Ann", "Lee", 1.0, Some(" 1 "));
        assert_eq!(record.manager_id.as_deref(), Some("1"));
        assert!(!record.is_root());
    }

    #[test]
    fn test_display_and_full_name() {
        let record = EmployeeRecord::new("123", "Joe", "Doe", 60000.0, None);
        assert_eq!(record.full_name(), "Joe Doe");
        assert_eq!(record.to_string(), "Joe Doe (ID: 123)");
    }
}
