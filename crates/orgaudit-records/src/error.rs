//! Error types for record parsing.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading employee records.
///
/// Line numbers are 1-based and count the header line.
#[derive(Error, Debug)]
pub enum RecordError {
    /// A line has fewer columns than the format requires.
    #[error("invalid CSV format at line {line}: expected {expected} columns, found {found}")]
    ColumnCount {
        /// Line number in the input.
        line: usize,
        /// Number of columns required.
        expected: usize,
        /// Number of columns present.
        found: usize,
    },

    /// The id column is empty.
    #[error("employee ID cannot be empty at line {line}")]
    EmptyId {
        /// Line number in the input.
        line: usize,
    },

    /// The salary column is not a finite number.
    #[error("invalid salary format at line {line}: {value}")]
    InvalidSalary {
        /// Line number in the input.
        line: usize,
        /// The offending text.
        value: String,
    },

    /// The salary column is negative.
    #[error("salary cannot be negative at line {line}")]
    NegativeSalary {
        /// Line number in the input.
        line: usize,
    },

    /// The input file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path of the file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl RecordError {
    /// Creates an I/O error with path context.
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns the offending line number, if the error refers to one.
    pub fn line(&self) -> Option<usize> {
        match self {
            RecordError::ColumnCount { line, .. }
            | RecordError::EmptyId { line }
            | RecordError::InvalidSalary { line, .. }
            | RecordError::NegativeSalary { line } => Some(*line),
            RecordError::Io { .. } => None,
        }
    }
}

/// Result type for record operations.
pub type RecordResult<T> = std::result::Result<T, RecordError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_column_count() {
        let err = RecordError::ColumnCount {
            line: 3,
            expected: 5,
            found: 4,
        };
        assert_eq!(
            err.to_string(),
            "invalid CSV format at line 3: expected 5 columns, found 4"
        );
    }

    #[test]
    fn test_error_display_invalid_salary() {
        let err = RecordError::InvalidSalary {
            line: 2,
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "invalid salary format at line 2: abc");
    }

    #[test]
    fn test_error_line() {
        assert_eq!(RecordError::EmptyId { line: 7 }.line(), Some(7));
        assert_eq!(RecordError::NegativeSalary { line: 2 }.line(), Some(2));

        let io = RecordError::io_error(
            "missing.csv",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        assert_eq!(io.line(), None);
        assert!(io.to_string().starts_with("failed to read missing.csv"));
    }
}
