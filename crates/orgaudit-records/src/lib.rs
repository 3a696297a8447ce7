//! # orgaudit-records
//!
//! Raw employee records and the CSV reader that produces them.
//!
//! This crate knows nothing about hierarchies: it turns text into a flat,
//! validated list of [`EmployeeRecord`]s in input order. Wiring records into
//! a reporting structure is the job of `orgaudit-core`.
//!
//! ## Input Format
//!
//! | Column | Field | Notes |
//! |--------|-------|-------|
//! | 1 | `Id` | Non-empty |
//! | 2 | `firstName` | |
//! | 3 | `lastName` | |
//! | 4 | `salary` | Finite, non-negative number |
//! | 5 | `managerId` | Empty for the top of the hierarchy |
//!
//! The first line is always treated as a header. Blank lines are skipped and
//! every field is trimmed.
//!
//! ## Usage
//!
//! ```rust
//! use orgaudit_records::parse_records;
//!
//! let csv = "Id,firstName,lastName,salary,managerId\n\
//!            123,Joe,Doe,60000,\n\
//!            124,Martin,Chekov,45000,123\n";
//!
//! let records = parse_records(csv).unwrap();
//! assert_eq!(records.len(), 2);
//! assert!(records[0].is_root());
//! assert_eq!(records[1].manager_id.as_deref(), Some("123"));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod parser;
mod record;

pub use error::{RecordError, RecordResult};
pub use parser::{parse_line, parse_records, read_records, EXPECTED_COLUMNS};
pub use record::EmployeeRecord;

/// Employee identifier as it appears in the input (opaque token).
pub type EmployeeId = String;
