//! CSV parser for employee records, built on nom.
//!
//! Comma-separated, no quoting, one employee per line after a mandatory
//! header line.

use std::path::Path;

use nom::{
    bytes::complete::take_while,
    character::complete::char,
    combinator::all_consuming,
    multi::separated_list1,
    number::complete::double,
    IResult,
};

use crate::error::{RecordError, RecordResult};
use crate::record::EmployeeRecord;

/// Number of columns every data line must provide.
pub const EXPECTED_COLUMNS: usize = 5;

const ID_INDEX: usize = 0;
const FIRST_NAME_INDEX: usize = 1;
const LAST_NAME_INDEX: usize = 2;
const SALARY_INDEX: usize = 3;
const MANAGER_ID_INDEX: usize = 4;

/// Parses a whole CSV document into records, in input order.
///
/// The first line is a header and is always skipped; lines that are empty
/// after trimming are ignored. Parsing stops at the first invalid line.
///
/// # Example
///
/// ```rust
/// use orgaudit_records::{parse_records, RecordError};
///
/// let err = parse_records("Id,firstName,lastName,salary,managerId\n123,Joe,Doe,-1,\n")
///     .unwrap_err();
/// assert!(matches!(err, RecordError::NegativeSalary { line: 2 }));
/// ```
pub fn parse_records(input: &str) -> RecordResult<Vec<EmployeeRecord>> {
    input
        .lines()
        .enumerate()
        .skip(1)
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| parse_line(line, idx + 1))
        .collect()
}

/// Reads and parses a CSV file.
pub fn read_records(path: impl AsRef<Path>) -> RecordResult<Vec<EmployeeRecord>> {
    let path = path.as_ref();
    let content =
        std::fs::read_to_string(path).map_err(|e| RecordError::io_error(path, e))?;
    parse_records(&content)
}

/// Parses a single data line.
///
/// `line_number` is only used for error reporting. Columns beyond the
/// fifth are ignored.
pub fn parse_line(line: &str, line_number: usize) -> RecordResult<EmployeeRecord> {
    let values = split_fields(line);

    if values.len() < EXPECTED_COLUMNS {
        return Err(RecordError::ColumnCount {
            line: line_number,
            expected: EXPECTED_COLUMNS,
            found: values.len(),
        });
    }

    let id = values[ID_INDEX].trim();
    if id.is_empty() {
        return Err(RecordError::EmptyId { line: line_number });
    }

    let salary = parse_salary(values[SALARY_INDEX].trim(), line_number)?;

    Ok(EmployeeRecord::new(
        id,
        values[FIRST_NAME_INDEX].trim(),
        values[LAST_NAME_INDEX].trim(),
        salary,
        Some(values[MANAGER_ID_INDEX]),
    ))
}

fn parse_salary(text: &str, line_number: usize) -> RecordResult<f64> {
    let salary = match salary_value(text) {
        Ok((_, value)) if value.is_finite() => value,
        _ => {
            return Err(RecordError::InvalidSalary {
                line: line_number,
                value: text.to_string(),
            })
        }
    };

    if salary < 0.0 {
        return Err(RecordError::NegativeSalary { line: line_number });
    }
    Ok(salary)
}

/// Splits on commas, keeping empty fields (including trailing ones).
fn split_fields(line: &str) -> Vec<&str> {
    match fields(line) {
        Ok((_, values)) => values,
        // `fields` accepts any input; keep the whole line as one column otherwise.
        Err(_) => vec![line],
    }
}

fn fields(input: &str) -> IResult<&str, Vec<&str>> {
    all_consuming(separated_list1(char(','), take_while(|c| c != ',')))(input)
}

fn salary_value(input: &str) -> IResult<&str, f64> {
    all_consuming(double)(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Id,firstName,lastName,salary,managerId";

    fn doc(lines: &[&str]) -> String {
        let mut out = String::from(HEADER);
        for line in lines {
            out.push('\n');
            out.push_str(line);
        }
        out
    }

    #[test]
    fn test_parse_valid_document() {
        let records = parse_records(&doc(&[
            "123,Joe,Doe,60000,",
            "124,Martin,Chekov,45000,123",
            "125,Bob,Ronstad,47000,123",
        ]))
        .unwrap();

        assert_eq!(records.len(), 3);
        let ceo = &records[0];
        assert_eq!(ceo.id, "123");
        assert_eq!(ceo.first_name, "Joe");
        assert_eq!(ceo.last_name, "Doe");
        assert_eq!(ceo.salary, 60000.0);
        assert!(ceo.is_root());
        assert_eq!(records[2].manager_id.as_deref(), Some("123"));
    }

    #[test]
    fn test_header_only() {
        assert!(parse_records(HEADER).unwrap().is_empty());
        assert!(parse_records("").unwrap().is_empty());
    }

    #[test]
    fn test_header_always_skipped() {
        // Even a well-formed data line in first position is the header.
        let records = parse_records("1,A,B,10,\n2,C,D,20,1").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "2");
    }

    #[test]
    fn test_skip_blank_lines() {
        let records = parse_records(&doc(&[
            "123,Joe,Doe,60000,",
            "",
            "   ",
            "124,Martin,Chekov,45000,123",
        ]))
        .unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_crlf_line_endings() {
        let records =
            parse_records("Id,firstName,lastName,salary,managerId\r\n1,A,B,10,\r\n2,C,D,5,1\r\n")
                .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].manager_id.as_deref(), Some("1"));
    }

    #[test]
    fn test_fields_trimmed() {
        let record = parse_line(" 7 , Ann ,  Lee , 1500.5 , 3 ", 2).unwrap();
        assert_eq!(record.id, "7");
        assert_eq!(record.first_name, "Ann");
        assert_eq!(record.last_name, "Lee");
        assert_eq!(record.salary, 1500.5);
        assert_eq!(record.manager_id.as_deref(), Some("3"));
    }

    #[test]
    fn test_extra_columns_ignored() {
        let record = parse_line("7,Ann,Lee,100,3,extra,more", 2).unwrap();
        assert_eq!(record.manager_id.as_deref(), Some("3"));
    }

    #[test]
    fn test_insufficient_columns() {
        let err = parse_line("123,Joe,Doe,60000", 2).unwrap_err();
        assert!(matches!(
            err,
            RecordError::ColumnCount {
                line: 2,
                expected: 5,
                found: 4
            }
        ));
    }

    #[test]
    fn test_empty_id() {
        let err = parse_records(&doc(&[",Joe,Doe,60000,"])).unwrap_err();
        assert!(matches!(err, RecordError::EmptyId { line: 2 }));
    }

    #[test]
    fn test_invalid_salary() {
        let err = parse_records(&doc(&["123,Joe,Doe,invalid,"])).unwrap_err();
        match err {
            RecordError::InvalidSalary { line, value } => {
                assert_eq!(line, 2);
                assert_eq!(value, "invalid");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_salary_with_trailing_garbage() {
        assert!(matches!(
            parse_line("1,A,B,100abc,", 2),
            Err(RecordError::InvalidSalary { .. })
        ));
        assert!(matches!(
            parse_line("1,A,B,,", 2),
            Err(RecordError::InvalidSalary { .. })
        ));
    }

    #[test]
    fn test_non_finite_salary_rejected() {
        assert!(matches!(
            parse_line("1,A,B,NaN,", 2),
            Err(RecordError::InvalidSalary { .. })
        ));
        assert!(matches!(
            parse_line("1,A,B,inf,", 2),
            Err(RecordError::InvalidSalary { .. })
        ));
    }

    #[test]
    fn test_negative_salary() {
        let err = parse_records(&doc(&["123,Joe,Doe,-1000,"])).unwrap_err();
        assert!(matches!(err, RecordError::NegativeSalary { line: 2 }));
    }

    #[test]
    fn test_decimal_and_exponent_salaries() {
        assert_eq!(parse_line("1,A,B,1234.56,", 2).unwrap().salary, 1234.56);
        assert_eq!(parse_line("1,A,B,6e4,", 2).unwrap().salary, 60000.0);
        assert_eq!(parse_line("1,A,B,0,", 2).unwrap().salary, 0.0);
    }

    #[test]
    fn test_line_numbers_count_skipped_lines() {
        let err = parse_records(&doc(&["1,A,B,10,", "", "2,C,D,oops,1"])).unwrap_err();
        assert_eq!(err.line(), Some(4));
    }

    #[test]
    fn test_split_fields_keeps_empties() {
        assert_eq!(split_fields("a,,b,"), vec!["a", "", "b", ""]);
        assert_eq!(split_fields(""), vec![""]);
    }
}
