//! Report rendering for the console and for JSON consumers.
//!
//! Currency values are rounded to two decimals here and nowhere else.

use std::fmt;

use orgaudit_core::{ComplianceConfig, ComplianceReport, ReportingDepthFinding, SalaryFinding};
use serde::Serialize;

const BANNER_RULE: &str = "========================================";
const SECTION_RULE: &str = "------------------------------------------";

/// Console rendering of a [`ComplianceReport`].
pub struct TextReport<'r, 'a> {
    report: &'r ComplianceReport<'a>,
    max_depth: usize,
}

impl<'r, 'a> TextReport<'r, 'a> {
    /// Wraps a report for display under the policy it was computed with.
    pub fn new(report: &'r ComplianceReport<'a>, config: &ComplianceConfig) -> Self {
        Self {
            report,
            max_depth: config.max_reporting_depth,
        }
    }

    fn salary_section(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SALARY COMPLIANCE ANALYSIS")?;
        writeln!(f, "{SECTION_RULE}")?;

        if self.report.salary_findings.is_empty() {
            return writeln!(f, "✓ All managers' salaries are within acceptable range.");
        }

        let underpaid: Vec<&SalaryFinding<'_>> = self.report.underpaid().collect();
        if !underpaid.is_empty() {
            writeln!(f, "Managers earning LESS than they should:")?;
            writeln!(f)?;
            for finding in underpaid {
                writeln!(f, "  • {}", finding.manager.full_name())?;
                writeln!(f, "    Current salary: ${:.2}", finding.actual_salary)?;
                writeln!(f, "    Should earn at least: ${:.2}", finding.minimum_salary)?;
                writeln!(f, "    Underpaid by: ${:.2}", finding.deviation)?;
                writeln!(f)?;
            }
        }

        let overpaid: Vec<&SalaryFinding<'_>> = self.report.overpaid().collect();
        if !overpaid.is_empty() {
            writeln!(f, "Managers earning MORE than they should:")?;
            writeln!(f)?;
            for finding in overpaid {
                writeln!(f, "  • {}", finding.manager.full_name())?;
                writeln!(f, "    Current salary: ${:.2}", finding.actual_salary)?;
                writeln!(f, "    Should earn at most: ${:.2}", finding.maximum_salary)?;
                writeln!(f, "    Overpaid by: ${:.2}", finding.deviation)?;
                writeln!(f)?;
            }
        }
        Ok(())
    }

    fn reporting_section(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "REPORTING LINE ANALYSIS")?;
        writeln!(f, "{SECTION_RULE}")?;

        if self.report.depth_findings.is_empty() {
            return writeln!(
                f,
                "✓ All employees have acceptable reporting lines (≤ {} managers).",
                self.max_depth
            );
        }

        writeln!(f, "Employees with reporting lines that are TOO LONG:")?;
        writeln!(f)?;
        for finding in &self.report.depth_findings {
            writeln!(f, "  • {}", finding.employee.full_name())?;
            writeln!(f, "    Number of managers: {}", finding.depth)?;
            writeln!(f, "    Exceeds limit by: {} level(s)", finding.excess)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for TextReport<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{BANNER_RULE}")?;
        writeln!(f, "ORGANIZATIONAL STRUCTURE ANALYSIS REPORT")?;
        writeln!(f, "{BANNER_RULE}")?;
        writeln!(f)?;

        self.salary_section(f)?;
        writeln!(f)?;
        self.reporting_section(f)?;

        writeln!(f)?;
        writeln!(f, "{BANNER_RULE}")?;
        writeln!(f, "END OF REPORT")?;
        writeln!(f, "{BANNER_RULE}")
    }
}

/// Top-level JSON document.
#[derive(Serialize)]
struct JsonReport<'r, 'a> {
    employees: usize,
    managers: usize,
    policy: &'r ComplianceConfig,
    salary_findings: &'r [SalaryFinding<'a>],
    reporting_findings: &'r [ReportingDepthFinding<'a>],
}

/// Renders the report as pretty-printed JSON.
pub fn render_json(
    report: &ComplianceReport<'_>,
    config: &ComplianceConfig,
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        employees: report.stats.employees_examined,
        managers: report.stats.managers_examined,
        policy: config,
        salary_findings: &report.salary_findings,
        reporting_findings: &report.depth_findings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use orgaudit_core::{ComplianceAnalyzer, EmployeeRecord, OrgChart};

    fn render(records: Vec<EmployeeRecord>) -> String {
        let chart = OrgChart::build(records).unwrap();
        let config = ComplianceConfig::default();
        let report = ComplianceAnalyzer::new(&chart).analyze();
        TextReport::new(&report, &config).to_string()
    }

    fn chain(len: usize) -> Vec<EmployeeRecord> {
        (1..=len)
            .map(|i| {
                let manager = (i > 1).then(|| (i - 1).to_string());
                // Each manager earns 1.3x their single report.
                let salary = 1000.0 * 1.3f64.powi((len - i) as i32);
                EmployeeRecord::new(i.to_string(), format!("L{i}"), "Person", salary, manager.as_deref())
            })
            .collect()
    }

    #[test]
    fn test_clean_report() {
        let text = render(vec![
            EmployeeRecord::new("1", "Manager", "Person", 60000.0, None),
            EmployeeRecord::new("2", "Sub", "One", 45000.0, Some("1")),
            EmployeeRecord::new("3", "Sub", "Two", 47000.0, Some("1")),
        ]);

        assert!(text.starts_with(&format!(
            "{BANNER_RULE}\nORGANIZATIONAL STRUCTURE ANALYSIS REPORT\n{BANNER_RULE}\n\n"
        )));
        assert!(text.contains("✓ All managers' salaries are within acceptable range.\n"));
        assert!(text.contains("✓ All employees have acceptable reporting lines (≤ 4 managers).\n"));
        assert!(text.ends_with(&format!("{BANNER_RULE}\nEND OF REPORT\n{BANNER_RULE}\n")));
    }

    #[test]
    fn test_underpaid_section() {
        let text = render(vec![
            EmployeeRecord::new("123", "Joe", "Doe", 60000.0, None),
            EmployeeRecord::new("124", "Martin", "Chekov", 45000.0, Some("123")),
            EmployeeRecord::new("125", "Bob", "Ronstad", 47000.0, Some("123")),
            EmployeeRecord::new("300", "Alice", "Hasacat", 50000.0, Some("124")),
        ]);

        let expected = "Managers earning LESS than they should:\n\
                        \n  • Martin Chekov\
                        \n    Current salary: $45000.00\
                        \n    Should earn at least: $60000.00\
                        \n    Underpaid by: $15000.00\n";
        assert!(text.contains(expected), "{text}");
        assert!(!text.contains("Managers earning MORE"));
    }

    #[test]
    fn test_overpaid_section() {
        let text = render(vec![
            EmployeeRecord::new("1", "CEO", "Person", 100000.0, None),
            EmployeeRecord::new("2", "Sub", "Person", 40000.0, Some("1")),
        ]);

        assert!(text.contains("Managers earning MORE than they should:\n\n  • CEO Person\n"));
        assert!(text.contains("    Should earn at most: $60000.00\n"));
        assert!(text.contains("    Overpaid by: $40000.00\n"));
        assert!(!text.contains("Managers earning LESS"));
    }

    #[test]
    fn test_reporting_section() {
        let text = render(chain(6));

        assert!(text.contains("✓ All managers' salaries are within acceptable range."));
        assert!(text.contains(
            "Employees with reporting lines that are TOO LONG:\n\n  • L6 Person\n    Number of managers: 5\n    Exceeds limit by: 1 level(s)\n"
        ));
    }

    #[test]
    fn test_currency_rounding() {
        let text = render(vec![
            EmployeeRecord::new("1", "Boss", "Person", 1000.0, None),
            EmployeeRecord::new("2", "Sub", "Person", 1234.567, Some("1")),
        ]);
        // 1234.567 * 1.2 = 1481.4804
        assert!(text.contains("Should earn at least: $1481.48\n"));
        assert!(text.contains("Underpaid by: $481.48\n"));
    }

    #[test]
    fn test_json_shape() {
        let chart = OrgChart::build(vec![
            EmployeeRecord::new("1", "CEO", "Person", 100000.0, None),
            EmployeeRecord::new("2", "Sub", "Person", 40000.0, Some("1")),
        ])
        .unwrap();
        let config = ComplianceConfig::default();
        let report = ComplianceAnalyzer::new(&chart).analyze();

        let json: serde_json::Value =
            serde_json::from_str(&render_json(&report, &config).unwrap()).unwrap();
        assert_eq!(json["employees"], 2);
        assert_eq!(json["managers"], 1);
        assert_eq!(json["policy"]["max_reporting_depth"], 4);
        assert_eq!(json["salary_findings"][0]["manager"]["first_name"], "CEO");
        assert_eq!(json["salary_findings"][0]["classification"], "overpaid");
        assert_eq!(json["salary_findings"][0]["deviation"], 40000.0);
        assert_eq!(json["reporting_findings"].as_array().map(Vec::len), Some(0));
    }
}
