use crate::domain::model::{SalaryKind, UserAnalysis};
use std::fmt;

/// Shortest round-trip form that always reads as a float: `60000.0`,
/// `37.75`, `1e+16`, `1e-05`. Exponent form is used below 1e-4 and from
/// 1e16 up.
pub fn format_float(value: f64) -> String {
    let scientific = format!("{:e}", value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if (-4..16).contains(&exponent) {
        let fixed = value.to_string();
        if fixed.contains('.') {
            fixed
        } else {
            format!("{}.0", fixed)
        }
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    }
}

/// Min and max keep the column's own type; the median is always a float.
fn format_salary(value: f64, kind: SalaryKind) -> String {
    match kind {
        SalaryKind::Integer => value.to_string(),
        SalaryKind::Float => format_float(value),
    }
}

/// Markdown rendering of a [`UserAnalysis`].
///
/// The output only depends on the analysis, so rendering the same data twice
/// yields identical bytes.
pub struct MarkdownReport<'a> {
    analysis: &'a UserAnalysis,
    top_occupations: usize,
}

impl<'a> MarkdownReport<'a> {
    pub fn new(analysis: &'a UserAnalysis, top_occupations: usize) -> Self {
        Self {
            analysis,
            top_occupations,
        }
    }
}

impl fmt::Display for MarkdownReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let salary = &self.analysis.salary;

        f.write_str("# User Data Analysis Report\n\n")?;

        f.write_str("## Salary Analysis\n\n")?;
        let kind = self.analysis.salary_kind;
        write!(f, "**Minimum Salary:** {}\n\n", format_salary(salary.min, kind))?;
        write!(f, "**Maximum Salary:** {}\n\n", format_salary(salary.max, kind))?;
        write!(f, "**Average Salary:** {:.2}\n\n", salary.mean)?;
        write!(f, "**Median Salary:** {}\n\n", format_float(salary.median))?;

        f.write_str("## Additional Insights\n\n")?;

        write!(
            f,
            "### Top {} Most Common Occupations\n\n",
            self.top_occupations
        )?;
        for (rank, entry) in self.analysis.top_occupations.entries().iter().enumerate() {
            writeln!(f, "{}. {}: {} user(s)", rank + 1, entry.label, entry.count)?;
        }
        f.write_str("\n")?;

        f.write_str("### Count of Users by Email Domain\n\n")?;
        for entry in self.analysis.email_domains.entries() {
            writeln!(f, "- {}: {} user(s)", entry.label, entry.count)?;
        }

        Ok(())
    }
}

pub fn render_markdown(analysis: &UserAnalysis, top_occupations: usize) -> String {
    MarkdownReport::new(analysis, top_occupations).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{RankedCount, Ranking, SalarySummary};

    fn entry(label: &str, count: usize) -> RankedCount {
        RankedCount {
            label: label.to_string(),
            count,
        }
    }

    fn sample_analysis() -> UserAnalysis {
        UserAnalysis {
            total_users: 3,
            salary: SalarySummary {
                min: 50000.0,
                max: 70000.0,
                mean: 60000.0,
                median: 60000.0,
            },
            top_occupations: Ranking::new(vec![entry("Engineer", 2), entry("Manager", 1)]),
            email_domains: Ranking::new(vec![entry("x.com", 2), entry("y.com", 1)]),
            missing_occupation: 0,
            missing_domain: 0,
            salary_kind: SalaryKind::Integer,
        }
    }

    #[test]
    fn test_render_full_report() {
        let expected = "# User Data Analysis Report\n\n\
## Salary Analysis\n\n\
**Minimum Salary:** 50000\n\n\
**Maximum Salary:** 70000\n\n\
**Average Salary:** 60000.00\n\n\
**Median Salary:** 60000.0\n\n\
## Additional Insights\n\n\
### Top 3 Most Common Occupations\n\n\
1. Engineer: 2 user(s)\n\
2. Manager: 1 user(s)\n\
\n\
### Count of Users by Email Domain\n\n\
- x.com: 2 user(s)\n\
- y.com: 1 user(s)\n";

        assert_eq!(render_markdown(&sample_analysis(), 3), expected);
    }

    #[test]
    fn test_fractional_values() {
        let mut analysis = sample_analysis();
        analysis.salary.median = 55000.5;
        analysis.salary.mean = 55123.456;

        let report = render_markdown(&analysis, 3);
        assert!(report.contains("**Median Salary:** 55000.5\n"));
        assert!(report.contains("**Average Salary:** 55123.46\n"));
    }

    #[test]
    fn test_float_column_keeps_decimal_point() {
        let mut analysis = sample_analysis();
        analysis.salary_kind = SalaryKind::Float;

        let report = render_markdown(&analysis, 3);
        assert!(report.contains("**Minimum Salary:** 50000.0\n"));
        assert!(report.contains("**Maximum Salary:** 70000.0\n"));
    }

    #[test]
    fn test_format_float() {
        assert_eq!(format_float(60000.0), "60000.0");
        assert_eq!(format_float(37.75), "37.75");
        assert_eq!(format_float(-0.5), "-0.5");
        assert_eq!(format_float(0.0), "0.0");
        assert_eq!(format_float(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_float(0.0001), "0.0001");
        assert_eq!(format_float(0.00001), "1e-05");
        assert_eq!(format_float(1234567890123456.0), "1234567890123456.0");
        assert_eq!(format_float(1e16), "1e+16");
        assert_eq!(format_float(1.5e300), "1.5e+300");
    }

    #[test]
    fn test_heading_follows_configured_top_n() {
        let report = render_markdown(&sample_analysis(), 5);
        assert!(report.contains("### Top 5 Most Common Occupations\n"));
    }
}
