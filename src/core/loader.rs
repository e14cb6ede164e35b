use crate::domain::model::{SalaryKind, UserRecord, UserTable};
use crate::utils::error::{AnalysisError, Result};
use std::io::Read;

pub const SALARY_COLUMN: &str = "salary";
pub const OCCUPATION_COLUMN: &str = "occupation";
pub const EMAIL_COLUMN: &str = "email";

struct ColumnIndex {
    salary: usize,
    occupation: usize,
    email: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &csv::StringRecord, path: &str) -> Result<Self> {
        let find = |column: &str| {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or_else(|| AnalysisError::MissingColumn {
                    path: path.to_string(),
                    column: column.to_string(),
                })
        };

        Ok(Self {
            salary: find(SALARY_COLUMN)?,
            occupation: find(OCCUPATION_COLUMN)?,
            email: find(EMAIL_COLUMN)?,
        })
    }
}

/// Parses CSV text with a header row into a [`UserTable`].
///
/// `path` is only used in error messages. Any salary that is not a finite
/// number rejects the whole input.
pub fn parse_user_table<R: Read>(reader: R, path: &str) -> Result<UserTable> {
    let parse_error = |source: csv::Error| AnalysisError::ParseError {
        path: path.to_string(),
        source,
    };

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = rdr.headers().map_err(parse_error)?.clone();
    if headers.is_empty() {
        return Err(AnalysisError::EmptyInput {
            path: path.to_string(),
        });
    }
    let columns = ColumnIndex::from_headers(&headers, path)?;

    let mut records = Vec::new();
    let mut all_integer = true;
    for result in rdr.records() {
        let row = result.map_err(parse_error)?;
        let line = row.position().map_or(0, |p| p.line());
        let cell = |i: usize| row.get(i).unwrap_or("");

        let raw_salary = cell(columns.salary);
        let salary = parse_salary(raw_salary).map_err(|reason| AnalysisError::InvalidRecord {
            path: path.to_string(),
            line,
            field: SALARY_COLUMN.to_string(),
            value: raw_salary.to_string(),
            reason: reason.to_string(),
        })?;
        all_integer &= raw_salary.trim().parse::<i64>().is_ok();

        records.push(UserRecord::new(
            salary,
            cell(columns.occupation),
            cell(columns.email),
        ));
    }

    if records.is_empty() {
        return Err(AnalysisError::EmptyInput {
            path: path.to_string(),
        });
    }

    tracing::debug!("Parsed {} user records from {}", records.len(), path);
    let salary_kind = if all_integer {
        SalaryKind::Integer
    } else {
        SalaryKind::Float
    };
    Ok(UserTable::with_salary_kind(records, salary_kind))
}

fn parse_salary(raw: &str) -> std::result::Result<f64, &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("missing value");
    }

    let value: f64 = trimmed.parse().map_err(|_| "not a number")?;
    if !value.is_finite() {
        return Err("not a finite number");
    }
    Ok(value)
}
