/// One row of the input table.
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    pub salary: f64,
    pub occupation: Option<String>,
    pub email: Option<String>,
}

impl UserRecord {
    pub fn new(salary: f64, occupation: &str, email: &str) -> Self {
        let non_blank = |s: &str| (!s.trim().is_empty()).then(|| s.to_string());
        Self {
            salary,
            occupation: non_blank(occupation),
            email: non_blank(email),
        }
    }

    /// Everything after the first `@`. Later `@` characters are kept as-is.
    pub fn email_domain(&self) -> Option<&str> {
        self.email
            .as_deref()
            .and_then(|email| email.split_once('@'))
            .map(|(_, domain)| domain)
    }
}

/// How the salary column was written in the input file. An all-integer
/// column reports min and max without a fractional part.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SalaryKind {
    Integer,
    #[default]
    Float,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserTable {
    records: Vec<UserRecord>,
    salary_kind: SalaryKind,
}

impl UserTable {
    pub fn new(records: Vec<UserRecord>) -> Self {
        Self::with_salary_kind(records, SalaryKind::Float)
    }

    pub fn with_salary_kind(records: Vec<UserRecord>, salary_kind: SalaryKind) -> Self {
        Self {
            records,
            salary_kind,
        }
    }

    pub fn salary_kind(&self) -> SalaryKind {
        self.salary_kind
    }

    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn salaries(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.salary).collect()
    }
}

impl FromIterator<UserRecord> for UserTable {
    fn from_iter<I: IntoIterator<Item = UserRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalarySummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedCount {
    pub label: String,
    pub count: usize,
}

/// Labels ordered by descending count; equal counts keep first-appearance order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ranking {
    entries: Vec<RankedCount>,
}

impl Ranking {
    pub fn new(entries: Vec<RankedCount>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[RankedCount] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    pub fn count_of(&self, label: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.count)
    }

    pub fn truncate(&mut self, n: usize) {
        self.entries.truncate(n);
    }
}

pub type OccupationRanking = Ranking;
pub type DomainCounts = Ranking;

#[derive(Debug, Clone, PartialEq)]
pub struct UserAnalysis {
    pub total_users: usize,
    pub salary: SalarySummary,
    pub top_occupations: OccupationRanking,
    pub email_domains: DomainCounts,
    pub missing_occupation: usize,
    pub missing_domain: usize,
    pub salary_kind: SalaryKind,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub analysis: UserAnalysis,
    pub markdown: String,
}
