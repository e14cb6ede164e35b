//! Pure aggregations over a [`UserTable`]. Nothing here touches the filesystem.

use crate::domain::model::{
    DomainCounts, OccupationRanking, RankedCount, Ranking, SalarySummary, UserTable,
};
use std::collections::HashMap;

impl SalarySummary {
    /// Returns `None` for an empty slice.
    pub fn from_salaries(salaries: &[f64]) -> Option<Self> {
        if salaries.is_empty() {
            return None;
        }

        let mut sorted = salaries.to_vec();
        sorted.sort_by(f64::total_cmp);

        let n = sorted.len();
        let mid = n / 2;
        let median = if n % 2 == 0 {
            midpoint(sorted[mid - 1], sorted[mid])
        } else {
            sorted[mid]
        };

        // 總和溢位時改為先除再加
        let total: f64 = sorted.iter().sum();
        let mean = if total.is_finite() {
            total / n as f64
        } else {
            sorted.iter().map(|s| s / n as f64).sum()
        };
        // 捨入誤差可能讓平均值略超出 [min, max]
        let mean = mean.clamp(sorted[0], sorted[n - 1]);

        Some(Self {
            min: sorted[0],
            max: sorted[n - 1],
            mean,
            median,
        })
    }
}

fn midpoint(a: f64, b: f64) -> f64 {
    let sum = a + b;
    if sum.is_finite() {
        sum / 2.0
    } else {
        a / 2.0 + b / 2.0
    }
}

/// Counts labels and orders them by descending count. The sort is stable, so
/// labels with equal counts stay in the order they were first seen.
pub fn count_by<'a, I>(labels: I) -> Ranking
where
    I: IntoIterator<Item = &'a str>,
{
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut entries: Vec<RankedCount> = Vec::new();

    for label in labels {
        match index.get(label).copied() {
            Some(i) => entries[i].count += 1,
            None => {
                index.insert(label, entries.len());
                entries.push(RankedCount {
                    label: label.to_string(),
                    count: 1,
                });
            }
        }
    }

    entries.sort_by(|a, b| b.count.cmp(&a.count));
    Ranking::new(entries)
}

/// Returns the top `n` occupations and the number of rows without one.
pub fn rank_occupations(table: &UserTable, n: usize) -> (OccupationRanking, usize) {
    let occupations: Vec<&str> = table
        .records()
        .iter()
        .filter_map(|r| r.occupation.as_deref())
        .collect();
    let skipped = table.len() - occupations.len();

    let mut ranking = count_by(occupations);
    ranking.truncate(n);
    (ranking, skipped)
}

/// Returns every email domain with its count and the number of rows without a domain.
pub fn count_email_domains(table: &UserTable) -> (DomainCounts, usize) {
    let domains: Vec<&str> = table
        .records()
        .iter()
        .filter_map(|r| r.email_domain())
        .collect();
    let skipped = table.len() - domains.len();

    (count_by(domains), skipped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::UserRecord;

    fn sample_table() -> UserTable {
        UserTable::new(vec![
            UserRecord::new(50000.0, "Engineer", "a@x.com"),
            UserRecord::new(60000.0, "Engineer", "b@y.com"),
            UserRecord::new(70000.0, "Manager", "c@x.com"),
        ])
    }

    #[test]
    fn test_salary_summary_odd_length() {
        let summary = SalarySummary::from_salaries(&sample_table().salaries()).unwrap();
        assert_eq!(summary.min, 50000.0);
        assert_eq!(summary.max, 70000.0);
        assert_eq!(summary.mean, 60000.0);
        assert_eq!(summary.median, 60000.0);
    }

    #[test]
    fn test_salary_summary_even_length_median() {
        let summary = SalarySummary::from_salaries(&[40.0, 10.0, 30.0, 20.0]).unwrap();
        assert_eq!(summary.median, 25.0);
        assert_eq!(summary.mean, 25.0);
        assert_eq!(summary.min, 10.0);
        assert_eq!(summary.max, 40.0);
    }

    #[test]
    fn test_salary_summary_single_value() {
        let summary = SalarySummary::from_salaries(&[0.1]).unwrap();
        assert_eq!(summary.min, 0.1);
        assert_eq!(summary.mean, 0.1);
        assert_eq!(summary.median, 0.1);
    }

    #[test]
    fn test_salary_summary_empty() {
        assert!(SalarySummary::from_salaries(&[]).is_none());
    }

    #[test]
    fn test_salary_summary_bounds() {
        let salaries = [0.1, 0.7, 0.2, 123456.78, 3.3, 99.0, 0.1];
        let s = SalarySummary::from_salaries(&salaries).unwrap();
        assert!(s.min <= s.median && s.median <= s.max);
        assert!(s.min <= s.mean && s.mean <= s.max);
    }

    #[test]
    fn test_salary_summary_near_f64_max() {
        let s = SalarySummary::from_salaries(&[1.7e308, 1.7e308, 0.0]).unwrap();
        let expected = 1.7e308 / 3.0 * 2.0;
        assert!(s.mean.is_finite());
        assert!(((s.mean - expected) / expected).abs() < 1e-12);
        assert!(s.mean < s.max);

        let s = SalarySummary::from_salaries(&[1.7e308, 1.5e308]).unwrap();
        assert!(((s.median - 1.6e308) / 1.6e308).abs() < 1e-12);
        assert_eq!(s.mean, s.median);
    }

    #[test]
    fn test_rank_occupations() {
        let (ranking, skipped) = rank_occupations(&sample_table(), 3);
        assert_eq!(skipped, 0);
        assert_eq!(
            ranking.entries(),
            &[
                RankedCount { label: "Engineer".to_string(), count: 2 },
                RankedCount { label: "Manager".to_string(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_rank_occupations_truncates_with_first_seen_ties() {
        let table: UserTable = ["Chef", "Pilot", "Nurse", "Baker", "Nurse"]
            .iter()
            .map(|o| UserRecord::new(1.0, o, "u@x.com"))
            .collect();

        let (ranking, _) = rank_occupations(&table, 3);
        let labels: Vec<&str> = ranking.entries().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["Nurse", "Chef", "Pilot"]);

        let (full, _) = rank_occupations(&table, usize::MAX);
        assert_eq!(full.total(), table.len());
    }

    #[test]
    fn test_rank_occupations_exact_match() {
        let table: UserTable = ["engineer", "Engineer", "Engineer "]
            .iter()
            .map(|o| UserRecord::new(1.0, o, "u@x.com"))
            .collect();
        let (ranking, _) = rank_occupations(&table, 3);
        assert_eq!(ranking.len(), 3);
    }

    #[test]
    fn test_count_email_domains() {
        let (domains, skipped) = count_email_domains(&sample_table());
        assert_eq!(skipped, 0);
        assert_eq!(domains.count_of("x.com"), Some(2));
        assert_eq!(domains.count_of("y.com"), Some(1));
        assert_eq!(domains.entries()[0].label, "x.com");
        assert_eq!(domains.total(), 3);
    }

    #[test]
    fn test_count_email_domains_skips_missing_at() {
        let table = UserTable::new(vec![
            UserRecord::new(1.0, "A", "a@x.com"),
            UserRecord::new(1.0, "A", "broken.example.com"),
            UserRecord::new(1.0, "A", "b@x.com"),
            UserRecord::new(1.0, "A", ""),
        ]);
        let (domains, skipped) = count_email_domains(&table);
        assert_eq!(skipped, 2);
        assert_eq!(domains.len(), 1);
        assert_eq!(domains.total() + skipped, table.len());
    }

    #[test]
    fn test_count_email_domains_is_not_truncated() {
        let table: UserTable = (0..10)
            .map(|i| UserRecord::new(1.0, "A", &format!("u{i}@d{i}.com")))
            .collect();
        let (domains, _) = count_email_domains(&table);
        assert_eq!(domains.len(), 10);
        assert_eq!(domains.entries()[0].label, "d0.com");
    }
}
