use crate::utils::error::{AnalysisError, Result};
use std::path::{Component, Path, PathBuf};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(AnalysisError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(AnalysisError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(AnalysisError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

/// Removes `.` components and folds `..` into the preceding component
/// without touching the filesystem.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// The report must never overwrite the data it was computed from.
pub fn validate_distinct_paths(input: &str, output: &str) -> Result<()> {
    if normalize_lexically(Path::new(input)) == normalize_lexically(Path::new(output)) {
        return Err(same_path_error(output));
    }
    Ok(())
}

pub fn same_path_error(output: &str) -> AnalysisError {
    AnalysisError::InvalidConfigValueError {
        field: "output".to_string(),
        value: output.to_string(),
        reason: "Output path must differ from the input path".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("input", "data/user_data4.csv").is_ok());
        assert!(validate_path("input", "").is_err());
        assert!(validate_path("input", "   ").is_err());
        assert!(validate_path("input", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("top_occupations", 3, 1).is_ok());
        assert!(validate_positive_number("top_occupations", 0, 1).is_err());
    }

    #[test]
    fn test_validate_distinct_paths() {
        assert!(validate_distinct_paths("data/users.csv", "user_analysis.md").is_ok());
        assert!(validate_distinct_paths("data/users.csv", "data//users.csv").is_err());
        assert!(validate_distinct_paths("./data/users.csv", "data/users.csv").is_err());
        assert!(validate_distinct_paths("reports/../data/users.csv", "data/users.csv").is_err());
        assert!(validate_distinct_paths("../data/users.csv", "data/users.csv").is_ok());
    }

    #[test]
    fn test_normalize_lexically() {
        assert_eq!(
            normalize_lexically(Path::new("./a/./b/../c.csv")),
            PathBuf::from("a/c.csv")
        );
        assert_eq!(normalize_lexically(Path::new("../x.csv")), PathBuf::from("../x.csv"));
        assert_eq!(normalize_lexically(Path::new("/../x.csv")), PathBuf::from("/x.csv"));
    }
}
