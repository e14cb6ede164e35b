use crate::config::AnalysisConfig;
use crate::utils::error::{AnalysisError, Result};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

/// Optional configuration file. Every key may be omitted.
///
/// ```toml
/// [input]
/// path = "${DATA_DIR}/users.csv"
///
/// [output]
/// path = "reports/user_analysis.md"
///
/// [report]
/// top_occupations = 5
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub input: Option<InputConfig>,
    pub output: Option<OutputConfig>,
    pub report: Option<ReportConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    pub top_occupations: Option<usize>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| AnalysisError::ConfigError {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AnalysisError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DATA_DIR})，未定義的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AnalysisError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    /// Overwrites the fields of `config` that this file sets.
    pub fn apply_to(&self, config: &mut AnalysisConfig) {
        if let Some(path) = self.input.as_ref().and_then(|i| i.path.clone()) {
            config.input_path = path;
        }
        if let Some(path) = self.output.as_ref().and_then(|o| o.path.clone()) {
            config.output_path = path;
        }
        if let Some(n) = self.report.as_ref().and_then(|r| r.top_occupations) {
            config.top_occupations = n;
        }
    }
}
