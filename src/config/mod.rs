pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_distinct_paths, validate_path, validate_positive_number, Validate,
};

pub const DEFAULT_INPUT_PATH: &str = "data/user_data4.csv";
pub const DEFAULT_OUTPUT_PATH: &str = "user_analysis.md";
pub const DEFAULT_TOP_OCCUPATIONS: usize = 3;

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    pub input_path: String,
    pub output_path: String,
    pub top_occupations: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            input_path: DEFAULT_INPUT_PATH.to_string(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            top_occupations: DEFAULT_TOP_OCCUPATIONS,
        }
    }
}

impl ConfigProvider for AnalysisConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn top_occupations(&self) -> usize {
        self.top_occupations
    }
}

impl Validate for AnalysisConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input_path)?;
        validate_path("output", &self.output_path)?;
        validate_distinct_paths(&self.input_path, &self.output_path)?;
        validate_positive_number("top_occupations", self.top_occupations, 1)?;
        Ok(())
    }
}

#[cfg(feature = "cli")]
pub use self::cli_args::CliConfig;

#[cfg(feature = "cli")]
mod cli_args {
    use super::toml_config::TomlConfig;
    use super::AnalysisConfig;
    use crate::utils::error::Result;
    use crate::utils::validation::Validate;
    use clap::Parser;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "user-analysis")]
    #[command(about = "Summarize a CSV of user records into a Markdown report")]
    pub struct CliConfig {
        /// Input CSV file [default: data/user_data4.csv]
        #[arg(long)]
        pub input: Option<String>,

        /// Markdown report to write [default: user_analysis.md]
        #[arg(long)]
        pub output: Option<String>,

        /// Directory that relative input and output paths are resolved against
        #[arg(long, default_value = ".")]
        pub base_dir: String,

        /// Number of occupations listed in the report [default: 3]
        #[arg(long)]
        pub top_occupations: Option<usize>,

        /// TOML configuration file
        #[arg(long)]
        pub config: Option<String>,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Log CPU and memory usage per phase")]
        pub monitor: bool,
    }

    impl CliConfig {
        /// Flags win over the config file, which wins over the defaults.
        pub fn resolve(&self) -> Result<AnalysisConfig> {
            let mut config = AnalysisConfig::default();

            if let Some(path) = &self.config {
                tracing::debug!("Loading configuration from: {}", path);
                TomlConfig::from_file(path)?.apply_to(&mut config);
            }

            if let Some(input) = &self.input {
                config.input_path = input.clone();
            }
            if let Some(output) = &self.output {
                config.output_path = output.clone();
            }
            if let Some(n) = self.top_occupations {
                config.top_occupations = n;
            }

            config.validate()?;
            Ok(config)
        }
    }

}
