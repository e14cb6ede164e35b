pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, AnalysisConfig};
pub use core::{etl::AnalysisEngine, pipeline::UserAnalysisPipeline};
pub use utils::error::{AnalysisError, Result};
