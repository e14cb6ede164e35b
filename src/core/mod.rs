pub mod etl;
pub mod loader;
pub mod pipeline;
pub mod report;

pub use crate::domain::model::{TransformResult, UserAnalysis, UserRecord, UserTable};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
