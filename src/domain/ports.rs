use crate::domain::model::{TransformResult, UserTable};
use crate::utils::error::Result;
use crate::utils::validation::normalize_lexically;
use std::path::Path;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;

    /// Whether both paths name the same file in this storage.
    fn same_location(&self, a: &str, b: &str) -> bool {
        normalize_lexically(Path::new(a)) == normalize_lexically(Path::new(b))
    }
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn top_occupations(&self) -> usize;
}

pub trait Pipeline {
    fn extract(&self) -> Result<UserTable>;
    fn transform(&self, table: UserTable) -> Result<TransformResult>;
    fn load(&self, result: TransformResult) -> Result<String>;
}
