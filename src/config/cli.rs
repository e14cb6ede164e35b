use crate::core::Storage;
use crate::utils::error::{AnalysisError, Result};
use crate::utils::validation::normalize_lexically;
use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Filesystem storage rooted at `base_path`. Absolute paths bypass the root.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.base_path.join(Path::new(path))
    }

    /// Absolute, lexically normalized path with symlinks resolved as far as
    /// the filesystem allows. A file that does not exist yet is located
    /// through its canonical parent directory.
    fn locate(&self, path: &str) -> PathBuf {
        let resolved = self.resolve(path);
        let absolute = if resolved.is_absolute() {
            resolved
        } else {
            match std::env::current_dir() {
                Ok(cwd) => cwd.join(&resolved),
                Err(_) => resolved,
            }
        };
        let normalized = normalize_lexically(&absolute);

        if let Ok(canonical) = fs::canonicalize(&normalized) {
            return canonical;
        }
        match (normalized.parent(), normalized.file_name()) {
            (Some(parent), Some(name)) => fs::canonicalize(parent)
                .map(|dir| dir.join(name))
                .unwrap_or(normalized),
            _ => normalized,
        }
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.resolve(path);
        tracing::debug!("Reading {}", full_path.display());

        fs::read(&full_path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => AnalysisError::InputNotFound {
                path: path.to_string(),
            },
            _ => AnalysisError::ReadError {
                path: path.to_string(),
                source: e,
            },
        })
    }

    fn same_location(&self, a: &str, b: &str) -> bool {
        self.locate(a) == self.locate(b)
    }

    /// Creates or truncates the file. Missing parent directories are an error.
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);
        let write_error = |source: std::io::Error| AnalysisError::WriteError {
            path: path.to_string(),
            source,
        };

        let file = File::create(&full_path).map_err(write_error)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(data).map_err(write_error)?;
        writer.flush().map_err(write_error)?;
        Ok(())
    }
}
