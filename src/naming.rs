use crate::error::{MarkError, Result};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamingStrategy {
    Fixed(String),
    /// Base name of the directory the tool was started in.
    Derived,
}

impl NamingStrategy {
    pub fn target_name(&self, cwd: &Path) -> Result<String> {
        match self {
            NamingStrategy::Fixed(name) => Ok(name.clone()),
            NamingStrategy::Derived => cwd
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .ok_or_else(|| MarkError::NoDirectoryName {
                    path: cwd.to_path_buf(),
                }),
        }
    }
}
