use crate::error::{MarkError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Walks from `start` towards the filesystem root and returns the first
/// directory that contains a `marker` subdirectory.
///
/// The walk visits each ancestor once and never changes the process working
/// directory.
pub fn find_repo_root(start: &Path, marker: &str) -> Result<PathBuf> {
    let start = start.canonicalize().map_err(MarkError::WorkingDirectory)?;

    for dir in start.ancestors() {
        trace!(dir = %dir.display(), "checking for {marker}");
        if dir.join(marker).is_dir() {
            debug!(root = %dir.display(), "found repository root");
            return Ok(dir.to_path_buf());
        }
    }

    Err(MarkError::RepositoryNotFound {
        start,
        marker: marker.to_string(),
    })
}
