//! Finding and reading the screenshot to publish.
//!
//! "Latest" means last in lexicographic path order, not newest by modification
//! time. Screenshot tools name files with sortable timestamps, so the two agree
//! in practice; directories holding other names may pick a different file.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

use crate::error::{Error, Result};
use crate::key::extension_of;

/// A screenshot read fully into memory.
#[derive(Debug, Clone)]
pub struct Screenshot {
    pub path: PathBuf,
    pub content: Vec<u8>,
    /// Final extension including the leading dot, or empty.
    pub extension: String,
}

/// Returns the entry of `dir` that sorts last by path.
///
/// Every entry counts, including subdirectories and dotfiles. An unreadable
/// directory is reported as [`Error::NotFound`], the same as an empty one.
pub fn latest_screenshot(dir: &Path) -> Result<PathBuf> {
    debug!(dir = %dir.display(), "Listing screenshot directory");

    let mut entries: Vec<PathBuf> = match fs::read_dir(dir) {
        Ok(read_dir) => read_dir
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .collect(),
        Err(e) => {
            error!(dir = %dir.display(), error = ?e, "Failed to list screenshot directory");
            Vec::new()
        }
    };

    entries.sort();
    match entries.pop() {
        Some(latest) => {
            info!(path = %latest.display(), "Selected latest screenshot");
            Ok(latest)
        }
        None => {
            error!(dir = %dir.display(), "No files in screenshot directory");
            Err(Error::NotFound {
                dir: dir.to_path_buf(),
            })
        }
    }
}

/// Reads the whole file at `path`. Screenshots are small, so there is no streaming.
pub fn load_screenshot(path: &Path) -> Result<Screenshot> {
    let content = fs::read(path).map_err(|e| {
        error!(path = %path.display(), error = ?e, "Failed to read screenshot");
        Error::Io {
            path: path.to_path_buf(),
            source: e,
        }
    })?;
    debug!(path = %path.display(), size = content.len(), "Read screenshot");

    Ok(Screenshot {
        path: path.to_path_buf(),
        extension: extension_of(path),
        content,
    })
}
