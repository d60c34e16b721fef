//! Atomic file persistence.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::StoreError;

/// Write `contents` to `path` via a temp file in the same directory plus
/// an atomic rename.
///
/// Either the full new document lands at `path` or the previous file is
/// left intact; a crash mid-write can never leave a truncated document.
/// Missing parent directories are created first.
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), StoreError> {
    let parent = path.parent().ok_or_else(|| StoreError::Persist {
        path: path.to_path_buf(),
        reason: "path has no parent directory".to_string(),
    })?;

    if !parent.exists() {
        fs::create_dir_all(parent).map_err(|e| StoreError::Persist {
            path: path.to_path_buf(),
            reason: format!("creating {}: {e}", parent.display()),
        })?;
    }

    // Temp file must live on the same filesystem as the target for the
    // rename to be atomic.
    let mut tmp = NamedTempFile::new_in(parent).map_err(|e| StoreError::Persist {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    tmp.write_all(contents.as_bytes())
        .map_err(|e| StoreError::Persist {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    tmp.persist(path).map_err(|e| StoreError::Persist {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    Ok(())
}
