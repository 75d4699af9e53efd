use std::fs;
use std::path::Path;

use crate::DestinationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirStatus {
    Existing,
    Created,
}

/// Ensure the destination directory exists; create it and any parents if missing.
pub fn ensure_destination_dir(dir: &Path) -> Result<DirStatus, DestinationError> {
    if dir.is_dir() {
        return Ok(DirStatus::Existing);
    }
    if dir.exists() {
        return Err(DestinationError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }
    fs::create_dir_all(dir).map_err(|source| DestinationError::Create {
        path: dir.to_path_buf(),
        source,
    })?;
    Ok(DirStatus::Created)
}
