use relative_path::RelativePath;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Write a file below `output_root`, creating parent directories.
pub fn write_file(
    relative_path: &RelativePath,
    output_root: &Path,
    content: &str,
) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(output_root);

    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent).map_err(|source| IoError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(&absolute_path, content).map_err(|source| IoError::Write {
        path: absolute_path,
        source,
    })
}
