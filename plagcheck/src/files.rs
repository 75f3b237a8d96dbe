use std::fs;
use std::io;
use std::path::Path;

use crate::error::{Role, RunError};

pub fn ensure_exists(role: Role, path: &Path) -> Result<(), RunError> {
    if path.exists() {
        Ok(())
    } else {
        Err(RunError::MissingInput { role, path: path.to_path_buf() })
    }
}

/// Reads the whole document as UTF-8.
pub fn read_document(path: &Path) -> Result<String, RunError> {
    fs::read_to_string(path).map_err(|source| RunError::Read { path: path.to_path_buf(), source })
}

/// Writes `content` to `path`, creating missing parent directories and replacing an existing file.
pub fn write_result(path: &Path, content: &str) -> Result<(), RunError> {
    if path.is_dir() {
        return Err(RunError::OutputIsDirectory { path: path.to_path_buf() });
    }

    let write_err = |source: io::Error| RunError::Write { path: path.to_path_buf(), source };

    // a bare file name has an empty parent
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, content).map_err(write_err)
}
