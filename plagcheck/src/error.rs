use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Which input document a path belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Original,
    Compared,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Original => f.write_str("Original"),
            Role::Compared => f.write_str("Compared"),
        }
    }
}

/// Failures of a comparison run. None of them leaves an output file behind.
#[derive(Error, Debug)]
pub enum RunError {
    #[error("{role} file does not exist: {}", .path.display())]
    MissingInput { role: Role, path: PathBuf },

    #[error("Failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Path points to a directory, not a file: {}", .path.display())]
    OutputIsDirectory { path: PathBuf },

    #[error("Failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}
