use std::path::{Path, PathBuf};

use miette::Diagnostic;
use thiserror::Error;

/// Result type for scan operations (boxed to keep the Ok path small)
pub type ScanResult<T> = std::result::Result<T, Box<ScanError>>;

#[derive(Debug, Error, Diagnostic)]
pub enum ScanError {
    #[error("components root '{path}' does not exist or is not a directory")]
    #[diagnostic(
        code(canopy::missing_root),
        help("pass the directory holding your component folders, e.g. src/lib/components")
    )]
    MissingRoot { path: PathBuf },

    #[error("failed to read directory '{path}'")]
    #[diagnostic(
        code(canopy::unreadable_dir),
        help("check filesystem permissions for the component tree")
    )]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    /// Create a missing-root error
    pub(crate) fn missing_root(path: &Path) -> Box<Self> {
        Box::new(Self::MissingRoot {
            path: path.to_path_buf(),
        })
    }

    /// Create a read-dir error carrying the failing path
    pub(crate) fn read_dir(path: &Path, source: std::io::Error) -> Box<Self> {
        Box::new(Self::ReadDir {
            path: path.to_path_buf(),
            source,
        })
    }
}
