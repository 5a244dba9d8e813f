use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::core::errors::{Result, RosterlyError};

static ROSTERLY_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Initialize the global data directory path.
/// If `custom` is provided, uses that path; otherwise defaults to `.rosterly`.
pub fn init(custom: Option<&str>) {
    let dir = custom
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(".rosterly"));
    let _ = ROSTERLY_DIR.set(dir);
}

/// Get the current data directory path.
pub fn rosterly_dir() -> &'static Path {
    ROSTERLY_DIR
        .get()
        .map(|p| p.as_path())
        .unwrap_or(Path::new(".rosterly"))
}

/// Reject filenames that could escape the data directory.
/// A valid name is non-empty and contains no path separators or `..`.
pub fn validate_simple_filename(name: &str, what: &str) -> Result<()> {
    if name.is_empty()
        || name.contains('/')
        || name.contains('\\')
        || name.contains("..")
    {
        return Err(RosterlyError::InvalidConfig {
            detail: format!("Invalid {what} name: '{name}'"),
        });
    }
    Ok(())
}
