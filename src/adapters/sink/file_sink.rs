use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::core::errors::{Result, RosterlyError};
use crate::core::traits::log_sink::{LogLevel, LogSink};

/// Sink that appends timestamped leveled lines to a file.
///
/// Each line is `<timestamp> <LEVEL> <message>`. The format is for
/// humans reading the log, not a compatibility contract.
pub struct FileSink {
    log_path: PathBuf,
}

impl FileSink {
    /// Create a sink that writes to `{rosterly_dir}/{log_file}`.
    pub fn new(rosterly_dir: &Path, log_file: &str) -> Self {
        Self {
            log_path: rosterly_dir.join(log_file),
        }
    }

    /// Return the file path this sink appends to.
    pub fn path(&self) -> &Path {
        &self.log_path
    }
}

impl LogSink for FileSink {
    fn write(&self, level: LogLevel, line: &str) -> Result<()> {
        if let Some(parent) = self.log_path.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| RosterlyError::LogError {
                detail: format!("Cannot open call log at {}: {e}", self.log_path.display()),
            })?;

        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        writeln!(file, "{timestamp} {:<5} {line}", level.as_str()).map_err(|e| {
            RosterlyError::LogError {
                detail: format!("Failed to write call log line: {e}"),
            }
        })?;

        Ok(())
    }
}
