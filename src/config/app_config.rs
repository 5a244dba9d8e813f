use serde::Deserialize;
use std::path::Path;

use crate::core::errors::{Result, RosterlyError};

/// Top-level Rosterly configuration read from `.rosterly/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub rosterly: RosterlySection,
    pub log: Option<LogSection>,
}

impl AppConfig {
    /// Load the configuration from `{rosterly_dir}/config.toml`.
    ///
    /// After parsing, validates the roster and log filenames to keep a
    /// compromised config file from escaping the data directory.
    pub fn load(rosterly_dir: &Path) -> Result<Self> {
        let config_path = rosterly_dir.join("config.toml");
        if !config_path.exists() {
            return Err(RosterlyError::NotInitialized);
        }
        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = toml::from_str(&content).map_err(|e| RosterlyError::InvalidConfig {
            detail: format!("Failed to parse config.toml: {e}"),
        })?;

        crate::cli::context::validate_simple_filename(
            &config.rosterly.roster_file,
            "roster file",
        )?;
        if let Some(log) = &config.log {
            crate::cli::context::validate_simple_filename(&log.file, "log file")?;
        }

        Ok(config)
    }

    /// Whether call logging is on. Enabled by default when the `[log]`
    /// section is absent.
    pub fn log_enabled(&self) -> bool {
        self.log.as_ref().map(|l| l.enabled).unwrap_or(true)
    }

    /// The call log filename inside the data directory.
    pub fn log_file(&self) -> &str {
        self.log
            .as_ref()
            .map(|l| l.file.as_str())
            .unwrap_or(DEFAULT_LOG_FILE)
    }
}

pub const DEFAULT_ROSTER_FILE: &str = "roster.json";
pub const DEFAULT_LOG_FILE: &str = "rosterly.log";

/// The `[rosterly]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterlySection {
    pub version: String,
    /// Roster filename inside the data directory.
    #[serde(default = "default_roster_file")]
    pub roster_file: String,
}

fn default_roster_file() -> String {
    DEFAULT_ROSTER_FILE.to_string()
}

/// The `[log]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct LogSection {
    pub enabled: bool,
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_log_file() -> String {
    DEFAULT_LOG_FILE.to_string()
}
