//! Session configuration.
//!
//! # Invariants
//! - A validated config always carries a supported log level.
//! - `log_dir`, when set, is absolute.
//! - `top_count >= 1`.

use crate::logging::{default_log_level, parse_level};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Number of headline projects shown by default.
pub const DEFAULT_TOP_COUNT: usize = 2;
pub const DEFAULT_YEARS_IN_OPERATION: u32 = 12;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidLogLevel(String),
    EmptyLogDir,
    RelativeLogDir(PathBuf),
    ZeroTopCount,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLogLevel(level) => write!(
                f,
                "unsupported log level `{level}`; expected trace|debug|info|warn|error"
            ),
            Self::EmptyLogDir => write!(f, "log_dir cannot be empty"),
            Self::RelativeLogDir(path) => {
                write!(f, "log_dir must be an absolute path, got `{}`", path.display())
            }
            Self::ZeroTopCount => write!(f, "top_count must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

/// Settings for one catalog session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// JSON payload path; `None` uses the bundled demo catalog.
    pub data_path: Option<PathBuf>,
    pub log_level: String,
    /// Log directory; `None` leaves file logging off.
    pub log_dir: Option<PathBuf>,
    /// How many top-funded projects to highlight.
    pub top_count: usize,
    /// Shown in the company description.
    pub years_in_operation: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            log_level: default_log_level().to_string(),
            log_dir: None,
            top_count: DEFAULT_TOP_COUNT,
            years_in_operation: DEFAULT_YEARS_IN_OPERATION,
        }
    }
}

impl CatalogConfig {
    /// Checks invariants and normalizes the log level.
    pub fn validate(mut self) -> Result<Self, ConfigError> {
        self.log_level = parse_level(&self.log_level)
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))?
            .to_string();

        if let Some(dir) = &self.log_dir {
            if dir.as_os_str().is_empty() {
                return Err(ConfigError::EmptyLogDir);
            }
            if !dir.is_absolute() {
                return Err(ConfigError::RelativeLogDir(dir.clone()));
            }
        }

        if self.top_count == 0 {
            return Err(ConfigError::ZeroTopCount);
        }

        Ok(self)
    }

    pub fn shell_settings(&self) -> ShellSettings {
        ShellSettings {
            top_count: self.top_count,
            years_in_operation: self.years_in_operation,
        }
    }
}

/// Presentation options consumed by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellSettings {
    pub top_count: usize,
    pub years_in_operation: u32,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            top_count: DEFAULT_TOP_COUNT,
            years_in_operation: DEFAULT_YEARS_IN_OPERATION,
        }
    }
}
