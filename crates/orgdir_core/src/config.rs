//! Runtime configuration for hosts embedding the directory core.
//!
//! # Responsibility
//! - Resolve log level and log directory from the environment.
//! - Keep resolution testable through an injectable lookup.
//!
//! # Invariants
//! - A missing or blank variable falls back to its default.
//! - Without a log directory, file logging stays disabled.

use crate::logging::{default_log_level, init_logging, LoggingError};
use std::path::PathBuf;

pub const ENV_LOG_LEVEL: &str = "ORGDIR_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "ORGDIR_LOG_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub log_level: String,
    pub log_dir: Option<PathBuf>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl CoreConfig {
    /// Reads `ORGDIR_LOG_LEVEL` and `ORGDIR_LOG_DIR` from the process env.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration through `lookup` instead of the process env.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let defaults = Self::default();
        Self {
            log_level: non_blank(ENV_LOG_LEVEL).unwrap_or(defaults.log_level),
            log_dir: non_blank(ENV_LOG_DIR).map(PathBuf::from),
        }
    }

    /// Starts file logging when a directory is configured.
    ///
    /// Returns `Ok(false)` when no directory is set and nothing was started.
    pub fn init_logging(&self) -> Result<bool, LoggingError> {
        match &self.log_dir {
            Some(dir) => init_logging(&self.log_level, dir).map(|()| true),
            None => Ok(false),
        }
    }
}
