//! Environment-driven core configuration.
//!
//! # Responsibility
//! - Resolve database path and logging settings for hosts (FFI, CLI).
//!
//! # Invariants
//! - Blank values are treated as unset.
//! - `log_dir`, when present, is absolute.

use crate::logging::default_log_level;
use std::path::PathBuf;
use thiserror::Error;

pub const DB_PATH_ENV: &str = "QUICKGOALS_DB_PATH";
pub const LOG_LEVEL_ENV: &str = "QUICKGOALS_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "QUICKGOALS_LOG_DIR";
const DEFAULT_DB_FILE_NAME: &str = "quickgoals.sqlite3";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var} must be an absolute path, got `{value}`")]
    RelativePath { var: &'static str, value: String },
}

/// Resolved settings for one process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub db_path: PathBuf,
    pub log_level: String,
    pub log_dir: Option<PathBuf>,
}

impl CoreConfig {
    /// Resolves settings from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolves settings through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let db_path = read(DB_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DB_FILE_NAME));
        let log_level = read(LOG_LEVEL_ENV).unwrap_or_else(|| default_log_level().to_string());
        let log_dir = match read(LOG_DIR_ENV) {
            Some(value) => {
                let path = PathBuf::from(&value);
                if !path.is_absolute() {
                    return Err(ConfigError::RelativePath {
                        var: LOG_DIR_ENV,
                        value,
                    });
                }
                Some(path)
            }
            None => None,
        };

        Ok(Self {
            db_path,
            log_level,
            log_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, CoreConfig, DB_PATH_ENV, LOG_DIR_ENV, LOG_LEVEL_ENV};
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_apply_when_unset_or_blank() {
        let config = CoreConfig::from_lookup(lookup(&[(DB_PATH_ENV, "  ")])).unwrap();
        assert!(config.db_path.ends_with("quickgoals.sqlite3"));
        assert!(!config.log_level.is_empty());
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn explicit_values_are_used() {
        let log_dir = std::env::temp_dir().join("quickgoals-logs");
        let log_dir_str = log_dir.to_str().unwrap();
        let config = CoreConfig::from_lookup(lookup(&[
            (DB_PATH_ENV, "/data/goals.db"),
            (LOG_LEVEL_ENV, "warn"),
            (LOG_DIR_ENV, log_dir_str),
        ]))
        .unwrap();

        assert_eq!(config.db_path.to_str(), Some("/data/goals.db"));
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, Some(log_dir));
    }

    #[test]
    fn relative_log_dir_is_rejected() {
        let err = CoreConfig::from_lookup(lookup(&[(LOG_DIR_ENV, "logs")])).unwrap_err();
        assert!(matches!(err, ConfigError::RelativePath { .. }));
    }
}
