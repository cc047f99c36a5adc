//! Configuration loading and representation.

use std::path::PathBuf;

use thiserror::Error;

use crate::repository::DEFAULT_STORAGE_KEY;

/// Environment variable overriding the database file location.
pub const DB_PATH_ENV: &str = "TRAVELJOURNAL_DB";

/// Environment variable overriding the storage key of the entry collection.
pub const STORAGE_KEY_ENV: &str = "TRAVELJOURNAL_STORAGE_KEY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to resolve OS app data directory - tried data_dir() and home_dir()/.local/share")]
    NoDataDir,

    #[error("{0} is set but empty")]
    Empty(&'static str),
}

/// Where and under which key the journal is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub database_path: PathBuf,
    pub storage_key: String,
}

impl StorageConfig {
    /// Load from the process environment, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load using `lookup` to resolve variables (the testable core of `from_env`).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_path = match lookup(DB_PATH_ENV) {
            Some(path) if path.trim().is_empty() => return Err(ConfigError::Empty(DB_PATH_ENV)),
            Some(path) => PathBuf::from(path),
            None => default_database_path()?,
        };

        let storage_key = match lookup(STORAGE_KEY_ENV) {
            Some(key) if key.trim().is_empty() => return Err(ConfigError::Empty(STORAGE_KEY_ENV)),
            Some(key) => key,
            None => DEFAULT_STORAGE_KEY.to_string(),
        };

        Ok(Self {
            database_path,
            storage_key,
        })
    }

    pub fn with_database_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.database_path = path.into();
        self
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}

/// Resolve the default database location: `{app_data_dir}/traveljournal/journal.db`.
pub fn default_database_path() -> Result<PathBuf, ConfigError> {
    let mut dir = dirs::data_dir()
        .or_else(|| {
            dirs::home_dir().map(|mut h| {
                h.push(".local");
                h.push("share");
                h
            })
        })
        .ok_or(ConfigError::NoDataDir)?;

    dir.push("traveljournal");
    dir.push("journal.db");
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn explicit_values_win() {
        let config = StorageConfig::from_lookup(lookup_from(&[
            (DB_PATH_ENV, "/tmp/journal-test.db"),
            (STORAGE_KEY_ENV, "entries"),
        ]))
        .unwrap();

        assert_eq!(config.database_path, PathBuf::from("/tmp/journal-test.db"));
        assert_eq!(config.storage_key, "entries");
    }

    #[test]
    fn storage_key_defaults_to_travel_entries() {
        let config =
            StorageConfig::from_lookup(lookup_from(&[(DB_PATH_ENV, "/tmp/x.db")])).unwrap();
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn blank_values_are_rejected() {
        let err = StorageConfig::from_lookup(lookup_from(&[
            (DB_PATH_ENV, "/tmp/x.db"),
            (STORAGE_KEY_ENV, " "),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Empty(STORAGE_KEY_ENV)));
    }

    #[test]
    fn builder_overrides() {
        let config = StorageConfig::from_lookup(lookup_from(&[(DB_PATH_ENV, "/a.db")]))
            .unwrap()
            .with_database_path("/b.db")
            .with_storage_key("k");
        assert_eq!(config.database_path, PathBuf::from("/b.db"));
        assert_eq!(config.storage_key, "k");
    }
}
