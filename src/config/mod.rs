//! Saved business profile, stored as key/value pairs in SQLite.
//!
//! The profile supplies defaults for the business name and type so they
//! need not be repeated on every run. Use `":memory:"` for a throwaway
//! store.

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Mutex;

use anyhow::{Context, Result, bail};
use rusqlite::Connection;

/// Keys the profile understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    BusinessName,
    BusinessType,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 2] = [ConfigKey::BusinessName, ConfigKey::BusinessType];

    pub fn as_str(self) -> &'static str {
        match self {
            ConfigKey::BusinessName => "business-name",
            ConfigKey::BusinessType => "business-type",
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match Self::ALL.into_iter().find(|k| k.as_str() == s) {
            Some(key) => Ok(key),
            None => {
                let known: Vec<&str> = Self::ALL.iter().map(|k| k.as_str()).collect();
                bail!("unknown config key: {s} (expected one of: {})", known.join(", "))
            }
        }
    }
}

/// Persistent key-value configuration store.
pub struct Config {
    conn: Mutex<Connection>,
}

impl Config {
    /// Open or create the config table in the given database.
    /// Parent directories of a file path are created as needed.
    pub fn open(path: &str) -> Result<Self> {
        if path != ":memory:"
            && let Some(parent) = Path::new(path).parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let conn = Connection::open(path).context("failed to open config database")?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS config (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
        )
        .context("failed to create config table")?;
        tracing::debug!(path, "opened config store");
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn in_memory() -> Result<Self> {
        Self::open(":memory:")
    }

    /// Get a config value by key.
    pub fn get(&self, key: ConfigKey) -> Result<Option<String>> {
        let conn = self.lock();
        let mut stmt = conn.prepare("SELECT value FROM config WHERE key = ?1")?;
        let mut rows = stmt.query([key.as_str()])?;
        match rows.next()? {
            Some(row) => Ok(Some(row.get(0)?)),
            None => Ok(None),
        }
    }

    /// Set a config value (upsert). Surrounding whitespace is dropped.
    pub fn set(&self, key: ConfigKey, value: &str) -> Result<()> {
        let conn = self.lock();
        conn.execute(
            "INSERT INTO config (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            [key.as_str(), value.trim()],
        )?;
        Ok(())
    }

    /// Remove a config key.
    pub fn remove(&self, key: ConfigKey) -> Result<()> {
        let conn = self.lock();
        conn.execute("DELETE FROM config WHERE key = ?1", [key.as_str()])?;
        Ok(())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mem_config() -> Config {
        Config::in_memory().unwrap()
    }

    #[test]
    fn get_returns_none_for_missing_key() {
        let config = mem_config();
        assert!(config.get(ConfigKey::BusinessName).unwrap().is_none());
    }

    #[test]
    fn set_and_get() {
        let config = mem_config();
        config.set(ConfigKey::BusinessName, "Joe's Restaurant").unwrap();
        assert_eq!(
            config.get(ConfigKey::BusinessName).unwrap().unwrap(),
            "Joe's Restaurant"
        );
    }

    #[test]
    fn set_trims_value() {
        let config = mem_config();
        config.set(ConfigKey::BusinessType, "  dental ").unwrap();
        assert_eq!(config.get(ConfigKey::BusinessType).unwrap().unwrap(), "dental");
    }

    #[test]
    fn set_overwrites_existing() {
        let config = mem_config();
        config.set(ConfigKey::BusinessType, "retail").unwrap();
        config.set(ConfigKey::BusinessType, "healthcare").unwrap();
        assert_eq!(
            config.get(ConfigKey::BusinessType).unwrap().unwrap(),
            "healthcare"
        );
    }

    #[test]
    fn remove_deletes_key() {
        let config = mem_config();
        config.set(ConfigKey::BusinessName, "Acme").unwrap();
        config.remove(ConfigKey::BusinessName).unwrap();
        assert!(config.get(ConfigKey::BusinessName).unwrap().is_none());
    }

    #[test]
    fn remove_nonexistent_is_ok() {
        mem_config().remove(ConfigKey::BusinessType).unwrap();
    }

    #[test]
    fn keys_independent() {
        let config = mem_config();
        config.set(ConfigKey::BusinessName, "Acme").unwrap();
        config.set(ConfigKey::BusinessType, "retail").unwrap();

        assert_eq!(config.get(ConfigKey::BusinessName).unwrap().unwrap(), "Acme");
        assert_eq!(config.get(ConfigKey::BusinessType).unwrap().unwrap(), "retail");
    }

    #[test]
    fn key_parsing() {
        assert_eq!(
            "business-name".parse::<ConfigKey>().unwrap(),
            ConfigKey::BusinessName
        );
        let err = "theme".parse::<ConfigKey>().unwrap_err();
        assert!(err.to_string().contains("business-type"));
    }

    #[test]
    fn persists_to_file_and_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("replysmith.db");
        let path_str = path.to_str().unwrap();

        {
            let config = Config::open(path_str).unwrap();
            config.set(ConfigKey::BusinessName, "persisted").unwrap();
        }

        {
            let config = Config::open(path_str).unwrap();
            assert_eq!(
                config.get(ConfigKey::BusinessName).unwrap().unwrap(),
                "persisted"
            );
        }
    }
}
