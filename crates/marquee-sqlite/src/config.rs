//! SQLite connection configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const MEMORY_PATH: &str = ":memory:";

/// Connection and PRAGMA settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SqliteConfig {
    /// Database file, or `:memory:`
    pub path: PathBuf,
    /// Use write-ahead logging (file databases only)
    pub wal_mode: bool,
    /// Enforce foreign keys; link and role tables rely on this
    pub foreign_keys: bool,
    /// How long a statement waits on a locked database
    pub busy_timeout_ms: u32,
    /// PRAGMA cache_size (negative values are KiB)
    pub cache_size: i64,
}

impl SqliteConfig {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            ..Default::default()
        }
    }

    /// Private in-memory database, mostly for tests
    pub fn memory() -> Self {
        Self {
            path: PathBuf::from(MEMORY_PATH),
            wal_mode: false,
            ..Default::default()
        }
    }

    pub fn is_memory(&self) -> bool {
        self.path.to_str() == Some(MEMORY_PATH)
    }

    pub fn with_busy_timeout_ms(mut self, busy_timeout_ms: u32) -> Self {
        self.busy_timeout_ms = busy_timeout_ms;
        self
    }
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./data/marquee.db"),
            wal_mode: true,
            foreign_keys: true,
            busy_timeout_ms: 5000,
            cache_size: -2000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_config() {
        let config = SqliteConfig::memory();
        assert!(config.is_memory());
        assert!(config.foreign_keys);
        assert!(!config.wal_mode);
    }

    #[test]
    fn test_file_config_defaults() {
        let config = SqliteConfig::new("/tmp/catalog.db").with_busy_timeout_ms(250);
        assert!(!config.is_memory());
        assert!(config.wal_mode);
        assert_eq!(config.busy_timeout_ms, 250);
    }
}
