//! Database configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// SQLite database settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub path: PathBuf,
    pub wal_mode: bool,
    pub busy_timeout_ms: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./data/marquee.db"),
            wal_mode: true,
            busy_timeout_ms: 5000,
        }
    }
}
