pub mod init_db;
pub mod serve;

use marquee_config::DatabaseConfig;
use marquee_sqlite::SqliteConfig;

/// SQLite connection settings for the configured database
pub fn sqlite_config(database: &DatabaseConfig) -> SqliteConfig {
    SqliteConfig {
        wal_mode: database.wal_mode,
        ..SqliteConfig::new(&database.path)
    }
    .with_busy_timeout_ms(database.busy_timeout_ms)
}
