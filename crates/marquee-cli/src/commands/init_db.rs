use anyhow::{Context, Result};
use marquee_config::MarqueeConfig;
use marquee_sqlite::{schema, SqlitePool};

use super::sqlite_config;

/// Create the schema and report the resulting version.
///
/// Unlike `serve`, any failure here is fatal.
pub fn execute(config: &MarqueeConfig) -> Result<()> {
    let path = config.database.path.display().to_string();
    let pool = SqlitePool::new(sqlite_config(&config.database))
        .with_context(|| format!("Failed to initialize database at {path}"))?;

    let version = pool.with_connection(|conn| schema::current_version(conn))?;
    tracing::info!(version, "Schema applied");
    println!("Database ready at {path} (schema version {version})");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_db_creates_file_and_is_repeatable() {
        let dir = TempDir::new().unwrap();
        let mut config = MarqueeConfig::default();
        config.database.path = dir.path().join("nested").join("marquee.db");

        execute(&config).unwrap();
        execute(&config).unwrap();
        assert!(config.database.path.exists());
    }
}
