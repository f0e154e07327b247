use anyhow::{Context, Result};
use marquee_config::MarqueeConfig;
use marquee_sqlite::{SqliteCatalog, SqlitePool};
use marquee_web::AppState;
use std::sync::Arc;

use super::sqlite_config;

pub async fn execute(config: MarqueeConfig) -> Result<()> {
    let pool = SqlitePool::connect(sqlite_config(&config.database)).with_context(|| {
        format!(
            "Failed to open database at {}",
            config.database.path.display()
        )
    })?;

    // Keep serving without a schema; requests touching missing tables fail
    // individually with a storage error.
    if let Err(e) = pool.apply_schema() {
        tracing::error!("Error creating tables: {}", e);
    }

    let state = AppState::new(Arc::new(SqliteCatalog::new(pool)));
    marquee_web::start_server(&config.server, state).await?;
    Ok(())
}
