//! SQLite storage backend for Marquee
//!
//! This crate owns the relational schema and every SQL statement the catalog
//! runs. [`SqliteCatalog`] implements [`marquee_core::CatalogStore`] on top of
//! the synchronous data-access functions in [`catalog`].
//!
//! ## Features
//!
//! - **Create-if-absent schema**: tables and indexes are declared idempotently
//! - **Classified errors**: unique and foreign-key failures become typed errors
//! - **Atomic composites**: multi-statement writes run in one transaction
//! - **Thread Safety**: Arc<Mutex<Connection>> driven from `spawn_blocking`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use marquee_sqlite::{SqliteCatalog, SqliteConfig, SqlitePool};
//! use marquee_core::{CatalogStore, NewMovie};
//!
//! let pool = SqlitePool::new(SqliteConfig::new("./data/marquee.db"))?;
//! let catalog = SqliteCatalog::new(pool);
//!
//! let movie_id = catalog.create_movie(NewMovie::titled("Heat")).await?;
//! ```

pub mod catalog;
pub mod config;
pub mod connection;
pub mod error;
pub mod schema;

// Re-exports
pub use catalog::SqliteCatalog;
pub use config::SqliteConfig;
pub use connection::SqlitePool;
pub use error::{SqliteError, SqliteResult};
