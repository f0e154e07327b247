//! Configuration sections

pub mod database;
pub mod logging;
pub mod server;

pub use database::DatabaseConfig;
pub use logging::LoggingConfig;
pub use server::ServerConfig;
