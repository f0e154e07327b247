//! Static front-end assets

use axum::Router;
use std::path::Path;
use tower_http::services::ServeDir;

/// Serve `dir` for every path no API route claims.
///
/// A missing directory disables static serving rather than failing startup.
pub fn static_routes(dir: Option<&Path>) -> Router {
    match dir {
        Some(dir) if dir.is_dir() => {
            tracing::info!("Serving static assets from: {}", dir.display());
            Router::new().fallback_service(ServeDir::new(dir).append_index_html_on_directories(true))
        }
        Some(dir) => {
            tracing::warn!(
                "Static asset directory {} not found, serving API only",
                dir.display()
            );
            Router::new()
        }
        None => Router::new(),
    }
}
