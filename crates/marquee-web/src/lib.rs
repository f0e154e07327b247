pub mod routes;
pub mod server;

mod assets;
mod error;
mod extract;
mod state;

pub use error::{Result, WebError};
pub use server::{build_router, start_server};
pub use state::AppState;
