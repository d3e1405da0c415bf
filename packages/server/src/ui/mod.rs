//! HTTP server implementation.

pub mod error;
mod handler;
mod runner;
mod signal;
pub mod state;

pub use error::ApiError;
pub use runner::{create_router, run};
pub use state::AppState;
