//! Server startup and runtime errors.

use thiserror::Error;

use crate::domain::RepositoryError;

/// Errors that stop the server process
#[derive(Debug, Error)]
pub enum ServerError {
    /// Room storage could not be opened or initialized
    #[error("Failed to initialize room storage: {0}")]
    Repository(#[from] RepositoryError),

    /// Binding the listener or serving connections failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
