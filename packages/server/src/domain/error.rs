//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// RoomKey validation error
    #[error("Room key is required")]
    RoomKeyEmpty,

    /// Username validation error
    #[error("Username cannot be empty")]
    UsernameEmpty,

    /// MessageContent validation error
    #[error("Message cannot be empty")]
    MessageContentEmpty,
}

/// Errors returned by `RoomRepository` implementations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// No room matches the given key
    #[error("Room not found: {0}")]
    RoomNotFound(String),

    /// A room with the same key already exists
    #[error("Room key already exists: {0}")]
    DuplicateRoomKey(String),

    /// Underlying storage failure
    #[error("Storage error: {0}")]
    Storage(String),
}
