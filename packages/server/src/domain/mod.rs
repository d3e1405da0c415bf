//! Domain layer for the chat room backend.
//!
//! This module contains business rules that are independent of
//! data transfer objects (DTOs) and infrastructure concerns.

pub mod entity;
pub mod error;
pub mod factory;
pub mod repository;
pub mod value_object;

pub use entity::{ChatMessage, Room};
pub use error::{RepositoryError, ValueObjectError};
pub use factory::RoomKeyFactory;
pub use repository::RoomRepository;
pub use value_object::{MessageContent, RoomKey, Username};

#[cfg(test)]
pub use repository::MockRoomRepository;
