//! Core domain models for the chat room backend.

use super::value_object::{MessageContent, RoomKey, Username};

/// Represents a chat room and its message history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    /// Room key (identifier and access credential)
    pub key: RoomKey,
    /// Message history in append order
    pub messages: Vec<ChatMessage>,
}

impl Room {
    /// Create a new empty room with the given key
    pub fn new(key: RoomKey) -> Self {
        Self {
            key,
            messages: Vec::new(),
        }
    }

    /// Append a message to the room history
    pub fn add_message(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }
}

/// Represents a chat message in the domain model
///
/// Owned by its room; has no identity of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    /// Poster's display name
    pub username: Username,
    /// Message content
    pub content: MessageContent,
}

impl ChatMessage {
    /// Create a new chat message
    pub fn new(username: Username, content: MessageContent) -> Self {
        Self { username, content }
    }
}
