//! Handler modules for HTTP endpoints.

pub mod http;

// Re-export HTTP handlers
pub use http::{create_room, get_messages, health_check, join_room, post_message};
