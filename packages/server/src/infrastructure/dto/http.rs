//! HTTP API request/response DTOs for the chat room backend.

use serde::{Deserialize, Serialize};

/// Response body for `GET /room/create` and `POST /room/join`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomKeyDto {
    pub room_key: String,
}

/// Request body for `POST /room/join`
///
/// Fields are optional so that presence is checked at the boundary
/// instead of by the JSON extractor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JoinRoomRequestDto {
    pub room_key: Option<String>,
}

/// Request body for `POST /room/{room_key}/messages`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostMessageRequestDto {
    pub username: Option<String>,
    pub msg: Option<String>,
}

/// One element of the `GET /room/{room_key}/messages` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDto {
    pub username: String,
    pub msg: String,
}

/// Acknowledgement for `POST /room/{room_key}/messages`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageSentDto {
    pub message: String,
}

/// Error body returned by every failing endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponseDto {
    pub error: String,
}
