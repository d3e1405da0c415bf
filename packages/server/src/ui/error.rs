//! Central mapping from use case failures to HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{
    infrastructure::dto::http::ErrorResponseDto,
    usecase::{CreateRoomError, JoinRoomError, ListMessagesError, PostMessageError},
};

pub const ROOM_KEY_REQUIRED: &str = "Room key is required";
pub const MESSAGE_FIELDS_REQUIRED: &str = "Username and message are required";
pub const ROOM_NOT_FOUND: &str = "Room not found";
pub const INTERNAL_ERROR: &str = "Internal server error";

/// Error returned by every HTTP handler
///
/// Rendered as `{"error": "<message>"}` with the matching status code.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A required request field is missing or empty (400)
    #[error("{0}")]
    Validation(String),

    /// No room matches the requested key (404)
    #[error("{0}")]
    NotFound(String),

    /// Storage or other unexpected failure (500). The detail is logged, not returned.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the response body
    pub fn public_message(&self) -> &str {
        match self {
            Self::Validation(message) | Self::NotFound(message) => message.as_str(),
            Self::Internal(_) => INTERNAL_ERROR,
        }
    }

    fn room_not_found() -> Self {
        Self::NotFound(ROOM_NOT_FOUND.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            Self::Internal(detail) => tracing::error!("Request failed: {}", detail),
            other => tracing::warn!("Request rejected ({}): {}", status, other),
        }
        let body = ErrorResponseDto {
            error: self.public_message().to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<CreateRoomError> for ApiError {
    fn from(err: CreateRoomError) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<JoinRoomError> for ApiError {
    fn from(err: JoinRoomError) -> Self {
        match err {
            JoinRoomError::RoomNotFound(_) => Self::room_not_found(),
            JoinRoomError::Repository(e) => Self::Internal(e.to_string()),
        }
    }
}

impl From<ListMessagesError> for ApiError {
    fn from(err: ListMessagesError) -> Self {
        match err {
            ListMessagesError::RoomNotFound(_) => Self::room_not_found(),
            ListMessagesError::Repository(e) => Self::Internal(e.to_string()),
        }
    }
}

impl From<PostMessageError> for ApiError {
    fn from(err: PostMessageError) -> Self {
        match err {
            PostMessageError::RoomNotFound(_) => Self::room_not_found(),
            PostMessageError::Repository(e) => Self::Internal(e.to_string()),
        }
    }
}
