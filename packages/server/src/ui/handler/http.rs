//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::{
    domain::{MessageContent, RoomKey, Username},
    infrastructure::dto::http::{
        JoinRoomRequestDto, MessageDto, MessageSentDto, PostMessageRequestDto, RoomKeyDto,
    },
    ui::{
        error::{ApiError, MESSAGE_FIELDS_REQUIRED, ROOM_KEY_REQUIRED, ROOM_NOT_FOUND},
        state::AppState,
    },
    usecase::{CreateRoomUseCase, JoinRoomUseCase, ListMessagesUseCase, PostMessageUseCase},
};

/// Acknowledgement text for a stored message
pub const MESSAGE_SENT: &str = "Message sent";

/// Treat an unreadable body (absent, not JSON, wrong field types) as one
/// with every field missing, so presence validation decides the response.
fn body_or_default<T: Default>(payload: Result<Json<T>, JsonRejection>) -> T {
    match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            tracing::debug!("Unreadable request body: {}", rejection.body_text());
            T::default()
        }
    }
}

/// Convert a path segment to a RoomKey. An empty key can never match a room.
fn path_room_key(room_key: String) -> Result<RoomKey, ApiError> {
    RoomKey::new(room_key).map_err(|_| ApiError::NotFound(ROOM_NOT_FOUND.to_string()))
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// `GET /room/create`
pub async fn create_room(
    State(state): State<Arc<AppState>>,
) -> Result<(StatusCode, Json<RoomKeyDto>), ApiError> {
    let usecase = CreateRoomUseCase::new(state.repository.clone());
    let room_key = usecase.execute().await?;

    Ok((
        StatusCode::CREATED,
        Json(RoomKeyDto {
            room_key: room_key.into_string(),
        }),
    ))
}

/// `POST /room/join`
pub async fn join_room(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<JoinRoomRequestDto>, JsonRejection>,
) -> Result<Json<RoomKeyDto>, ApiError> {
    let request = body_or_default(payload);

    // Convert String -> RoomKey (Domain Model)
    let room_key = request
        .room_key
        .and_then(|key| RoomKey::new(key).ok())
        .ok_or_else(|| ApiError::Validation(ROOM_KEY_REQUIRED.to_string()))?;

    let usecase = JoinRoomUseCase::new(state.repository.clone());
    let room_key = usecase.execute(room_key).await?;

    Ok(Json(RoomKeyDto {
        room_key: room_key.into_string(),
    }))
}

/// `GET /room/{room_key}/messages`
pub async fn get_messages(
    State(state): State<Arc<AppState>>,
    Path(room_key): Path<String>,
) -> Result<Json<Vec<MessageDto>>, ApiError> {
    let room_key = path_room_key(room_key)?;

    let usecase = ListMessagesUseCase::new(state.repository.clone());
    let messages = usecase.execute(&room_key).await?;

    let body: Vec<MessageDto> = messages
        .into_iter()
        .map(|message| MessageDto {
            username: message.username.into_string(),
            msg: message.content.into_string(),
        })
        .collect();

    Ok(Json(body))
}

/// `POST /room/{room_key}/messages`
pub async fn post_message(
    State(state): State<Arc<AppState>>,
    Path(room_key): Path<String>,
    payload: Result<Json<PostMessageRequestDto>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageSentDto>), ApiError> {
    let request = body_or_default(payload);

    // Body validation comes first so an invalid request never touches storage
    let (Some(Ok(username)), Some(Ok(content))) = (
        request.username.map(Username::new),
        request.msg.map(MessageContent::new),
    ) else {
        return Err(ApiError::Validation(MESSAGE_FIELDS_REQUIRED.to_string()));
    };

    let room_key = path_room_key(room_key)?;

    let usecase = PostMessageUseCase::new(state.repository.clone());
    usecase.execute(&room_key, username, content).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageSentDto {
            message: MESSAGE_SENT.to_string(),
        }),
    ))
}
