//! UseCase 層のエラー定義

use thiserror::Error;

use crate::domain::RepositoryError;

/// Room 作成時のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CreateRoomError {
    /// ルームキーの生成に失敗
    #[error("Failed to generate room key: {0}")]
    KeyGeneration(String),

    /// Repository のエラー（重複キーの再試行上限到達を含む）
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Room 参加時のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JoinRoomError {
    #[error("Room not found: {0}")]
    RoomNotFound(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// メッセージ一覧取得時のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ListMessagesError {
    #[error("Room not found: {0}")]
    RoomNotFound(String),

    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<RepositoryError> for ListMessagesError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::RoomNotFound(key) => Self::RoomNotFound(key),
            other => Self::Repository(other),
        }
    }
}

/// メッセージ送信時のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PostMessageError {
    #[error("Room not found: {0}")]
    RoomNotFound(String),

    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<RepositoryError> for PostMessageError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::RoomNotFound(key) => Self::RoomNotFound(key),
            other => Self::Repository(other),
        }
    }
}
