//! UseCase: Room 参加処理
//!
//! 参加はステートレスで、Room の存在確認以外の副作用を持ちません。

use std::sync::Arc;

use crate::domain::{RoomKey, RoomRepository};

use super::error::JoinRoomError;

/// Room 参加のユースケース
pub struct JoinRoomUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
}

impl JoinRoomUseCase {
    /// 新しい JoinRoomUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// Room 参加を実行
    ///
    /// # Returns
    ///
    /// * `Ok(RoomKey)` - 参加した Room のキー（入力をそのまま返す）
    /// * `Err(JoinRoomError)` - Room が存在しない、またはストレージエラー
    pub async fn execute(&self, key: RoomKey) -> Result<RoomKey, JoinRoomError> {
        if !self.repository.exists(&key).await? {
            return Err(JoinRoomError::RoomNotFound(key.into_string()));
        }
        Ok(key)
    }
}
