//! UseCase: メッセージ一覧取得処理

use std::sync::Arc;

use crate::domain::{ChatMessage, RoomKey, RoomRepository};

use super::error::ListMessagesError;

/// メッセージ一覧取得のユースケース
pub struct ListMessagesUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
}

impl ListMessagesUseCase {
    /// 新しい ListMessagesUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// メッセージ一覧取得を実行
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<ChatMessage>)` - 追加順のメッセージ（空の場合もある）
    /// * `Err(ListMessagesError)` - Room が存在しない、またはストレージエラー
    pub async fn execute(&self, key: &RoomKey) -> Result<Vec<ChatMessage>, ListMessagesError> {
        Ok(self.repository.get_messages(key).await?)
    }
}
