//! UseCase: メッセージ送信処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - PostMessageUseCase::execute() メソッド
//! - Room のメッセージ履歴への追加
//!
//! ### なぜこのテストが必要か
//! - 存在確認と追加が Repository の 1 操作で行われ、UseCase 側で事前確認をしないことを保証
//! - 存在しない Room に送信しても Room が作成されないことを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：メッセージ送信
//! - 異常系：存在しない Room、ストレージエラー
//! - エッジケース：連続送信時の順序

use std::sync::Arc;

use crate::domain::{ChatMessage, MessageContent, RoomKey, RoomRepository, Username};

use super::error::PostMessageError;

/// メッセージ送信のユースケース
pub struct PostMessageUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
}

impl PostMessageUseCase {
    /// 新しい PostMessageUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// メッセージ送信を実行
    ///
    /// # Arguments
    ///
    /// * `key` - 送信先 Room のキー（Domain Model）
    /// * `username` - 送信者名（Domain Model）
    /// * `content` - メッセージ内容（Domain Model）
    ///
    /// # Returns
    ///
    /// * `Ok(())` - 送信成功
    /// * `Err(PostMessageError)` - 送信失敗
    pub async fn execute(
        &self,
        key: &RoomKey,
        username: Username,
        content: MessageContent,
    ) -> Result<(), PostMessageError> {
        let message = ChatMessage::new(username, content);
        self.repository.append_message(key, message).await?;
        tracing::info!("Message appended to room '{}'", key);
        Ok(())
    }
}
