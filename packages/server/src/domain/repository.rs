//! Repository trait
//!
//! ドメイン層が定義するデータアクセスの抽象化。
//! UseCase 層はこの trait に依存し、具体的な実装（SQLite / InMemory）には依存しません。

use async_trait::async_trait;

use super::{ChatMessage, RepositoryError, Room, RoomKey};

/// Room の永続化を担う Repository
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// 新しい Room を保存する
    ///
    /// 同じキーの Room が既に存在する場合は `RepositoryError::DuplicateRoomKey` を返す
    async fn create_room(&self, room: Room) -> Result<(), RepositoryError>;

    /// 指定したキーの Room が存在するかを返す
    async fn exists(&self, key: &RoomKey) -> Result<bool, RepositoryError>;

    /// Room のメッセージ履歴を追加順で返す
    ///
    /// Room が存在しない場合は `RepositoryError::RoomNotFound` を返す
    async fn get_messages(&self, key: &RoomKey) -> Result<Vec<ChatMessage>, RepositoryError>;

    /// Room にメッセージを追加する
    ///
    /// 存在確認と追加は 1 回の操作で行われる。
    /// Room が存在しない場合は何も変更せず `RepositoryError::RoomNotFound` を返す
    async fn append_message(
        &self,
        key: &RoomKey,
        message: ChatMessage,
    ) -> Result<(), RepositoryError>;
}
