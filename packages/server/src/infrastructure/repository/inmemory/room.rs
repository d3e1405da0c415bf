//! InMemory Room Repository 実装
//!
//! ドメイン層が定義する RoomRepository trait の具体的な実装。
//! HashMap をインメモリ DB として使用します。
//!
//! 全ての操作は 1 つの Mutex の内側で行われるため、
//! メッセージ追加時の存在確認と追加の間に他の操作が割り込むことはありません。

use std::{
    collections::{HashMap, hash_map::Entry},
    sync::Arc,
};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{ChatMessage, RepositoryError, Room, RoomKey, RoomRepository};

/// インメモリ Room Repository 実装
///
/// HashMap をインメモリ DB として使用する実装。
/// ドメイン層の RoomRepository trait を実装します（依存性の逆転）。
#[derive(Default)]
pub struct InMemoryRoomRepository {
    /// room_key → Room
    rooms: Arc<Mutex<HashMap<RoomKey, Room>>>,
}

impl InMemoryRoomRepository {
    /// 新しい空の InMemoryRoomRepository を作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 保存されている Room の数
    #[cfg(test)]
    pub(crate) async fn count_rooms(&self) -> usize {
        self.rooms.lock().await.len()
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn create_room(&self, room: Room) -> Result<(), RepositoryError> {
        let mut rooms = self.rooms.lock().await;
        match rooms.entry(room.key.clone()) {
            Entry::Occupied(entry) => Err(RepositoryError::DuplicateRoomKey(
                entry.key().as_str().to_string(),
            )),
            Entry::Vacant(entry) => {
                entry.insert(room);
                Ok(())
            }
        }
    }

    async fn exists(&self, key: &RoomKey) -> Result<bool, RepositoryError> {
        let rooms = self.rooms.lock().await;
        Ok(rooms.contains_key(key))
    }

    async fn get_messages(&self, key: &RoomKey) -> Result<Vec<ChatMessage>, RepositoryError> {
        let rooms = self.rooms.lock().await;
        rooms
            .get(key)
            .map(|room| room.messages.clone())
            .ok_or_else(|| RepositoryError::RoomNotFound(key.as_str().to_string()))
    }

    async fn append_message(
        &self,
        key: &RoomKey,
        message: ChatMessage,
    ) -> Result<(), RepositoryError> {
        let mut rooms = self.rooms.lock().await;
        let room = rooms
            .get_mut(key)
            .ok_or_else(|| RepositoryError::RoomNotFound(key.as_str().to_string()))?;
        room.add_message(message);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MessageContent, RoomKeyFactory, Username};

    // ========================================
    // テスト作業記録
    // ========================================
    // 【何をテストするか】
    // - InMemoryRoomRepository の基本的な操作（作成・存在確認・取得・追加）
    // - 存在しない Room に対する操作がエラーになり、副作用を持たないこと
    //
    // 【なぜこのテストが必要か】
    // - Repository は UseCase から呼ばれるデータアクセス層の中核
    // - SQLite 実装と同じ振る舞いをすることを保証する必要がある
    //
    // 【どのようなシナリオをテストするか】
    // 1. Room 作成と存在確認
    // 2. 重複キーでの作成（エラーケース）
    // 3. メッセージ追加と追加順での取得
    // 4. 存在しない Room へのメッセージ追加（エラーケース）
    // ========================================

    fn message(username: &str, content: &str) -> ChatMessage {
        ChatMessage::new(
            Username::new(username.to_string()).unwrap(),
            MessageContent::new(content.to_string()).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_create_room_success() {
        // テスト項目: 作成した Room が存在し、メッセージは空
        // given (前提条件):
        let repo = InMemoryRoomRepository::new();
        let key = RoomKeyFactory::generate().unwrap();

        // when (操作):
        let result = repo.create_room(Room::new(key.clone())).await;

        // then (期待する結果):
        assert!(result.is_ok());
        assert!(repo.exists(&key).await.unwrap());
        assert!(repo.get_messages(&key).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_room_duplicate_key_fails() {
        // テスト項目: 同じキーで 2 回作成するとエラーになり、既存の Room は保持される
        // given (前提条件):
        let repo = InMemoryRoomRepository::new();
        let key = RoomKey::new("same-key".to_string()).unwrap();
        repo.create_room(Room::new(key.clone())).await.unwrap();
        repo.append_message(&key, message("alice", "hi"))
            .await
            .unwrap();

        // when (操作):
        let result = repo.create_room(Room::new(key.clone())).await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(RepositoryError::DuplicateRoomKey("same-key".to_string()))
        );
        assert_eq!(repo.get_messages(&key).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_exists_unknown_key() {
        // テスト項目: 存在しないキーは false を返す
        // given (前提条件):
        let repo = InMemoryRoomRepository::new();
        let key = RoomKey::new("missing".to_string()).unwrap();

        // when (操作):
        let result = repo.exists(&key).await;

        // then (期待する結果):
        assert_eq!(result, Ok(false));
    }

    #[tokio::test]
    async fn test_append_message_keeps_order() {
        // テスト項目: 追加したメッセージが追加順で取得できる
        // given (前提条件):
        let repo = InMemoryRoomRepository::new();
        let key = RoomKeyFactory::generate().unwrap();
        repo.create_room(Room::new(key.clone())).await.unwrap();

        // when (操作):
        repo.append_message(&key, message("alice", "one"))
            .await
            .unwrap();
        repo.append_message(&key, message("bob", "two"))
            .await
            .unwrap();

        // then (期待する結果):
        let messages = repo.get_messages(&key).await.unwrap();
        assert_eq!(messages, vec![message("alice", "one"), message("bob", "two")]);
    }

    #[tokio::test]
    async fn test_append_message_unknown_room() {
        // テスト項目: 存在しない Room への追加はエラーになり、Room は作成されない
        // given (前提条件):
        let repo = InMemoryRoomRepository::new();
        let key = RoomKey::new("missing".to_string()).unwrap();

        // when (操作):
        let result = repo.append_message(&key, message("alice", "hi")).await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(RepositoryError::RoomNotFound("missing".to_string()))
        );
        assert_eq!(repo.count_rooms().await, 0);
    }

    #[tokio::test]
    async fn test_get_messages_unknown_room() {
        // テスト項目: 存在しない Room のメッセージ取得はエラーになる
        // given (前提条件):
        let repo = InMemoryRoomRepository::new();
        let key = RoomKey::new("missing".to_string()).unwrap();

        // when (操作):
        let result = repo.get_messages(&key).await;

        // then (期待する結果):
        assert!(matches!(result, Err(RepositoryError::RoomNotFound(_))));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_appends_are_all_stored() {
        // テスト項目: 同じ Room への同時追加がすべて保存され、失われない
        // given (前提条件):
        let repo = Arc::new(InMemoryRoomRepository::new());
        let key = RoomKeyFactory::generate().unwrap();
        repo.create_room(Room::new(key.clone())).await.unwrap();
        let writers = 50;

        // when (操作):
        let handles: Vec<_> = (0..writers)
            .map(|i| {
                let repo = repo.clone();
                let key = key.clone();
                tokio::spawn(async move {
                    repo.append_message(&key, message("alice", &format!("msg-{}", i)))
                        .await
                })
            })
            .collect();
        for handle in handles {
            assert!(handle.await.unwrap().is_ok());
        }

        // then (期待する結果):
        let messages = repo.get_messages(&key).await.unwrap();
        assert_eq!(messages.len(), writers);
        for i in 0..writers {
            assert!(messages.contains(&message("alice", &format!("msg-{}", i))));
        }
    }
}
