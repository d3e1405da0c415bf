//! SQLite Room Repository 実装
//!
//! ドメイン層が定義する RoomRepository trait を sqlx (SQLite) で実装します。
//!
//! ```text
//! rooms    (id, room_key UNIQUE)
//! messages (id, room_id → rooms.id, username, msg)
//! ```
//!
//! メッセージの順序は `messages.id` の昇順です。
//! 内部 ID は Repository の外には出しません。

use std::{str::FromStr, time::Duration};

use async_trait::async_trait;
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions},
};

use crate::domain::{
    ChatMessage, MessageContent, RepositoryError, Room, RoomKey, RoomRepository, Username,
};

const CREATE_ROOMS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS rooms (
    id       INTEGER PRIMARY KEY AUTOINCREMENT,
    room_key TEXT    NOT NULL UNIQUE
)
"#;

const CREATE_MESSAGES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS messages (
    id       INTEGER PRIMARY KEY AUTOINCREMENT,
    room_id  INTEGER NOT NULL REFERENCES rooms(id),
    username TEXT    NOT NULL,
    msg      TEXT    NOT NULL
)
"#;

const CREATE_MESSAGES_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_messages_room_id ON messages (room_id, id)";

/// SQLite Room Repository 実装
pub struct SqliteRoomRepository {
    pool: SqlitePool,
}

impl SqliteRoomRepository {
    /// データベース URL に接続し、スキーマを作成する
    ///
    /// ファイルが存在しない場合は作成します。
    pub async fn connect(
        database_url: &str,
        max_connections: u32,
        acquire_timeout: Duration,
    ) -> Result<Self, RepositoryError> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(storage_error)?
            .create_if_missing(true)
            .foreign_keys(true)
            // Concurrent writers from the pool wait for the write lock instead of failing
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(acquire_timeout);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(acquire_timeout)
            .connect_with(options)
            .await
            .map_err(storage_error)?;

        Self::from_pool(pool).await
    }

    /// 既存のプールから作成し、スキーマを作成する
    pub async fn from_pool(pool: SqlitePool) -> Result<Self, RepositoryError> {
        for statement in [
            CREATE_ROOMS_TABLE,
            CREATE_MESSAGES_TABLE,
            CREATE_MESSAGES_INDEX,
        ] {
            sqlx::query(statement)
                .execute(&pool)
                .await
                .map_err(storage_error)?;
        }
        Ok(Self { pool })
    }
}

// Reported at error level where the failure surfaces (HTTP response / startup)
fn storage_error(err: sqlx::Error) -> RepositoryError {
    tracing::debug!("SQLite error: {}", err);
    RepositoryError::Storage(err.to_string())
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}

fn to_chat_message(username: String, msg: String) -> Result<ChatMessage, RepositoryError> {
    // 保存時に検証済みのため、ここで失敗するのはデータ破損時のみ
    let username = Username::new(username)
        .map_err(|e| RepositoryError::Storage(format!("corrupted message row: {e}")))?;
    let content = MessageContent::new(msg)
        .map_err(|e| RepositoryError::Storage(format!("corrupted message row: {e}")))?;
    Ok(ChatMessage::new(username, content))
}

#[async_trait]
impl RoomRepository for SqliteRoomRepository {
    async fn create_room(&self, room: Room) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(storage_error)?;

        let inserted = sqlx::query("INSERT INTO rooms (room_key) VALUES (?)")
            .bind(room.key.as_str())
            .execute(&mut *tx)
            .await;
        let room_id = match inserted {
            Ok(result) => result.last_insert_rowid(),
            Err(err) if is_unique_violation(&err) => {
                return Err(RepositoryError::DuplicateRoomKey(room.key.into_string()));
            }
            Err(err) => return Err(storage_error(err)),
        };

        for message in &room.messages {
            sqlx::query("INSERT INTO messages (room_id, username, msg) VALUES (?, ?, ?)")
                .bind(room_id)
                .bind(message.username.as_str())
                .bind(message.content.as_str())
                .execute(&mut *tx)
                .await
                .map_err(storage_error)?;
        }

        tx.commit().await.map_err(storage_error)?;
        Ok(())
    }

    async fn exists(&self, key: &RoomKey) -> Result<bool, RepositoryError> {
        let room_id: Option<i64> = sqlx::query_scalar("SELECT id FROM rooms WHERE room_key = ?")
            .bind(key.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error)?;
        Ok(room_id.is_some())
    }

    async fn get_messages(&self, key: &RoomKey) -> Result<Vec<ChatMessage>, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(storage_error)?;

        let room_id: i64 = sqlx::query_scalar("SELECT id FROM rooms WHERE room_key = ?")
            .bind(key.as_str())
            .fetch_optional(&mut *tx)
            .await
            .map_err(storage_error)?
            .ok_or_else(|| RepositoryError::RoomNotFound(key.as_str().to_string()))?;

        let rows: Vec<(String, String)> =
            sqlx::query_as("SELECT username, msg FROM messages WHERE room_id = ? ORDER BY id")
                .bind(room_id)
                .fetch_all(&mut *tx)
                .await
                .map_err(storage_error)?;

        tx.commit().await.map_err(storage_error)?;

        rows.into_iter()
            .map(|(username, msg)| to_chat_message(username, msg))
            .collect()
    }

    async fn append_message(
        &self,
        key: &RoomKey,
        message: ChatMessage,
    ) -> Result<(), RepositoryError> {
        // Room の照合と追加を 1 文で行う
        let result = sqlx::query(
            r#"
            INSERT INTO messages (room_id, username, msg)
            SELECT id, ?, ? FROM rooms WHERE room_key = ?
            "#,
        )
        .bind(message.username.as_str())
        .bind(message.content.as_str())
        .bind(key.as_str())
        .execute(&self.pool)
        .await
        .map_err(storage_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::RoomNotFound(key.as_str().to_string()));
        }
        Ok(())
    }
}
