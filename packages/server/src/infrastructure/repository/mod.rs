//! Repository パターンの実装
//!
//! ドメイン層が定義する Repository trait の具体的な実装を提供します。
//! UseCase 層は trait（ドメイン層）に依存し、この実装に直接依存しません（依存性の逆転）。

pub mod inmemory;
pub mod sqlite;

use std::{sync::Arc, time::Duration};

pub use inmemory::InMemoryRoomRepository;
pub use sqlite::SqliteRoomRepository;

use crate::domain::{RepositoryError, RoomRepository};

/// インメモリ実装を選択するデータベース URL のスキーム
pub const MEMORY_URL_SCHEME: &str = "memory:";

/// データベース URL に応じて Repository 実装を選択して接続する
///
/// * `memory:` で始まる URL → `InMemoryRoomRepository`（プロセス終了で消える）
/// * それ以外 → `SqliteRoomRepository`
pub async fn connect(
    database_url: &str,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<Arc<dyn RoomRepository>, RepositoryError> {
    if database_url.starts_with(MEMORY_URL_SCHEME) {
        tracing::warn!("Using in-memory room storage; data is lost on shutdown");
        return Ok(Arc::new(InMemoryRoomRepository::new()));
    }

    let repository =
        SqliteRoomRepository::connect(database_url, max_connections, acquire_timeout).await?;
    tracing::info!("Connected to SQLite room storage");
    Ok(Arc::new(repository))
}
