//! UseCase: Room 作成処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - CreateRoomUseCase::execute() メソッド
//! - ルームキーの生成と空の Room の保存
//!
//! ### なぜこのテストが必要か
//! - 作成した Room が即座に参加・投稿可能であることを保証
//! - ストレージ層の UNIQUE 制約に当たった場合でも呼び出し側からは見えないことを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：Room 作成
//! - 異常系：キー重複が続く場合、ストレージエラー
//! - エッジケース：1 回目のみキーが重複する場合（再試行で成功）

use std::sync::Arc;

use crate::domain::{RepositoryError, Room, RoomKey, RoomKeyFactory, RoomRepository};

use super::error::CreateRoomError;

/// キー重複時に再生成を試みる最大回数
pub const MAX_KEY_ATTEMPTS: usize = 3;

/// Room 作成のユースケース
pub struct CreateRoomUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
}

impl CreateRoomUseCase {
    /// 新しい CreateRoomUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// Room 作成を実行
    ///
    /// # Returns
    ///
    /// * `Ok(RoomKey)` - 作成した Room のキー
    /// * `Err(CreateRoomError)` - 作成失敗
    pub async fn execute(&self) -> Result<RoomKey, CreateRoomError> {
        let mut attempt = 1;
        loop {
            let key = RoomKeyFactory::generate()
                .map_err(|e| CreateRoomError::KeyGeneration(e.to_string()))?;

            match self.repository.create_room(Room::new(key.clone())).await {
                Ok(()) => {
                    tracing::info!("Room '{}' created", key);
                    return Ok(key);
                }
                Err(RepositoryError::DuplicateRoomKey(duplicated))
                    if attempt < MAX_KEY_ATTEMPTS =>
                {
                    tracing::warn!(
                        "Generated room key '{}' already exists (attempt {}/{}), retrying",
                        duplicated,
                        attempt,
                        MAX_KEY_ATTEMPTS
                    );
                    attempt += 1;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}
