//! Server state.

use std::sync::Arc;

use crate::domain::RoomRepository;

/// Shared application state
///
/// Built once at startup and shared read-only by every request.
pub struct AppState {
    /// Repository（データアクセス層の抽象化）
    pub repository: Arc<dyn RoomRepository>,
}

impl AppState {
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }
}
