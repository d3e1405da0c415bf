//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層から呼び出され、Domain 層を操作します。

pub mod create_room;
pub mod error;
pub mod join_room;
pub mod list_messages;
pub mod post_message;

pub use create_room::CreateRoomUseCase;
pub use error::{CreateRoomError, JoinRoomError, ListMessagesError, PostMessageError};
pub use join_room::JoinRoomUseCase;
pub use list_messages::ListMessagesUseCase;
pub use post_message::PostMessageUseCase;
