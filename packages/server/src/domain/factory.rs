//! Domain factories for creating domain entities and value objects.

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::Rng;

use super::{RoomKey, error::ValueObjectError};

/// Number of random bytes drawn for each room key
pub const ROOM_KEY_ENTROPY_BYTES: usize = 8;

/// Factory for generating RoomKey instances.
///
/// This factory encapsulates the logic for generating new room keys,
/// separating the generation concern from the validation logic in RoomKey.
pub struct RoomKeyFactory;

impl RoomKeyFactory {
    /// Generate a new RoomKey from the thread-local CSPRNG.
    ///
    /// The key is `ROOM_KEY_ENTROPY_BYTES` random bytes encoded as URL-safe
    /// base64 without padding (11 characters of `[A-Za-z0-9_-]`).
    ///
    /// # Errors
    ///
    /// This method should not fail in practice, but returns Result for consistency
    /// with the domain error handling pattern.
    pub fn generate() -> Result<RoomKey, ValueObjectError> {
        let mut bytes = [0u8; ROOM_KEY_ENTROPY_BYTES];
        rand::rng().fill(&mut bytes);
        RoomKey::new(URL_SAFE_NO_PAD.encode(bytes))
    }
}
