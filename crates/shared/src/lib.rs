//! Archichat Protocol - Wire types for the session message stream
//!
//! Pure data types and serialization. Conversion into domain types happens in
//! the player crate's message translator.
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde, serde_json, and thiserror
//! 2. **No business logic** - Pure data types and serialization
//! 3. **Forward compatible** - Unknown commands deserialize to `Unknown`

pub mod messages;

pub use messages::{
    decode_frame, FrameError, ItemData, JsonMessagePart, PlayerData, ServerMessage,
};
