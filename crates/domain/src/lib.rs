//! Archichat Domain - Chat message folding for a multiworld session feed
//!
//! Pure types and functions: no I/O and no clock access. The caller supplies
//! the capture time for each fold.

pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use entities::{classify, Item, ItemTier, Player, FLAG_PROGRESSION, FLAG_TRAP, FLAG_USEFUL};
pub use error::ChatError;
pub use ids::ChatMessageId;
pub use value_objects::{ChatMessage, ChatMessagePart, MessageNode, PART_CLASS_PREFIX};
