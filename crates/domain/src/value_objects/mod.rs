//! Value objects - Immutable objects defined by their attributes

mod chat_message;
mod message_node;

pub use chat_message::{ChatMessage, ChatMessagePart, PART_CLASS_PREFIX};
pub use message_node::MessageNode;
