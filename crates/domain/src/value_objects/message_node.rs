//! Message nodes - The semantic fragments a chat event is made of

use crate::entities::{Item, Player};

/// One fragment of a chat event, in the order the server sent it
///
/// The known kinds are matched exhaustively by the fold. `Unknown` keeps the
/// raw kind of anything the session client forwarded that this crate does not
/// model, so the fold can reject it by name instead of dropping it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageNode {
    Text { text: String },
    Color { text: String, color: String },
    Player { player: Player },
    Item { item: Item },
    Location { text: String },
    Unknown { kind: String },
}

impl MessageNode {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn color(text: impl Into<String>, color: impl Into<String>) -> Self {
        Self::Color {
            text: text.into(),
            color: color.into(),
        }
    }

    pub fn player(player: Player) -> Self {
        Self::Player { player }
    }

    pub fn item(item: Item) -> Self {
        Self::Item { item }
    }

    pub fn location(text: impl Into<String>) -> Self {
        Self::Location { text: text.into() }
    }

    pub fn unknown(kind: impl Into<String>) -> Self {
        Self::Unknown { kind: kind.into() }
    }

    /// Wire name of this node's kind
    pub fn kind(&self) -> &str {
        match self {
            Self::Text { .. } => "text",
            Self::Color { .. } => "color",
            Self::Player { .. } => "player",
            Self::Item { .. } => "item",
            Self::Location { .. } => "location",
            Self::Unknown { kind } => kind,
        }
    }
}
