//! Chat messages - Folded, display-ready records
//!
//! A chat message is built once from an ordered run of [`MessageNode`]s and
//! never changes afterwards. Its id and each part's id are reconciliation keys
//! for the view: they are derived from the capture time and the part's
//! position, so re-rendering the same message yields the same keys.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::entities::classify;
use crate::error::ChatError;
use crate::ids::ChatMessageId;
use crate::value_objects::MessageNode;

/// Style class prefix shared by every part
pub const PART_CLASS_PREFIX: &str = "chat-message-part";

/// One styled, identified segment of a chat line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessagePart {
    id: String,
    class: String,
    text: String,
}

impl ChatMessagePart {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Semantic style tag, e.g. `chat-message-part-item-progression`
    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A full chat line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    id: ChatMessageId,
    /// Capture time, milliseconds since the Unix epoch
    timestamp: i64,
    parts: Vec<ChatMessagePart>,
}

impl ChatMessage {
    /// Fold an ordered run of nodes into one message captured at `captured_at`.
    ///
    /// Part order follows node order. An empty run gives a message with no
    /// parts. Any [`MessageNode::Unknown`] aborts the whole fold; no partial
    /// message is produced.
    pub fn fold(nodes: &[MessageNode], captured_at: DateTime<Utc>) -> Result<Self, ChatError> {
        let timestamp = captured_at.timestamp_millis();
        let id = ChatMessageId::from_timestamp(timestamp);

        let parts = nodes
            .iter()
            .enumerate()
            .map(|(index, node)| {
                let (class, text) = style_node(node)?;
                Ok(ChatMessagePart {
                    id: id.part_id(index),
                    class,
                    text,
                })
            })
            .collect::<Result<Vec<_>, ChatError>>()?;

        Ok(Self {
            id,
            timestamp,
            parts,
        })
    }

    pub fn id(&self) -> &ChatMessageId {
        &self.id
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn parts(&self) -> &[ChatMessagePart] {
        &self.parts
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// The sentence this message reconstructs, without styling
    pub fn plain_text(&self) -> String {
        self.parts.iter().map(|part| part.text.as_str()).collect()
    }
}

fn style_node(node: &MessageNode) -> Result<(String, String), ChatError> {
    let styled = match node {
        MessageNode::Color { text, color } => {
            (format!("{PART_CLASS_PREFIX}-color-{color}"), text.clone())
        }
        MessageNode::Location { text } => (format!("{PART_CLASS_PREFIX}-location"), text.clone()),
        MessageNode::Item { item } => (
            format!("{PART_CLASS_PREFIX}-item-{}", classify(item)),
            item.name.clone(),
        ),
        MessageNode::Player { player } => {
            (format!("{PART_CLASS_PREFIX}-player"), player.alias.clone())
        }
        MessageNode::Text { text } => (format!("{PART_CLASS_PREFIX}-text"), text.clone()),
        MessageNode::Unknown { kind } => return Err(ChatError::unknown_fragment_kind(kind.clone())),
    };
    Ok(styled)
}
