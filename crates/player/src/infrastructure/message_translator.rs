//! Translates PrintJSON parts from the protocol into domain message nodes
//!
//! Kinds the domain knows are checked for the payload they need. Every other
//! kind is passed through as `MessageNode::Unknown` so the fold rejects the
//! message by name rather than this layer silently dropping the part.

use archichat_domain::{Item, MessageNode, Player};
use archichat_shared::{JsonMessagePart, PlayerData};

/// A known part kind arrived without the payload it requires
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslateError {
    #[error("Message part of type '{kind}' is missing field '{field}'")]
    MissingField {
        kind: &'static str,
        field: &'static str,
    },
}

impl TranslateError {
    fn missing(kind: &'static str, field: &'static str) -> Self {
        Self::MissingField { kind, field }
    }
}

/// Translate a single part
pub fn translate_part(part: &JsonMessagePart) -> Result<MessageNode, TranslateError> {
    let node = match part.kind() {
        "text" => MessageNode::text(require_text(part, "text")?),
        "color" => {
            let text = require_text(part, "color")?;
            let color = part
                .color
                .clone()
                .ok_or(TranslateError::missing("color", "color"))?;
            MessageNode::color(text, color)
        }
        "location" => MessageNode::location(require_text(part, "location")?),
        "player" => {
            let player = part
                .player
                .as_ref()
                .ok_or(TranslateError::missing("player", "player"))?;
            MessageNode::player(translate_player(player))
        }
        "item" => {
            let item = part
                .item
                .as_ref()
                .ok_or(TranslateError::missing("item", "item"))?;
            MessageNode::item(Item::from_network_flags(item.name.clone(), item.flags))
        }
        other => MessageNode::unknown(other),
    };
    Ok(node)
}

/// Translate the parts of one PrintJSON event, preserving order
pub fn translate_parts(parts: &[JsonMessagePart]) -> Result<Vec<MessageNode>, TranslateError> {
    parts.iter().map(translate_part).collect()
}

fn require_text(part: &JsonMessagePart, kind: &'static str) -> Result<String, TranslateError> {
    part.text
        .clone()
        .ok_or(TranslateError::missing(kind, "text"))
}

fn translate_player(player: &PlayerData) -> Player {
    match &player.alias {
        Some(alias) => Player::new(player.slot, player.name.clone(), alias.clone()),
        None => Player::unaliased(player.slot, player.name.clone()),
    }
}
