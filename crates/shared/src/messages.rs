//! Server message types received from the session client
//!
//! The session server frames every transmission as a JSON array of commands,
//! each tagged by `cmd`. Only the commands the chat feed consumes are modelled;
//! everything else lands in `Unknown`.
//!
//! `PrintJSON` carries chat events as an ordered list of parts. Parts arrive
//! already resolved by the session client: player and item references carry
//! the entity, not a numeric id.
//!
//! ## Versioning Policy
//!
//! - New variants can be added at the end (forward compatible)
//! - Unknown commands deserialize to `Unknown`
//! - Unknown part types are preserved as strings so the consumer can reject
//!   them by name

use serde::{Deserialize, Serialize};

// =============================================================================
// Server Messages (Session → Player)
// =============================================================================

/// Messages from the session server to the chat client
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "cmd")]
pub enum ServerMessage {
    /// A chat or event line to display
    #[serde(rename = "PrintJSON")]
    PrintJson {
        data: Vec<JsonMessagePart>,
        /// Event category (e.g. "ItemSend", "Chat", "Join")
        #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
        print_type: Option<String>,
    },

    /// Login accepted
    Connected {
        #[serde(default)]
        team: u32,
        #[serde(default)]
        slot: u32,
    },

    /// Login rejected
    ConnectionRefused {
        #[serde(default)]
        errors: Vec<String>,
    },

    /// Room metadata sent before login
    RoomInfo {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        seed_name: Option<String>,
    },

    /// Unknown command for forward compatibility
    ///
    /// When deserializing an unknown command, this variant is used instead of
    /// failing the whole frame.
    #[serde(other)]
    Unknown,
}

/// One part of a `PrintJSON` event
///
/// Which payload fields are present depends on `kind`. A missing `type` means
/// plain text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonMessagePart {
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player: Option<PlayerData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<ItemData>,
}

impl JsonMessagePart {
    /// Part type, defaulting to `text` when absent
    pub fn kind(&self) -> &str {
        self.kind.as_deref().unwrap_or("text")
    }
}

/// Resolved player reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerData {
    pub slot: u32,
    pub name: String,
    /// Current display alias; the slot name when the player never set one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

/// Resolved item reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemData {
    pub name: String,
    /// Classification bitfield: 0b001 progression, 0b010 useful, 0b100 trap
    #[serde(default)]
    pub flags: u8,
}

/// Failure to decode a frame from the session client
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    #[error("Malformed frame: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Frame {
    Batch(Vec<ServerMessage>),
    Single(ServerMessage),
}

/// Decode one frame into its commands.
///
/// Accepts the server's array framing and, for convenience, a bare command
/// object.
pub fn decode_frame(raw: &str) -> Result<Vec<ServerMessage>, FrameError> {
    let frame: Frame = serde_json::from_str(raw)?;
    Ok(match frame {
        Frame::Batch(messages) => messages,
        Frame::Single(message) => vec![message],
    })
}

#[cfg(test)]
mod serde_tests {
    use super::*;

    #[test]
    fn print_json_parses_parts_in_order() {
        let raw = r#"[{"cmd":"PrintJSON","type":"ItemSend","data":[
            {"text":"Player "},
            {"type":"player","player":{"slot":1,"name":"Slot1","alias":"Alice"}},
            {"type":"text","text":" found "},
            {"type":"item","item":{"name":"Sword","flags":1}},
            {"type":"location","text":"Cave"}
        ]}]"#;

        let messages = decode_frame(raw).expect("decode");
        assert_eq!(messages.len(), 1);
        let ServerMessage::PrintJson { data, print_type } = &messages[0] else {
            panic!("expected PrintJSON, got {:?}", messages[0]);
        };
        assert_eq!(print_type.as_deref(), Some("ItemSend"));
        assert_eq!(data.len(), 5);
        assert_eq!(data[0].kind(), "text");
        assert_eq!(data[0].text.as_deref(), Some("Player "));
        assert_eq!(data[1].kind(), "player");
        assert_eq!(
            data[1].player.as_ref().and_then(|p| p.alias.as_deref()),
            Some("Alice")
        );
        assert_eq!(data[3].item.as_ref().map(|i| i.flags), Some(1));
        assert_eq!(data[4].kind(), "location");
    }

    #[test]
    fn unknown_part_type_is_preserved() {
        let raw = r#"{"cmd":"PrintJSON","data":[{"type":"entrance_name","text":"Door"}]}"#;

        let messages = decode_frame(raw).expect("decode");
        let ServerMessage::PrintJson { data, .. } = &messages[0] else {
            panic!("expected PrintJSON");
        };
        assert_eq!(data[0].kind(), "entrance_name");
    }

    #[test]
    fn unknown_command_deserializes_to_unknown() {
        let raw = r#"[{"cmd":"Bounced","data":{}},{"cmd":"RoomInfo","seed_name":"abc"}]"#;

        let messages = decode_frame(raw).expect("decode");
        assert!(matches!(messages[0], ServerMessage::Unknown));
        assert!(matches!(
            &messages[1],
            ServerMessage::RoomInfo { seed_name: Some(seed) } if seed == "abc"
        ));
    }

    #[test]
    fn connection_refused_carries_errors() {
        let raw = r#"[{"cmd":"ConnectionRefused","errors":["InvalidSlot"]}]"#;

        let messages = decode_frame(raw).expect("decode");
        assert!(matches!(
            &messages[0],
            ServerMessage::ConnectionRefused { errors } if errors == &vec!["InvalidSlot".to_string()]
        ));
    }

    #[test]
    fn item_flags_default_to_zero() {
        let item: ItemData = serde_json::from_str(r#"{"name":"Rupee"}"#).expect("deserialize");
        assert_eq!(item.flags, 0);
    }

    #[test]
    fn malformed_frame_is_an_error() {
        assert!(matches!(
            decode_frame("not json"),
            Err(FrameError::Malformed(_))
        ));
    }
}
