use std::fmt;

use serde::Serialize;

/// Identifier of a folded chat message
///
/// Lowercase hex of the capture timestamp in milliseconds, with a leading `-`
/// for captures before the epoch rather than two's complement. Monotonic within a
/// process but not unique across processes; ids only need to be unique inside
/// one session's in-memory log.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ChatMessageId(String);

impl ChatMessageId {
    pub fn from_timestamp(timestamp_ms: i64) -> Self {
        if timestamp_ms < 0 {
            Self(format!("-{:x}", timestamp_ms.unsigned_abs()))
        } else {
            Self(format!("{:x}", timestamp_ms))
        }
    }

    /// Id of the part at `index` within this message.
    ///
    /// Unique within the message even if two messages share a timestamp.
    pub fn part_id(&self, index: usize) -> String {
        format!("{}_{}", self.0, index)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChatMessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ChatMessageId> for String {
    fn from(value: ChatMessageId) -> Self {
        value.0
    }
}
