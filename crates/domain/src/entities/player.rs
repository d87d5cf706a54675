//! Player entity - A slot participating in the session

use serde::{Deserialize, Serialize};

/// A player referenced from a chat message
///
/// `name` is the slot name fixed at generation time; `alias` is what the
/// player currently calls themselves and is what chat shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub slot: u32,
    pub name: String,
    pub alias: String,
}

impl Player {
    pub fn new(slot: u32, name: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            slot,
            name: name.into(),
            alias: alias.into(),
        }
    }

    /// Player whose alias is still their slot name
    pub fn unaliased(slot: u32, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            slot,
            alias: name.clone(),
            name,
        }
    }
}
