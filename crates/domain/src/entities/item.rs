//! Item entity - A reward sent between players of a multiworld session
//!
//! The session server describes an item's importance with a small bitfield.
//! The client exposes it as four booleans, and the chat view styles an item
//! reference by the single [`ItemTier`] those booleans resolve to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChatError;

/// Network flag bit: the item unlocks further checks
pub const FLAG_PROGRESSION: u8 = 0b001;
/// Network flag bit: the item is helpful but not required
pub const FLAG_USEFUL: u8 = 0b010;
/// Network flag bit: the item is a trap
pub const FLAG_TRAP: u8 = 0b100;

/// An item referenced from a chat message
///
/// Plain data: the flags are independent and not asserted mutually exclusive,
/// so any combination is representable. [`Item::tier`] decides how overlaps
/// are displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub filler: bool,
    pub useful: bool,
    pub progression: bool,
    pub trap: bool,
}

impl Item {
    /// An item with no classification flags set
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            filler: false,
            useful: false,
            progression: false,
            trap: false,
        }
    }

    /// Build an item from the server's flag bitfield.
    ///
    /// `filler` is not a bit of its own: an item is filler exactly when no
    /// other bit is set.
    pub fn from_network_flags(name: impl Into<String>, flags: u8) -> Self {
        Self {
            name: name.into(),
            filler: flags == 0,
            useful: flags & FLAG_USEFUL != 0,
            progression: flags & FLAG_PROGRESSION != 0,
            trap: flags & FLAG_TRAP != 0,
        }
    }

    pub fn with_filler(mut self, filler: bool) -> Self {
        self.filler = filler;
        self
    }

    pub fn with_useful(mut self, useful: bool) -> Self {
        self.useful = useful;
        self
    }

    pub fn with_progression(mut self, progression: bool) -> Self {
        self.progression = progression;
        self
    }

    pub fn with_trap(mut self, trap: bool) -> Self {
        self.trap = trap;
        self
    }

    /// Display tier of this item. See [`classify`].
    pub fn tier(&self) -> ItemTier {
        classify(self)
    }
}

/// Display tier of an item, used as a styling key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ItemTier {
    Filler,
    Useful,
    Progression,
    Trap,
    #[default]
    Default,
}

impl ItemTier {
    pub fn all() -> &'static [ItemTier] {
        &[
            ItemTier::Filler,
            ItemTier::Useful,
            ItemTier::Progression,
            ItemTier::Trap,
            ItemTier::Default,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemTier::Filler => "filler",
            ItemTier::Useful => "useful",
            ItemTier::Progression => "progression",
            ItemTier::Trap => "trap",
            ItemTier::Default => "default",
        }
    }
}

impl fmt::Display for ItemTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemTier {
    type Err = ChatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "filler" => Ok(ItemTier::Filler),
            "useful" => Ok(ItemTier::Useful),
            "progression" => Ok(ItemTier::Progression),
            "trap" => Ok(ItemTier::Trap),
            "default" => Ok(ItemTier::Default),
            _ => Err(ChatError::parse(format!("Unknown item tier: {}", s))),
        }
    }
}

/// Resolve an item's flags to a single display tier.
///
/// First match wins: filler, useful, progression, trap, then default.
/// The order is a styling contract; do not reorder without checking what the
/// server guarantees about overlapping flags.
pub fn classify(item: &Item) -> ItemTier {
    if item.filler {
        ItemTier::Filler
    } else if item.useful {
        ItemTier::Useful
    } else if item.progression {
        ItemTier::Progression
    } else if item.trap {
        ItemTier::Trap
    } else {
        ItemTier::Default
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_is_default() {
        assert_eq!(classify(&Item::new("Nothing")), ItemTier::Default);
    }

    #[test]
    fn single_flags_map_to_their_tier() {
        let base = Item::new("Thing");
        assert_eq!(base.clone().with_filler(true).tier(), ItemTier::Filler);
        assert_eq!(base.clone().with_useful(true).tier(), ItemTier::Useful);
        assert_eq!(
            base.clone().with_progression(true).tier(),
            ItemTier::Progression
        );
        assert_eq!(base.with_trap(true).tier(), ItemTier::Trap);
    }

    #[test]
    fn filler_beats_useful() {
        let item = Item::new("Rupee").with_filler(true).with_useful(true);
        assert_eq!(classify(&item), ItemTier::Filler);
    }

    #[test]
    fn useful_beats_progression_and_trap() {
        let item = Item::new("Odd")
            .with_useful(true)
            .with_progression(true)
            .with_trap(true);
        assert_eq!(classify(&item), ItemTier::Useful);
    }

    #[test]
    fn progression_beats_trap() {
        let item = Item::new("Cursed Key").with_progression(true).with_trap(true);
        assert_eq!(classify(&item), ItemTier::Progression);
    }

    #[test]
    fn network_flags_zero_is_filler() {
        let item = Item::from_network_flags("Rupee", 0);
        assert!(item.filler);
        assert!(!item.useful && !item.progression && !item.trap);
        assert_eq!(item.tier(), ItemTier::Filler);
    }

    #[test]
    fn network_flags_set_matching_booleans() {
        let item = Item::from_network_flags("Hookshot", FLAG_PROGRESSION | FLAG_USEFUL);
        assert!(!item.filler);
        assert!(item.progression);
        assert!(item.useful);
        assert!(!item.trap);
        assert_eq!(item.tier(), ItemTier::Useful);

        let trap = Item::from_network_flags("Ice Trap", FLAG_TRAP);
        assert_eq!(trap.tier(), ItemTier::Trap);
    }

    #[test]
    fn tier_string_forms() {
        for tier in ItemTier::all() {
            assert_eq!(tier.as_str().parse::<ItemTier>().unwrap(), *tier);
            assert_eq!(tier.to_string(), tier.as_str());
        }
        assert_eq!("Progression".parse::<ItemTier>().unwrap(), ItemTier::Progression);
        assert!(matches!(
            "legendary".parse::<ItemTier>(),
            Err(ChatError::Parse(_))
        ));
    }

    #[test]
    fn tier_serializes_snake_case() {
        let json = serde_json::to_string(&ItemTier::Progression).unwrap();
        assert_eq!(json, "\"progression\"");
    }
}
