//! Domain entities - Things a chat message can refer to

mod item;
mod player;

pub use item::{classify, Item, ItemTier, FLAG_PROGRESSION, FLAG_TRAP, FLAG_USEFUL};
pub use player::Player;
