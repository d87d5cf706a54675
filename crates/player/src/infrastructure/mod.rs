//! Infrastructure adapters for the player client

pub mod clock;
pub mod message_translator;
pub mod offline_session;
