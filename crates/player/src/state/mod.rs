//! Client-side state containers

pub mod chat_store;

pub use chat_store::{ChatStore, ConnectionState, ReceiveError};
