//! Archichat Player crate.
//!
//! Chat store, session and clock ports, and the adapters that feed the store
//! from the session client's message stream.

pub mod config;
pub mod infrastructure;
pub mod ports;
pub mod replay;
pub mod state;

pub use config::PlayerConfig;
pub use replay::replay;
pub use state::{ChatStore, ConnectionState, ReceiveError};
