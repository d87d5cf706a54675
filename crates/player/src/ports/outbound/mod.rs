//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! so the chat store can be driven without a live session or a real clock.

pub mod clock_port;
pub mod session_client_port;

pub use clock_port::ClockPort;
pub use session_client_port::{ConnectOptions, SessionClientPort, SessionError};

#[cfg(test)]
pub use clock_port::MockClockPort;
#[cfg(test)]
pub use session_client_port::MockSessionClientPort;
