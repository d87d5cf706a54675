//! Session Client Port - Outbound port for the multiworld session connection
//!
//! The chat store only needs to log in and out. Frames arriving afterwards are
//! handed to the store by whoever owns the connection.

use async_trait::async_trait;

/// Optional login parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectOptions {
    /// Room password; `None` when the room has none
    pub password: Option<String>,
}

impl ConnectOptions {
    /// Build options from a form field, treating an empty password as none.
    pub fn with_password(password: &str) -> Self {
        Self {
            password: if password.is_empty() {
                None
            } else {
                Some(password.to_string())
            },
        }
    }
}

/// Errors reported by the session client
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// Could not reach the server at all
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Server answered but refused the login
    #[error("Login refused: {}", .0.join(", "))]
    Refused(Vec<String>),
}

/// Session client port
///
/// Object-safe so the store can hold an `Arc<dyn SessionClientPort>`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionClientPort: Send + Sync {
    /// Log in to `address` as the player in slot `slot`
    async fn login(
        &self,
        address: &str,
        slot: &str,
        options: ConnectOptions,
    ) -> Result<(), SessionError>;

    /// Drop the connection, if any
    async fn disconnect(&self);
}
