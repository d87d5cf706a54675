//! Session client for replaying captured frames with no server behind them.

use async_trait::async_trait;

use crate::ports::outbound::{ConnectOptions, SessionClientPort, SessionError};

/// Refuses every login; frames are fed to the store directly instead.
#[derive(Debug, Default)]
pub struct OfflineSession;

#[async_trait]
impl SessionClientPort for OfflineSession {
    async fn login(
        &self,
        address: &str,
        _slot: &str,
        _options: ConnectOptions,
    ) -> Result<(), SessionError> {
        Err(SessionError::ConnectionFailed(format!(
            "offline replay cannot reach {}",
            address
        )))
    }

    async fn disconnect(&self) {}
}
