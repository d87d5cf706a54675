//! Chat store - connection status plus the ordered chat log
//!
//! Owns every folded message once it is appended. Messages are never changed
//! after they enter the log; the only removal is eviction of the oldest
//! entries once the history limit is exceeded.

use std::collections::VecDeque;
use std::sync::Arc;

use archichat_domain::{ChatError, ChatMessage, MessageNode};
use archichat_shared::ServerMessage;

use crate::infrastructure::message_translator::{translate_parts, TranslateError};
use crate::ports::outbound::{ClockPort, ConnectOptions, SessionClientPort, SessionError};

/// Connection state for the chat session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    /// Not connected to the server
    #[default]
    Disconnected,
    /// Login in progress
    Connecting,
    /// Logged in
    Connected,
    /// Last login attempt failed
    Failed,
}

/// Why an incoming event did not make it into the log
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReceiveError {
    #[error(transparent)]
    Translate(#[from] TranslateError),

    #[error(transparent)]
    Chat(#[from] ChatError),
}

pub struct ChatStore {
    session: Arc<dyn SessionClientPort>,
    clock: Arc<dyn ClockPort>,
    status: ConnectionState,
    error: Option<String>,
    history: VecDeque<ChatMessage>,
    history_limit: usize,
}

impl ChatStore {
    /// `history_limit` of 0 keeps every message.
    pub fn new(
        session: Arc<dyn SessionClientPort>,
        clock: Arc<dyn ClockPort>,
        history_limit: usize,
    ) -> Self {
        Self {
            session,
            clock,
            status: ConnectionState::Disconnected,
            error: None,
            history: VecDeque::new(),
            history_limit,
        }
    }

    pub fn status(&self) -> ConnectionState {
        self.status
    }

    pub fn is_connected(&self) -> bool {
        self.status == ConnectionState::Connected
    }

    /// Last error surfaced to the user, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Chat log, oldest first
    pub fn history(&self) -> impl Iterator<Item = &ChatMessage> {
        self.history.iter()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn latest(&self) -> Option<&ChatMessage> {
        self.history.back()
    }

    /// Log in to the session server. An empty password is sent as none.
    pub async fn connect(
        &mut self,
        address: &str,
        slot: &str,
        password: &str,
    ) -> Result<(), SessionError> {
        self.status = ConnectionState::Connecting;
        tracing::info!(address, slot, "Connecting to session");

        match self
            .session
            .login(address, slot, ConnectOptions::with_password(password))
            .await
        {
            Ok(()) => {
                self.status = ConnectionState::Connected;
                self.error = None;
                tracing::info!(address, slot, "Connected to session");
                Ok(())
            }
            Err(e) => {
                self.status = ConnectionState::Failed;
                self.error = Some(e.to_string());
                tracing::warn!(address, slot, error = %e, "Session login failed");
                Err(e)
            }
        }
    }

    pub async fn disconnect(&mut self) {
        self.session.disconnect().await;
        self.status = ConnectionState::Disconnected;
        tracing::info!("Disconnected from session");
    }

    /// Fold one chat event and append it to the log.
    ///
    /// On failure the log is left untouched and the error is recorded for
    /// display before being returned.
    pub fn receive(&mut self, nodes: &[MessageNode]) -> Result<ChatMessage, ChatError> {
        let message = match ChatMessage::fold(nodes, self.clock.now()) {
            Ok(message) => message,
            Err(e) => {
                let kinds: Vec<&str> = nodes.iter().map(MessageNode::kind).collect();
                tracing::warn!(
                    error = %e,
                    kind = e.unknown_kind().unwrap_or_default(),
                    node_kinds = ?kinds,
                    "Dropping chat event"
                );
                self.error = Some(e.to_string());
                return Err(e);
            }
        };

        tracing::debug!(
            message_id = %message.id(),
            parts = message.parts().len(),
            text = %message.plain_text(),
            "Chat message received"
        );
        self.append(message.clone());
        Ok(message)
    }

    /// Route a message from the session server.
    ///
    /// Returns the folded message for `PrintJSON`, `None` for everything else.
    pub fn handle_server_message(
        &mut self,
        message: ServerMessage,
    ) -> Result<Option<ChatMessage>, ReceiveError> {
        match message {
            ServerMessage::PrintJson { data, print_type } => {
                tracing::trace!(print_type = ?print_type, parts = data.len(), "PrintJSON");
                let nodes = translate_parts(&data).map_err(|e| {
                    tracing::warn!(error = %e, "Dropping malformed chat event");
                    self.error = Some(e.to_string());
                    e
                })?;
                Ok(Some(self.receive(&nodes)?))
            }
            ServerMessage::ConnectionRefused { errors } => {
                let e = SessionError::Refused(errors);
                tracing::warn!(error = %e, "Session refused connection");
                self.status = ConnectionState::Failed;
                self.error = Some(e.to_string());
                Ok(None)
            }
            ServerMessage::Connected { team, slot } => {
                tracing::debug!(team, slot, "Session confirmed login");
                Ok(None)
            }
            other => {
                tracing::debug!(command = ?other, "Ignoring server message");
                Ok(None)
            }
        }
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    fn append(&mut self, message: ChatMessage) {
        self.history.push_back(message);
        if self.history_limit > 0 {
            while self.history.len() > self.history_limit {
                self.history.pop_front();
            }
        }
    }
}
