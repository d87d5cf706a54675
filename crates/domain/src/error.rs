//! Error types for the chat domain
//!
//! Folding a message can only fail one way: a fragment whose kind the client
//! never learned about. Everything else in this crate is total.

use thiserror::Error;

/// Unified error type for chat domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChatError {
    /// A message node carried a kind tag outside the known set.
    ///
    /// Fatal for the fold that hit it: the whole message is rejected rather
    /// than rendered with a hole in it.
    #[error("Unknown node type: {0}")]
    UnknownFragmentKind(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl ChatError {
    /// Create an unknown fragment kind error
    pub fn unknown_fragment_kind(kind: impl Into<String>) -> Self {
        Self::UnknownFragmentKind(kind.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// # Example
    /// ```ignore
    /// impl FromStr for ItemTier {
    ///     type Err = ChatError;
    ///     fn from_str(s: &str) -> Result<Self, Self::Err> {
    ///         match s {
    ///             "filler" => Ok(Self::Filler),
    ///             _ => Err(ChatError::parse(format!("Unknown item tier: {}", s))),
    ///         }
    ///     }
    /// }
    /// ```
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// The offending kind value, if this is an unknown fragment error
    pub fn unknown_kind(&self) -> Option<&str> {
        match self {
            Self::UnknownFragmentKind(kind) => Some(kind),
            Self::Parse(_) => None,
        }
    }
}
