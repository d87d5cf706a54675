//! Player configuration loaded from the environment.

/// Default session server address
pub const DEFAULT_SERVER_URL: &str = "archipelago.gg:38281";
/// Default number of chat messages kept in memory
pub const DEFAULT_HISTORY_LIMIT: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerConfig {
    pub server_url: String,
    pub slot: String,
    pub password: Option<String>,
    /// Maximum messages kept in the chat log; 0 keeps everything
    pub history_limit: usize,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            slot: String::new(),
            password: None,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl PlayerConfig {
    /// Load `.env` if present, then read `ARCHICHAT_*` variables.
    pub fn from_env() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!(error = %e, "Failed to load .env file");
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Unset or unparsable values
    /// fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let history_limit = match lookup("ARCHICHAT_HISTORY_LIMIT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(
                    value = %raw,
                    default = DEFAULT_HISTORY_LIMIT,
                    "Invalid ARCHICHAT_HISTORY_LIMIT, using default"
                );
                DEFAULT_HISTORY_LIMIT
            }),
            None => defaults.history_limit,
        };

        Self {
            server_url: lookup("ARCHICHAT_SERVER_URL").unwrap_or(defaults.server_url),
            slot: lookup("ARCHICHAT_SLOT").unwrap_or(defaults.slot),
            password: lookup("ARCHICHAT_PASSWORD").filter(|p| !p.is_empty()),
            history_limit,
        }
    }
}
