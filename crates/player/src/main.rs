//! Archichat Player - replays session frames from stdin as chat lines.

use std::sync::Arc;

use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use archichat_player::infrastructure::clock::SystemClock;
use archichat_player::infrastructure::offline_session::OfflineSession;
use archichat_player::{replay, ChatStore, PlayerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "archichat_player=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = PlayerConfig::from_env();
    tracing::info!(
        server_url = %config.server_url,
        history_limit = config.history_limit,
        "Starting Archichat replay"
    );

    let mut store = ChatStore::new(
        Arc::new(OfflineSession),
        Arc::new(SystemClock),
        config.history_limit,
    );

    let mut out = std::io::stdout();
    let written = replay(&mut store, BufReader::new(tokio::io::stdin()), &mut out).await?;

    tracing::info!(messages = written, "Replay finished");
    Ok(())
}
