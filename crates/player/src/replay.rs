//! Replay of captured session frames through a chat store.
//!
//! One frame per line. A line that is not UTF-8, not a frame, or carries a
//! chat event the store rejects is logged and skipped; the replay only stops
//! on I/O failure.

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use archichat_shared::decode_frame;

use crate::state::ChatStore;

/// Feed every frame from `input` to `store`, writing `<message id> <text>`
/// to `out` for each folded message. Returns how many messages were written.
pub async fn replay<R, W>(store: &mut ChatStore, mut input: R, out: &mut W) -> anyhow::Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut buf = Vec::new();
    let mut line_no = 0usize;
    let mut written = 0usize;

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }
        line_no += 1;

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line.trim(),
            Err(e) => {
                tracing::warn!(line = line_no, error = %e, "Skipping non-UTF-8 frame");
                continue;
            }
        };
        if line.is_empty() {
            continue;
        }

        let messages = match decode_frame(line) {
            Ok(messages) => messages,
            Err(e) => {
                tracing::warn!(line = line_no, error = %e, "Skipping malformed frame");
                continue;
            }
        };

        for message in messages {
            match store.handle_server_message(message) {
                Ok(Some(chat)) => {
                    writeln!(out, "{} {}", chat.id(), chat.plain_text())?;
                    written += 1;
                }
                Ok(None) => {}
                Err(e) => tracing::warn!(line = line_no, error = %e, "Skipping chat event"),
            }
        }
    }

    Ok(written)
}
