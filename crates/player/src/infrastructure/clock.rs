//! Capture-time sources for the chat store.

use crate::ports::outbound::ClockPort;
use chrono::{DateTime, Utc};

/// Wall clock; every fold is stamped with the real capture time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Test clock that advances a fixed number of milliseconds per read, so
/// consecutive folds get predictable, distinct message ids. A step of 0
/// pins every fold to `start`.
#[cfg(test)]
pub struct SteppingClock {
    start: DateTime<Utc>,
    step_ms: i64,
    reads: std::sync::atomic::AtomicI64,
}

#[cfg(test)]
impl SteppingClock {
    pub fn new(start: DateTime<Utc>, step_ms: i64) -> Self {
        Self {
            start,
            step_ms,
            reads: std::sync::atomic::AtomicI64::new(0),
        }
    }

    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self::new(at, 0)
    }
}

#[cfg(test)]
impl ClockPort for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let read = self
            .reads
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        self.start + chrono::Duration::milliseconds(read * self.step_ms)
    }
}
