use chrono::{DateTime, Utc};

/// Source of the capture time for folded messages
#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
