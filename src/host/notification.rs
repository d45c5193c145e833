//! src/host/notification.rs
//!
//! Short-lived text message shown over the chart.

use std::time::{Duration, Instant};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub shown_at: Instant,
    pub duration: Duration,
}

impl Notification {
    pub fn new(message: impl Into<String>, shown_at: Instant, duration: Duration) -> Self {
        Self {
            message: message.into(),
            shown_at,
            duration,
        }
    }

    /// The bounds message shown after slider release or regeneration.
    pub fn bounds(y_min: i32, y_max: i32, shown_at: Instant, duration: Duration) -> Self {
        Self::new(format!("Min: {y_min} | Max: {y_max}"), shown_at, duration)
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.duration
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        self.duration
            .saturating_sub(now.saturating_duration_since(self.shown_at))
    }
}
