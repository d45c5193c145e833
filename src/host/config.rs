//! src/host/config.rs
//!
//! Dataset size range, value range and timing of the interactive host.

use std::time::Duration;

use crate::error::{ChartError, ChartResult};

#[derive(Clone, Debug, PartialEq)]
pub struct HostConfig {
    /// Dataset size at slider progress 0.
    pub min_data_set: usize,

    /// Size added on top of `min_data_set` at progress 100.
    pub max_data_set: usize,

    /// Generated y values are uniform in `[1, max_value]`.
    pub max_value: i32,

    /// How long the bounds notification stays on screen.
    pub notification_duration: Duration,

    /// Progress change for a single arrow key press.
    pub slider_step: u8,

    /// Progress change for PageUp/PageDown.
    pub slider_page_step: u8,

    /// Upper bound on how long the event loop blocks waiting for input.
    pub poll_interval: Duration,
}

impl HostConfig {
    pub fn validate(&self) -> ChartResult<()> {
        if self.max_value < 1 {
            return Err(ChartError::InvalidHostConfig(format!(
                "`max_value` must be >= 1, got {}",
                self.max_value
            )));
        }
        if self.slider_step == 0 || self.slider_page_step == 0 {
            return Err(ChartError::InvalidHostConfig(
                "slider steps must be non-zero".to_owned(),
            ));
        }
        if self.poll_interval.is_zero() {
            return Err(ChartError::InvalidHostConfig(
                "`poll_interval` must be non-zero".to_owned(),
            ));
        }
        Ok(())
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            min_data_set: 20,
            max_data_set: 100_000,
            max_value: 1000,
            notification_duration: Duration::from_secs(2),
            slider_step: 1,
            slider_page_step: 10,
            poll_interval: Duration::from_millis(100),
        }
    }
}
