//! src/error.rs
//!
//! Error type shared by the chart and host layers.

use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid chart config: {0}")]
    InvalidConfig(String),

    #[error("invalid host config: {0}")]
    InvalidHostConfig(String),
}
