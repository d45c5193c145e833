//! Terminal line chart demo.
//!
//! A `ChartRenderer` downsamples integer samples and draws them onto any
//! `DrawSurface`; the `host` layer generates random datasets and drives the
//! renderer from a size slider and a regenerate button; `app` runs it all
//! in a ratatui terminal UI.

pub mod app;
pub mod chart;
pub mod error;
pub mod host;
pub mod panels;
pub mod telemetry;
pub mod ui;

pub use error::{ChartError, ChartResult};
