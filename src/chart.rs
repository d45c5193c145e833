//! src/chart.rs
//!
//! Top-level `chart` module: data model, downsampling, renderer and surfaces.

pub mod canvas;
pub mod config;
pub mod downsample;
pub mod point;
pub mod renderer;
pub mod state;
pub mod surface;

/// Re-exports
pub use canvas::CanvasSurface;
pub use config::{AxisNormalization, ChartConfig, DownsamplePolicy, Palette};
pub use point::DataPoint;
pub use renderer::ChartRenderer;
pub use state::{Bounds, ChartState};
pub use surface::{DrawCommand, DrawSurface, RecordingSurface, ScreenPoint, Stroke};
