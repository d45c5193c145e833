//! src/chart/config.rs
//!
//! Geometry, stroke and downsampling parameters for the chart renderer.
//!
//! Everything the renderer needs is carried here and handed over at
//! construction, so a renderer can be built and tested with any values.

use ratatui::style::Color;

use crate::error::{ChartError, ChartResult};

/// How an oversized dataset is split into averaging buckets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DownsamplePolicy {
    /// `group = len / max`. Inputs just above the cap keep more than
    /// `max` points (e.g. 150 inputs give 150 buckets of one).
    FloorGroups,
    /// `group = ceil(len / max)`. Never yields more than `max` points.
    #[default]
    CappedGroups,
}

/// How data x values are normalized onto the horizontal axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AxisNormalization {
    /// Both axes use their `max - min` range.
    #[default]
    Symmetric,
    /// x is divided by `x_max` alone, ignoring `x_min`.
    Legacy,
}

/// The two theme colors the chart draws with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Axis lines and point fill.
    pub primary: Color,
    /// Connecting line and point outline.
    pub secondary: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: Color::Magenta,
            secondary: Color::Cyan,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    /// Padding reserved around the plot for the axis markers.
    pub margin: f64,

    /// Stroke width of connecting lines and point outlines.
    pub line_stroke_width: f64,

    /// Stroke width of both axes and their arrowheads.
    pub axis_stroke_width: f64,

    /// Radius of each data point marker.
    pub point_radius: f64,

    /// Datasets longer than this are bucket-averaged before drawing.
    pub max_points_on_chart: usize,

    pub downsample: DownsamplePolicy,
    pub normalization: AxisNormalization,
    pub palette: Palette,
}

impl ChartConfig {
    /// Reject geometry that would produce non-finite or inverted drawings.
    pub fn validate(&self) -> ChartResult<()> {
        for (name, value) in [
            ("margin", self.margin),
            ("line_stroke_width", self.line_stroke_width),
            ("axis_stroke_width", self.axis_stroke_width),
            ("point_radius", self.point_radius),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "`{name}` must be finite and > 0, got {value}"
                )));
            }
        }
        if self.max_points_on_chart == 0 {
            return Err(ChartError::InvalidConfig(
                "`max_points_on_chart` must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn with_downsample(mut self, downsample: DownsamplePolicy) -> Self {
        self.downsample = downsample;
        self
    }

    pub fn with_normalization(mut self, normalization: AxisNormalization) -> Self {
        self.normalization = normalization;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            margin: 10.0,
            line_stroke_width: 3.0,
            axis_stroke_width: 5.0,
            point_radius: 3.0,
            max_points_on_chart: 100,
            downsample: DownsamplePolicy::default(),
            normalization: AxisNormalization::default(),
            palette: Palette::default(),
        }
    }
}
