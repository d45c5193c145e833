//! src/chart/renderer.rs
//!
//! Line chart renderer: owns the current `ChartState` and draws it onto a
//! `DrawSurface` as connected dots with two arrow-capped axes.
//!
//! # Mapping
//! With margin `M` and a `W x H` surface, data maps to
//! `x' = M + t_x * (W - M)` and `y' = (H - M) - t_y * (H - M)` where `t` is
//! the value's position within its bounds. A zero range places every point
//! at `x' = M` (horizontal) or at the middle of `[0, H - M]` (vertical).

use super::config::{AxisNormalization, ChartConfig};
use super::point::DataPoint;
use super::state::{Bounds, ChartState};
use super::surface::{DrawSurface, ScreenPoint, Stroke};
use crate::error::ChartResult;

pub struct ChartRenderer {
    config: ChartConfig,
    state: ChartState,
    needs_redraw: bool,
}

impl ChartRenderer {
    /// Build a renderer with an empty dataset.
    pub fn new(config: ChartConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            state: ChartState::default(),
            needs_redraw: true,
        })
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn state(&self) -> &ChartState {
        &self.state
    }

    pub fn bounds(&self) -> Bounds {
        self.state.bounds()
    }

    pub fn y_min(&self) -> i32 {
        self.state.bounds().y_min
    }

    pub fn y_max(&self) -> i32 {
        self.state.bounds().y_max
    }

    /// Replace the shown dataset and request a repaint.
    ///
    /// Bounds are final when this returns, before any repaint happens.
    pub fn set_data(&mut self, points: &[DataPoint]) -> &ChartState {
        self.state = ChartState::from_points(points, &self.config);
        self.needs_redraw = true;
        tracing::debug!(
            input = points.len(),
            shown = self.state.len(),
            bounds = ?self.state.bounds(),
            "chart data replaced"
        );
        &self.state
    }

    pub fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }

    /// Consume the pending repaint request, if any.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    pub fn screen_x(&self, x: i32, width: f64) -> f64 {
        let m = self.config.margin;
        let b = self.state.bounds();
        let t = match self.config.normalization {
            AxisNormalization::Symmetric => match b.x_range() {
                0 => 0.0,
                range => (f64::from(x) - f64::from(b.x_min)) / range as f64,
            },
            AxisNormalization::Legacy => match b.x_max {
                0 => 0.0,
                x_max => f64::from(x) / f64::from(x_max),
            },
        };
        m + t * (width - m)
    }

    pub fn screen_y(&self, y: i32, height: f64) -> f64 {
        let span = height - self.config.margin;
        let b = self.state.bounds();
        match b.y_range() {
            0 => span / 2.0,
            range => span - (f64::from(y) - f64::from(b.y_min)) / range as f64 * span,
        }
    }

    pub fn to_screen(&self, p: DataPoint, width: f64, height: f64) -> ScreenPoint {
        ScreenPoint::new(self.screen_x(p.x, width), self.screen_y(p.y, height))
    }

    /// Draw the current state. Reads only; safe to call any number of times.
    pub fn render<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        let (w, h) = (surface.width(), surface.height());
        let cfg = &self.config;
        let palette = cfg.palette;

        let line = Stroke::new(palette.secondary, cfg.line_stroke_width).anti_aliased();
        let outline = Stroke::new(palette.secondary, cfg.line_stroke_width);
        let axis = Stroke::new(palette.primary, cfg.axis_stroke_width);

        let points = self.state.points();
        for (i, &p) in points.iter().enumerate() {
            let at = self.to_screen(p, w, h);
            if let Some(&next) = points.get(i + 1) {
                surface.draw_line(at, self.to_screen(next, w, h), line);
            }
            surface.fill_circle(at, cfg.point_radius, palette.primary);
            surface.stroke_circle(at, cfg.point_radius, outline);
        }

        let m = cfg.margin;
        let pt = ScreenPoint::new;

        // vertical axis, arrow at the top
        surface.draw_line(pt(m, m), pt(m, h - m), axis);
        surface.draw_line(pt(m, m), pt(0.0, m * 3.0), axis);
        surface.draw_line(pt(m, m), pt(m * 2.0, m * 3.0), axis);

        // horizontal axis, arrow at the right
        surface.draw_line(pt(m, h - m), pt(w - m, h - m), axis);
        surface.draw_line(pt(w - m, h - m), pt(w - m * 3.0, h), axis);
        surface.draw_line(pt(w - m, h - m), pt(w - m * 3.0, h - m * 2.0), axis);
    }
}
