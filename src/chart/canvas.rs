//! src/chart/canvas.rs
//!
//! `DrawSurface` backed by a ratatui canvas.
//!
//! The canvas is set up with bounds `[0, width] x [0, height]` so one surface
//! unit is one braille dot. Canvas y grows upwards, so every y is flipped.
//! Terminal dots have no stroke width or anti-aliasing; both are ignored.

use ratatui::style::Color;
use ratatui::widgets::canvas::{Circle, Context, Line, Points};

use super::surface::{DrawSurface, ScreenPoint, Stroke};

pub struct CanvasSurface<'a, 'b> {
    ctx: &'a mut Context<'b>,
    width: f64,
    height: f64,
}

impl<'a, 'b> CanvasSurface<'a, 'b> {
    pub fn new(ctx: &'a mut Context<'b>, width: f64, height: f64) -> Self {
        Self { ctx, width, height }
    }

    fn flip(&self, p: ScreenPoint) -> (f64, f64) {
        (p.x, self.height - p.y)
    }
}

/// Dot offsets covering a disc of `radius` on the unit grid.
pub fn disc_offsets(radius: f64) -> Vec<(f64, f64)> {
    let r = radius.max(0.0);
    let reach = r.floor() as i32;
    let mut out = Vec::new();
    for dy in -reach..=reach {
        for dx in -reach..=reach {
            let (dx, dy) = (f64::from(dx), f64::from(dy));
            if dx * dx + dy * dy <= r * r {
                out.push((dx, dy));
            }
        }
    }
    out
}

impl DrawSurface for CanvasSurface<'_, '_> {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn draw_line(&mut self, from: ScreenPoint, to: ScreenPoint, stroke: Stroke) {
        let (x1, y1) = self.flip(from);
        let (x2, y2) = self.flip(to);
        self.ctx.draw(&Line {
            x1,
            y1,
            x2,
            y2,
            color: stroke.color,
        });
    }

    fn fill_circle(&mut self, center: ScreenPoint, radius: f64, color: Color) {
        let (cx, cy) = self.flip(center);
        let coords: Vec<(f64, f64)> = disc_offsets(radius)
            .into_iter()
            .map(|(dx, dy)| (cx + dx, cy + dy))
            .collect();
        self.ctx.draw(&Points {
            coords: &coords,
            color,
        });
    }

    fn stroke_circle(&mut self, center: ScreenPoint, radius: f64, stroke: Stroke) {
        let (x, y) = self.flip(center);
        self.ctx.draw(&Circle {
            x,
            y,
            radius,
            color: stroke.color,
        });
    }
}
