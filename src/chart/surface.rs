//! src/chart/surface.rs
//!
//! Drawing surface abstraction plus a recording implementation.
//!
//! Coordinates are in surface units with the origin at the top-left
//! corner and y growing downwards.

use ratatui::style::Color;

/// Position on a drawing surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Pen used for lines and outlined circles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
    pub anti_alias: bool,
}

impl Stroke {
    pub const fn new(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            anti_alias: false,
        }
    }

    pub const fn anti_aliased(mut self) -> Self {
        self.anti_alias = true;
        self
    }
}

/// Anything the chart can be drawn onto.
pub trait DrawSurface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;
    fn draw_line(&mut self, from: ScreenPoint, to: ScreenPoint, stroke: Stroke);
    fn fill_circle(&mut self, center: ScreenPoint, radius: f64, color: Color);
    fn stroke_circle(&mut self, center: ScreenPoint, radius: f64, stroke: Stroke);
}

/// One primitive issued to a surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    Line {
        from: ScreenPoint,
        to: ScreenPoint,
        stroke: Stroke,
    },
    FillCircle {
        center: ScreenPoint,
        radius: f64,
        color: Color,
    },
    StrokeCircle {
        center: ScreenPoint,
        radius: f64,
        stroke: Stroke,
    },
}

/// Surface that keeps every command in issue order.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub width: f64,
    pub height: f64,
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = (ScreenPoint, ScreenPoint, Stroke)> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            DrawCommand::Line { from, to, stroke } => Some((from, to, stroke)),
            _ => None,
        })
    }

    /// Centers of filled circles, i.e. one per drawn data point.
    pub fn point_centers(&self) -> Vec<ScreenPoint> {
        self.commands
            .iter()
            .filter_map(|c| match *c {
                DrawCommand::FillCircle { center, .. } => Some(center),
                _ => None,
            })
            .collect()
    }

    pub fn all_finite(&self) -> bool {
        self.commands.iter().all(|c| match c {
            DrawCommand::Line { from, to, .. } => from.is_finite() && to.is_finite(),
            DrawCommand::FillCircle { center, radius, .. }
            | DrawCommand::StrokeCircle { center, radius, .. } => {
                center.is_finite() && radius.is_finite()
            }
        })
    }
}

impl DrawSurface for RecordingSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn draw_line(&mut self, from: ScreenPoint, to: ScreenPoint, stroke: Stroke) {
        self.commands.push(DrawCommand::Line { from, to, stroke });
    }

    fn fill_circle(&mut self, center: ScreenPoint, radius: f64, color: Color) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, center: ScreenPoint, radius: f64, stroke: Stroke) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            stroke,
        });
    }
}
