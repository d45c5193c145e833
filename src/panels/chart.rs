//! src/panels/chart.rs
//!
//! Chart panel: hands a braille canvas to the renderer.
//!
//! The canvas is sized in dots (two per cell horizontally, four vertically)
//! and its bounds match that size, so chart geometry is expressed in dots.

use ratatui::{
    Frame,
    layout::Rect,
    symbols::Marker,
    widgets::{Block, Borders, canvas::Canvas},
};

use crate::chart::{CanvasSurface, ChartRenderer};

/// Braille dots per cell, horizontally and vertically.
pub const DOTS_PER_CELL: (u16, u16) = (2, 4);

/// Surface size in dots for a canvas covering `inner`.
pub fn surface_size(inner: Rect) -> (f64, f64) {
    (
        f64::from(inner.width * DOTS_PER_CELL.0),
        f64::from(inner.height * DOTS_PER_CELL.1),
    )
}

pub struct ChartPanel<'a> {
    pub renderer: &'a ChartRenderer,
    pub title: &'a str,
}

impl<'a> ChartPanel<'a> {
    pub fn new(renderer: &'a ChartRenderer, title: &'a str) -> Self {
        Self { renderer, title }
    }
}

impl crate::ui::Panel for ChartPanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let block = Block::default().title(self.title).borders(Borders::ALL);
        let (width, height) = surface_size(block.inner(area));
        let renderer = self.renderer;

        let canvas = Canvas::default()
            .block(block)
            .marker(Marker::Braille)
            .x_bounds([0.0, width])
            .y_bounds([0.0, height])
            .paint(move |ctx| {
                let mut surface = CanvasSurface::new(ctx, width, height);
                renderer.render(&mut surface);
            });
        f.render_widget(canvas, area);
    }
}
