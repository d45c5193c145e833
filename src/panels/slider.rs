//! src/panels/slider.rs
//!
//! Data size slider drawn as a gauge.

use ratatui::{
    Frame,
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Gauge},
};

use crate::host::SizeSlider;

/// Cells of the slider area that map onto progress (inside the border).
pub fn slider_track(area: Rect) -> Rect {
    area.inner(Margin::new(1, 1))
}

pub struct SliderPanel<'a> {
    pub slider: &'a SizeSlider,
    pub data_size: usize,
}

impl<'a> SliderPanel<'a> {
    pub fn new(slider: &'a SizeSlider, data_size: usize) -> Self {
        Self { slider, data_size }
    }
}

impl crate::ui::Panel for SliderPanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let mut block = Block::default().title("Data size").borders(Borders::ALL);
        if self.slider.is_dragging() {
            block = block.border_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );
        }
        let gauge = Gauge::default()
            .block(block)
            .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
            .ratio(self.slider.ratio())
            .label(format!(
                "{} points ({}%)",
                self.data_size,
                self.slider.progress()
            ));
        f.render_widget(gauge, area);
    }
}
