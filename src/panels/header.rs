//! src/panels/header.rs
//!
//! Header: app title plus a one-line summary of what the chart shows.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::chart::ChartState;

pub struct HeaderPanel<'a> {
    pub title: &'a str,
    pub state: &'a ChartState,
    pub data_size: usize,
}

impl<'a> HeaderPanel<'a> {
    pub fn new(title: &'a str, state: &'a ChartState, data_size: usize) -> Self {
        Self {
            title,
            state,
            data_size,
        }
    }
}

impl crate::ui::Panel for HeaderPanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let b = self.state.bounds();
        let label = Style::default().fg(Color::Yellow);
        let line = Line::from(vec![
            Span::styled("shown: ", label),
            Span::raw(format!("{}/{}", self.state.len(), self.data_size + 1)),
            Span::styled("  x: ", label),
            Span::raw(format!("[{}, {}]", b.x_min, b.x_max)),
            Span::styled("  y: ", label),
            Span::raw(format!("[{}, {}]", b.y_min, b.y_max)),
        ]);
        let block = Block::default()
            .title(Span::styled(
                self.title,
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL);
        f.render_widget(Paragraph::new(line).block(block), area);
    }
}
