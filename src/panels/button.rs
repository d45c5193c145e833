//! src/panels/button.rs
//!
//! Regenerate button.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

pub struct ButtonPanel<'a> {
    pub label: &'a str,
    pub pressed: bool,
}

impl<'a> ButtonPanel<'a> {
    pub fn new(label: &'a str, pressed: bool) -> Self {
        Self { label, pressed }
    }
}

impl crate::ui::Panel for ButtonPanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let style = if self.pressed {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
        };
        let p = Paragraph::new(self.label)
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(p, area);
    }
}
