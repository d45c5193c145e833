//! src/panels/toast.rs
//!
//! Notification overlay drawn on top of the chart near the bottom edge.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::host::Notification;

/// Rows kept free below the toast so the slider and footer stay visible.
pub const BOTTOM_GAP: u16 = 7;

/// Box for `text` centered horizontally, `bottom_gap` rows above the bottom.
pub fn toast_area(screen: Rect, text: &str, bottom_gap: u16) -> Rect {
    let width = (text.chars().count() as u16 + 4).min(screen.width);
    let height = 3.min(screen.height);
    let x = screen.x + (screen.width - width) / 2;
    let y = (screen.y + screen.height)
        .saturating_sub(height + bottom_gap)
        .max(screen.y);
    Rect::new(x, y, width, height)
}

pub struct ToastPanel<'a> {
    pub notification: &'a Notification,
}

impl<'a> ToastPanel<'a> {
    pub fn new(notification: &'a Notification) -> Self {
        Self { notification }
    }
}

impl crate::ui::Panel for ToastPanel<'_> {
    /// `area` is the whole screen; the toast picks its own box inside it.
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let text = self.notification.message.as_str();
        let rect = toast_area(area, text, BOTTOM_GAP);
        let p = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::White)
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(Clear, rect);
        f.render_widget(p, rect);
    }
}
