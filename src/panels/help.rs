//! src/panels/help.rs
//!
//! Key binding footer.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// `(keys, action)` pairs listed in the footer.
pub const KEY_HELP: &[(&str, &str)] = &[
    ("←/→", "size ±1%"),
    ("PgUp/PgDn", "±10%"),
    ("Home/End", "min/max"),
    ("R/Enter", "change set"),
    ("mouse", "drag slider, click button"),
    ("Q/Esc", "quit"),
];

pub struct HelpPanel {
    pub bindings: &'static [(&'static str, &'static str)],
}

impl Default for HelpPanel {
    fn default() -> Self {
        Self { bindings: KEY_HELP }
    }
}

impl crate::ui::Panel for HelpPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let mut spans = Vec::with_capacity(self.bindings.len() * 2);
        for (keys, action) in self.bindings {
            spans.push(Span::styled(*keys, Style::default().fg(Color::Yellow)));
            spans.push(Span::raw(format!("={action}  ")));
        }
        let p = Paragraph::new(Line::from(spans))
            .wrap(Wrap { trim: true })
            .block(Block::default().title("Controls").borders(Borders::ALL));
        f.render_widget(p, area);
    }
}
