//! Status bar widget — the one-line strip at the top of the screen.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

/// Renders the application title on the left and keybinding hints on the
/// right, in a single row.
pub struct StatusBar<'a> {
    /// Number of questions the assistant can answer, shown beside the title.
    question_count: usize,
    _theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(question_count: usize, theme: &'a Theme) -> Self {
        Self { question_count, _theme: theme }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" ansa — support assistant ({} topics)", self.question_count);
        buf.set_string(
            area.x,
            area.y,
            title,
            Style::default().add_modifier(Modifier::BOLD),
        );

        // Keybinding hints at the right edge
        let hint = " /:ask  q:quit  ?:help ";
        let hint_x = area.right().saturating_sub(hint.len() as u16);
        buf.set_string(
            hint_x,
            area.y,
            hint,
            Style::default().add_modifier(Modifier::DIM),
        );
    }
}
