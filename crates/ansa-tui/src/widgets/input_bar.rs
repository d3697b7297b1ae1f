//! Input bar widget — the free-text question box at the bottom of the screen.
//!
//! # Editing
//!
//! - `Char(c)` inserts at the cursor.
//! - `Backspace` deletes the character before the cursor.
//! - `Nav(Left)` / `Nav(Right)` move the cursor (arrow keys while this pane
//!   is focused, re-mapped by the App shell).
//! - `Enter` is handled by the App shell: it submits the text to the matcher.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};
use tracing;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct InputBarState {
    /// The question being typed by the user.
    pub text: String,
    /// Byte offset of the cursor within `text`.
    pub cursor: usize,
}

impl InputBarState {
    /// Handle a key event from the app shell.
    ///
    /// Text-editing events (`Char`, `Backspace`, arrow keys) update the
    /// text; all other events are ignored.
    pub fn handle(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Char(c) => {
                self.text.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                tracing::debug!(text = %self.text, cursor = self.cursor, "input: char inserted");
            }
            AppEvent::Backspace => {
                if self.cursor > 0 {
                    // Walk back one char boundary
                    let prev = self.text[..self.cursor]
                        .char_indices()
                        .last()
                        .map(|(i, _)| i)
                        .unwrap_or(0);
                    self.text.remove(prev);
                    self.cursor = prev;
                    tracing::debug!(text = %self.text, cursor = self.cursor, "input: backspace");
                }
            }
            // Left/right arrows re-mapped from Nav by the App shell
            AppEvent::Nav(Direction::Left) => {
                if self.cursor > 0 {
                    self.cursor = self.text[..self.cursor]
                        .char_indices()
                        .last()
                        .map(|(i, _)| i)
                        .unwrap_or(0);
                    tracing::debug!(cursor = self.cursor, "input: cursor left");
                }
            }
            AppEvent::Nav(Direction::Right) => {
                if self.cursor < self.text.len() {
                    let next = self.text[self.cursor..]
                        .char_indices()
                        .nth(1)
                        .map(|(i, _)| self.cursor + i)
                        .unwrap_or(self.text.len());
                    self.cursor = next;
                    tracing::debug!(cursor = self.cursor, "input: cursor right");
                }
            }
            _ => {}
        }
    }

    /// Take the typed text, leaving the bar empty. The App shell calls this
    /// on `Enter` before handing the text to the matcher.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct InputBar<'a> {
    state: &'a InputBarState,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> InputBar<'a> {
    pub fn new(state: &'a InputBarState, focused: bool, theme: &'a Theme) -> Self {
        Self { state, focused, theme }
    }

    /// Absolute terminal position of the text cursor within this widget's
    /// rendered area. Pass to `frame.set_cursor_position()` after rendering.
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        // The block adds 1-cell borders; text starts at (area.x+1, area.y+1).
        let col = self.state.text[..self.state.cursor].chars().count() as u16;
        let x = (area.x + 1 + col).min(area.right().saturating_sub(1));
        let y = area.y + 1;
        (x, y)
    }
}

impl Widget for InputBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };

        let block = Block::bordered().title("Ask").border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        // Split inner area: typed text (fill) | key hint (fixed width)
        let chunks = Layout::default()
            .direction(LayoutDir::Horizontal)
            .constraints([Constraint::Fill(1), Constraint::Length(14)])
            .split(inner);

        let text_line = if self.state.text.is_empty() && !self.focused {
            Line::from(Span::styled(
                "press / to ask a question",
                Style::default().add_modifier(Modifier::DIM),
            ))
        } else {
            Line::from(self.state.text.as_str())
        };
        Paragraph::new(text_line).render(chunks[0], buf);

        Paragraph::new(Line::from(Span::styled(
            "enter to send",
            Style::default().add_modifier(Modifier::DIM),
        )))
        .render(chunks[1], buf);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
