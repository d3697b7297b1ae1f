//! Transcript widget — the scrollable chat history pane on the right.
//!
//! # Navigation (when pane is focused)
//!
//! | Key | Action |
//! |-----|--------|
//! | `↑` / `k` | Scroll up one line |
//! | `↓` / `j` | Scroll down one line |
//! | `PageUp` / `Ctrl+u` | Scroll up one page |
//! | `PageDown` / `Ctrl+d` | Scroll down one page |
//! | `G` | Jump to the newest message |
//!
//! # Scroll semantics
//!
//! Messages are word-wrapped to the pane width at render time;
//! `scroll_offset` counts wrapped lines hidden at the bottom (0 = newest
//! message visible). Submitting a question resets the offset so the reply
//! is always on screen.

use std::cell::Cell;

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use chrono::{DateTime, Local};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget,
    },
};
use tracing;

const PAGE_STEP: usize = 10;

/// Width of the speaker column; fits both speaker labels.
const SPEAKER_WIDTH: usize = 4;

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

/// Who said a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "you"),
            Role::Assistant => write!(f, "ansa"),
        }
    }
}

/// One entry in the session's display list.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
    /// Wall-clock time the message was appended.
    pub ts: DateTime<Local>,
    /// `false` when this is an assistant fallback reply; always `true` for
    /// user messages. Fallbacks render in a distinct style.
    pub matched: bool,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
            ts: Local::now(),
            matched: true,
        }
    }

    pub fn assistant(text: impl Into<String>, matched: bool) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
            ts: Local::now(),
            matched,
        }
    }
}

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

pub struct TranscriptState {
    pub messages: Vec<ChatMessage>,
    /// Number of wrapped lines hidden at the bottom (0 = tail).
    pub scroll_offset: usize,
    /// Whether timestamps are shown on each message.
    pub show_timestamps: bool,
    /// chrono format string for the timestamp column.
    pub timestamp_format: String,
    /// Cached from the last render so `handle()` can clamp scrolling.
    last_height: Cell<usize>,
    last_total: Cell<usize>,
}

impl TranscriptState {
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            scroll_offset: 0,
            show_timestamps: true,
            timestamp_format: "%H:%M:%S".to_string(),
            last_height: Cell::new(40),
            last_total: Cell::new(0),
        }
    }

    /// Append a message and jump to the tail so it is visible.
    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
        self.scroll_offset = 0;
    }

    /// Replace the whole display list and jump to the tail.
    pub fn reset(&mut self, messages: Vec<ChatMessage>) {
        self.messages = messages;
        self.scroll_offset = 0;
    }

    fn scroll_up(&mut self, step: usize) {
        let max = self.last_total.get().saturating_sub(1);
        self.scroll_offset = (self.scroll_offset + step).min(max);
    }

    fn scroll_down(&mut self, step: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(step);
    }

    /// Handle a navigation event from the app shell.
    pub fn handle(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Nav(Direction::Up) => {
                self.scroll_up(1);
                tracing::debug!(scroll_offset = self.scroll_offset, "transcript: line up");
            }
            AppEvent::Nav(Direction::Down) => {
                self.scroll_down(1);
                tracing::debug!(scroll_offset = self.scroll_offset, "transcript: line down");
            }
            AppEvent::ScrollUp => {
                self.scroll_up(PAGE_STEP);
                tracing::debug!(scroll_offset = self.scroll_offset, "transcript: page up");
            }
            AppEvent::ScrollDown => {
                self.scroll_down(PAGE_STEP);
                tracing::debug!(scroll_offset = self.scroll_offset, "transcript: page down");
            }
            AppEvent::ScrollToTail => {
                self.scroll_offset = 0;
                tracing::debug!("transcript: jumped to tail");
            }
            _ => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct Transcript<'a> {
    state: &'a TranscriptState,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> Transcript<'a> {
    pub fn new(state: &'a TranscriptState, focused: bool, theme: &'a Theme) -> Self {
        Self { state, focused, theme }
    }
}

impl Widget for Transcript<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };

        let block = Block::bordered().title("Chat").border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let height = inner.height as usize;
        // Reserve one column for the scrollbar strip.
        let text_width = inner.width.saturating_sub(1) as usize;

        let lines = render_messages(
            &self.state.messages,
            text_width,
            self.state.show_timestamps,
            &self.state.timestamp_format,
            self.theme,
        );
        let total = lines.len();

        // Cache for handle() — safe because draw always runs before handle()
        self.state.last_height.set(height);
        self.state.last_total.set(total);

        let offset = self.state.scroll_offset.min(total.saturating_sub(1));
        let end = total.saturating_sub(offset);
        let start = end.saturating_sub(height);

        // Split inner into text (fill) + 1-column scrollbar strip.
        let text_area = Rect { width: inner.width.saturating_sub(1), ..inner };
        let sb_area = Rect {
            x: inner.right().saturating_sub(1),
            width: 1,
            ..inner
        };

        Paragraph::new(lines[start..end].to_vec()).render(text_area, buf);

        if total > 0 {
            let mut sb_state = ScrollbarState::new(total)
                .position(start)
                .viewport_content_length(height);
            StatefulWidget::render(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(None)
                    .end_symbol(None),
                sb_area,
                buf,
                &mut sb_state,
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Message rendering
// ---------------------------------------------------------------------------

/// Flatten messages into styled, wrapped lines, one blank spacer between
/// messages.
fn render_messages(
    messages: &[ChatMessage],
    width: usize,
    show_ts: bool,
    ts_format: &str,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (i, message) in messages.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }

        let ts = if show_ts {
            format!("{} ", message.ts.format(ts_format))
        } else {
            String::new()
        };
        let prefix_width = ts.chars().count() + SPEAKER_WIDTH;
        let body_width = width.saturating_sub(prefix_width + 3).max(1);

        let text_style = if message.role == Role::Assistant && !message.matched {
            theme.fallback
        } else {
            Style::default()
        };

        for (row, chunk) in wrap(&message.text, body_width).into_iter().enumerate() {
            let mut spans: Vec<Span<'static>> = Vec::new();
            if row == 0 {
                if show_ts {
                    spans.push(Span::styled(ts.clone(), theme.timestamp));
                }
                spans.push(Span::styled(
                    format!("{:>width$}", message.role.to_string(), width = SPEAKER_WIDTH),
                    theme.role_style(message.role),
                ));
            } else {
                spans.push(Span::raw(" ".repeat(prefix_width)));
            }
            spans.push(Span::styled(
                " │ ".to_string(),
                Style::default().add_modifier(Modifier::DIM),
            ));
            spans.push(Span::styled(chunk, text_style));
            lines.push(Line::from(spans));
        }
    }

    lines
}

/// Greedy word wrap to `width` characters. Words longer than the width are
/// hard-split. Empty input produces a single empty line so every message
/// occupies at least one row.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if current_len > 0 && current_len + 1 + word_len > width {
            out.push(std::mem::take(&mut current));
            current_len = 0;
        }

        if word_len > width {
            // Hard-split an over-long word across rows. `current` is always
            // empty here — the flush above ran because the word cannot fit.
            let mut chars = word.chars().peekable();
            while chars.peek().is_some() {
                let piece: String = chars.by_ref().take(width).collect();
                current_len = piece.chars().count();
                current = piece;
                if chars.peek().is_some() {
                    out.push(std::mem::take(&mut current));
                    current_len = 0;
                }
            }
            continue;
        }

        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }

    if current_len > 0 || out.is_empty() {
        out.push(current);
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_fits_short_text_on_one_line() {
        assert_eq!(wrap("hello world", 20), vec!["hello world"]);
    }

    #[test]
    fn wrap_breaks_at_word_boundaries() {
        assert_eq!(
            wrap("the quick brown fox jumps", 10),
            vec!["the quick", "brown fox", "jumps"]
        );
    }

    #[test]
    fn wrap_never_exceeds_width() {
        for width in 1..=30 {
            for line in wrap("EVA automates the process of verifying eligibility", width) {
                assert!(
                    line.chars().count() <= width,
                    "line {line:?} exceeds width {width}"
                );
            }
        }
    }

    #[test]
    fn wrap_hard_splits_long_words() {
        assert_eq!(wrap("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn wrap_empty_text_is_one_empty_line() {
        assert_eq!(wrap("", 10), vec![""]);
    }

    #[test]
    fn wrap_collapses_interior_whitespace() {
        assert_eq!(wrap("a   b", 10), vec!["a b"]);
    }

    #[test]
    fn push_jumps_to_tail() {
        let mut state = TranscriptState::new(vec![ChatMessage::assistant("hi", true)]);
        state.scroll_offset = 7;
        state.push(ChatMessage::user("hello"));
        assert_eq!(state.scroll_offset, 0);
        assert_eq!(state.messages.len(), 2);
    }

    #[test]
    fn reset_replaces_messages() {
        let mut state = TranscriptState::new(vec![
            ChatMessage::user("one"),
            ChatMessage::assistant("two", true),
        ]);
        state.scroll_offset = 3;
        state.reset(vec![ChatMessage::assistant("fresh", true)]);
        assert_eq!(state.messages.len(), 1);
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn scrolling_clamps_to_rendered_lines() {
        let state = TranscriptState::new(vec![ChatMessage::user("hello")]);
        state.last_total.set(5);
        let mut state = state;
        for _ in 0..20 {
            state.handle(&AppEvent::Nav(Direction::Up));
        }
        assert_eq!(state.scroll_offset, 4);
        state.handle(&AppEvent::ScrollToTail);
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn scroll_down_saturates_at_tail() {
        let mut state = TranscriptState::new(vec![ChatMessage::user("hello")]);
        state.handle(&AppEvent::ScrollDown);
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn fallback_reply_renders_in_fallback_style() {
        let theme = Theme::load_default();
        let lines = render_messages(
            &[ChatMessage::assistant("sorry, no idea", false)],
            60,
            false,
            "%H:%M:%S",
            &theme,
        );
        let text_span = lines[0].spans.last().unwrap();
        assert_eq!(text_span.style, theme.fallback);
    }

    #[test]
    fn messages_are_separated_by_spacer_lines() {
        let theme = Theme::load_default();
        let lines = render_messages(
            &[ChatMessage::user("hi"), ChatMessage::assistant("hello", true)],
            60,
            false,
            "%H:%M:%S",
            &theme,
        );
        // message, spacer, message
        assert_eq!(lines.len(), 3);
        assert!(lines[1].spans.is_empty());
    }
}
