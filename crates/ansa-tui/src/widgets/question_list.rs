//! Question list widget — the dataset's questions in the left pane.
//!
//! The assistant can only answer from its fixed dataset, so the stored
//! questions double as sample prompts: `↑`/`k` and `↓`/`j` move the cursor,
//! `Enter` submits the highlighted question as if the user had typed it
//! (the App shell owns the submission).

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, List, ListItem, ListState, StatefulWidget, Widget},
};
use tracing;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct QuestionListState {
    pub questions: Vec<String>,
    /// Index of the highlighted question.
    pub cursor: usize,
}

impl QuestionListState {
    pub fn new(questions: Vec<String>) -> Self {
        Self { questions, cursor: 0 }
    }

    /// The highlighted question, if the list is non-empty.
    pub fn selected(&self) -> Option<&str> {
        self.questions.get(self.cursor).map(String::as_str)
    }

    /// Handle an [`AppEvent`], mutating the cursor as appropriate.
    pub fn handle(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Nav(Direction::Up) => {
                self.cursor = self.cursor.saturating_sub(1);
                tracing::debug!(cursor = self.cursor, "questions: cursor up");
            }
            AppEvent::Nav(Direction::Down) => {
                let max = self.questions.len().saturating_sub(1);
                if self.cursor < max {
                    self.cursor += 1;
                }
                tracing::debug!(cursor = self.cursor, "questions: cursor down");
            }
            _ => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct QuestionList<'a> {
    state: &'a QuestionListState,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> QuestionList<'a> {
    pub fn new(state: &'a QuestionListState, focused: bool, theme: &'a Theme) -> Self {
        Self { state, focused, theme }
    }
}

impl Widget for QuestionList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };

        let block = Block::bordered()
            .title("Questions")
            .border_style(border_style);

        let inner = block.inner(area);
        block.render(area, buf);

        let items: Vec<ListItem> = self
            .state
            .questions
            .iter()
            .map(|q| ListItem::new(Line::from(format!("▸ {q}"))))
            .collect();

        let list =
            List::new(items).highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        let mut list_state = ListState::default().with_selected(Some(self.state.cursor));
        StatefulWidget::render(list, inner, buf, &mut list_state);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
