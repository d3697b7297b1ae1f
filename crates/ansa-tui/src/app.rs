//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic.

use crate::{
    commands::{execute_command, Command},
    event::{self, AppEvent},
    theme::Theme,
    widgets::{
        command_bar::{CommandBar, CommandBarState},
        help::HelpPopup,
        input_bar::{InputBar, InputBarState},
        question_list::{QuestionList, QuestionListState},
        status_bar::StatusBar,
        transcript::{ChatMessage, Transcript, TranscriptState},
    },
};
use ansa_core::{config::Config, Dataset, Matcher};
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    Frame, Terminal,
};
use std::{io, time::Duration};

// ---------------------------------------------------------------------------
// Focus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Questions,
    Transcript,
    Input,
    /// Vim-style `:` command line is active.
    Command,
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub matcher: Matcher,
    pub focus: Focus,
    /// Focus state before entering command mode, restored on exit.
    pub prev_focus: Focus,
    pub theme: Theme,
    pub config: Config,
    pub show_help: bool,
    pub questions: QuestionListState,
    pub transcript: TranscriptState,
    pub input: InputBarState,
    pub command_bar: CommandBarState,
    pub quit: bool,
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
}

impl App {
    pub fn new(dataset: Dataset, config: Config, theme: Theme) -> Self {
        let matcher = Matcher::new(dataset, config.matcher.threshold);

        let questions = QuestionListState::new(
            matcher.dataset().questions().map(str::to_string).collect(),
        );

        let mut transcript =
            TranscriptState::new(vec![ChatMessage::assistant(crate::WELCOME, true)]);
        transcript.show_timestamps = config.ui.show_timestamps;
        transcript.timestamp_format = config.ui.timestamp_format.clone();

        let state = AppState {
            matcher,
            focus: Focus::Questions,
            prev_focus: Focus::Questions,
            theme,
            config,
            show_help: false,
            questions,
            transcript,
            input: InputBarState::default(),
            command_bar: CommandBarState::default(),
            quit: false,
        };

        App { state }
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(16))? {
                match ct_event::read()? {
                    Event::Key(key) if key.kind == crossterm::event::KeyEventKind::Press => {
                        let raw = Event::Key(key);
                        // Use insert-mode mapping when a text widget is focused
                        let app_event = if is_insert_mode(self.state.focus) {
                            event::to_app_event_insert(raw)
                        } else {
                            event::to_app_event(raw)
                        };
                        if let Some(ev) = app_event {
                            tracing::debug!(
                                focus = ?self.state.focus,
                                event = ?ev,
                                "key event"
                            );
                            self.handle(ev);
                        }
                    }
                    other => {
                        if let Some(ev) = event::to_app_event(other) {
                            self.handle(ev);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    fn handle(&mut self, event: AppEvent) {
        let s = &mut self.state;

        // Help popup intercepts all events; only close keys pass through.
        if s.show_help {
            match event {
                AppEvent::Char('?') | AppEvent::Escape | AppEvent::Quit => {
                    tracing::debug!("help popup closed");
                    s.show_help = false;
                }
                _ => {}
            }
            return;
        }

        // Command mode intercepts all events.
        if s.focus == Focus::Command {
            match event {
                AppEvent::Escape => {
                    tracing::debug!("command bar cancelled");
                    s.command_bar.clear();
                    s.focus = s.prev_focus;
                }
                AppEvent::Enter => {
                    let input = s.command_bar.input.clone();
                    match Command::parse(&input) {
                        Ok(cmd) => {
                            tracing::debug!(command = ?cmd, "executing command");
                            s.command_bar.clear();
                            s.focus = s.prev_focus;
                            execute_command(s, cmd);
                        }
                        Err(msg) if msg.is_empty() => {
                            // Empty input — just close
                            s.command_bar.clear();
                            s.focus = s.prev_focus;
                        }
                        Err(msg) => {
                            // Show the error; bar stays open
                            s.command_bar.error = Some(msg);
                        }
                    }
                }
                other => s.command_bar.handle(&other),
            }
            return;
        }

        match event {
            // Toggle help (only when not typing in the input bar)
            AppEvent::Char('?') if s.focus != Focus::Input => {
                tracing::debug!("help popup opened");
                s.show_help = true;
            }

            // Enter command mode with `:` (not from the input bar)
            AppEvent::Char(':') if s.focus != Focus::Input => {
                tracing::debug!(prev_focus = ?s.focus, "entering command mode");
                s.prev_focus = s.focus;
                s.command_bar.clear();
                s.focus = Focus::Command;
            }

            AppEvent::Quit => {
                tracing::debug!("quit");
                s.quit = true;
            }

            // Return focus from the input bar
            AppEvent::Escape => {
                if s.focus == Focus::Input {
                    tracing::debug!("focus: Input -> Questions");
                    s.focus = Focus::Questions;
                }
            }

            // Tab-cycle focus: Questions → Transcript → Input → Questions
            AppEvent::FocusNext => {
                let next = match s.focus {
                    Focus::Questions => Focus::Transcript,
                    Focus::Transcript => Focus::Input,
                    Focus::Input | Focus::Command => Focus::Questions,
                };
                tracing::debug!(from = ?s.focus, to = ?next, "focus cycle");
                s.focus = next;
            }

            // Jump to the input bar
            AppEvent::InputFocus => {
                tracing::debug!("focus -> Input");
                s.focus = Focus::Input;
            }

            // Submission — from the input bar or the question list
            AppEvent::Enter => match s.focus {
                Focus::Input => {
                    let text = s.input.take();
                    submit_question(s, &text);
                }
                Focus::Questions => {
                    if let Some(question) = s.questions.selected().map(str::to_string) {
                        submit_question(s, &question);
                    }
                }
                Focus::Transcript | Focus::Command => {}
            },

            // Terminal resize is handled automatically by ratatui
            AppEvent::Resize(_, _) => {}

            other => dispatch_to_focused(s, other),
        }
    }
}

/// Returns true when the current focus is on a text-input widget, meaning
/// alphabetic keys should produce characters rather than trigger shortcuts.
fn is_insert_mode(focus: Focus) -> bool {
    matches!(focus, Focus::Input | Focus::Command)
}

/// Append the user's question and the matcher's reply to the transcript.
///
/// Blank submissions are dropped without touching the display list.
fn submit_question(s: &mut AppState, text: &str) {
    let text = text.trim();
    if text.is_empty() {
        return;
    }

    s.transcript.push(ChatMessage::user(text));
    let reply = s.matcher.answer(text);
    tracing::debug!(
        question = %text,
        matched = reply.matched,
        score = reply.score,
        "question answered"
    );
    s.transcript
        .push(ChatMessage::assistant(reply.answer, reply.matched));
}

/// Route an event to the widget that owns the current focus.
fn dispatch_to_focused(s: &mut AppState, event: AppEvent) {
    match s.focus {
        Focus::Questions => s.questions.handle(&event),
        Focus::Transcript => s.transcript.handle(&event),
        Focus::Input => s.input.handle(&event),
        Focus::Command => {} // handled before dispatch, should not reach here
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Vertical: 1-line status bar | body | 3-line input bar
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(3),
        ])
        .split(area);

    // Horizontal body split
    let pct = state.config.ui.question_pane_width_pct;
    let horiz = Layout::default()
        .direction(LayoutDir::Horizontal)
        .constraints([Constraint::Percentage(pct), Constraint::Fill(1)])
        .split(vert[1]);

    frame.render_widget(
        StatusBar::new(state.questions.questions.len(), &state.theme),
        vert[0],
    );
    frame.render_widget(
        QuestionList::new(&state.questions, state.focus == Focus::Questions, &state.theme),
        horiz[0],
    );
    frame.render_widget(
        Transcript::new(&state.transcript, state.focus == Focus::Transcript, &state.theme),
        horiz[1],
    );
    frame.render_widget(
        InputBar::new(&state.input, state.focus == Focus::Input, &state.theme),
        vert[2],
    );

    if state.show_help {
        frame.render_widget(HelpPopup::new(&state.theme), area);
    }

    // Command bar overlays the bottom row of the screen
    if state.focus == Focus::Command {
        let cmd_area = Rect { y: area.bottom() - 1, height: 1, ..area };
        frame.render_widget(CommandBar::new(&state.command_bar, &state.theme), cmd_area);
        let col = state.command_bar.cursor_col(cmd_area);
        frame.set_cursor_position((col, cmd_area.y));
        return; // cursor is set; skip input-bar cursor below
    }

    // Position the terminal cursor when the input bar is focused
    if state.focus == Focus::Input {
        let bar = InputBar::new(&state.input, true, &state.theme);
        let (cx, cy) = bar.cursor_position(vert[2]);
        frame.set_cursor_position((cx, cy));
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
