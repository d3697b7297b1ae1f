use crate::{
    app::AppState,
    event::AppEvent,
    theme::Theme,
    widgets::transcript::ChatMessage,
};

// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

/// A parsed, validated command ready to be executed by the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Close the app
    Quit,
    // Close the app regardless of state
    Exit,
    // Display help
    Help,
    // Clear the transcript back to the welcome message
    Clear,
    // Toggle display of timestamps
    Timestamps,
    // Jump to the newest message
    Tail,
    // Change theme
    Theme(String),
}

impl Command {
    /// Parse a raw command string (the text after the `:` prefix).
    ///
    /// Returns `Ok(cmd)` on success, `Err(message)` on failure. An empty
    /// string returns `Err("")` as a sentinel meaning "close without acting".
    pub fn parse(input: &str) -> Result<Command, String> {
        let input = input.trim();
        if input.is_empty() {
            return Err(String::new());
        }

        let (word, rest) = input
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((input, ""));

        match word {
            "q" | "quit" => Ok(Command::Quit),
            "q!" | "quit!" => Ok(Command::Exit),
            "help" => Ok(Command::Help),
            "clear" => Ok(Command::Clear),
            "ts" | "timestamps" => Ok(Command::Timestamps),
            "tail" => Ok(Command::Tail),
            "theme" => {
                if rest.is_empty() {
                    Err("usage: theme <default|gruvbox>".to_string())
                } else {
                    Ok(Command::Theme(rest.to_string()))
                }
            }
            other => Err(format!("unknown command: {other}")),
        }
    }
}

/// Execute a parsed [`Command`] against the application state.
pub fn execute_command(s: &mut AppState, cmd: Command) {
    match cmd {
        Command::Quit | Command::Exit => {
            s.quit = true;
        }
        Command::Help => {
            s.show_help = !s.show_help;
        }
        Command::Clear => {
            s.transcript.reset(vec![ChatMessage::assistant(crate::WELCOME, true)]);
        }
        Command::Timestamps => {
            s.transcript.show_timestamps = !s.transcript.show_timestamps;
        }
        Command::Tail => {
            s.transcript.handle(&AppEvent::ScrollToTail);
        }
        Command::Theme(name) => {
            s.theme = match name.to_ascii_lowercase().as_str() {
                "gruvbox" | "gruvbox_dark" | "gruvbox-dark" => Theme::load_gruvbox_dark(),
                _ => Theme::load_default(),
            };
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
