//! ansa TUI — ratatui application shell.

pub mod app;
pub mod commands;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::App;

/// First message in every session, and what `:clear` restores.
pub const WELCOME: &str = "Hello! I'm the ansa support assistant. I can help you learn about \
     Thoughtful AI's healthcare automation agents: EVA (eligibility verification), CAM (claims \
     processing), and PHIL (payment posting). Pick a question on the left or press / and ask \
     your own.";

/// Load config, dataset, and theme, then start the TUI.
pub fn run() -> anyhow::Result<()> {
    let config = ansa_core::config::Config::load()
        .unwrap_or_else(|_| ansa_core::config::Config::defaults());
    let dataset = ansa_core::Dataset::load()?;
    let theme = theme::Theme::load_default();
    App::new(dataset, config, theme).run()
}
