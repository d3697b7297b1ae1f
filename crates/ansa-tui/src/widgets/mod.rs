//! Ratatui widgets for the ansa TUI.

pub mod command_bar;
pub mod help;
pub mod input_bar;
pub mod question_list;
pub mod status_bar;
pub mod transcript;
