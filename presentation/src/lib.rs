//! Presentation layer for kokoro-check
//!
//! This crate contains the CLI argument definitions and the ratatui
//! terminal UI: modal key handling, application state, and widgets.

pub mod cli;
pub mod tui;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use tui::{TuiApp, TuiOptions};
