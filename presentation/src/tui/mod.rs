//! TUI module for kokoro-check
//!
//! A single-screen modal interface built on ratatui: an Answer mode for
//! working through the check-in, an Edit mode operating on a draft copy
//! of the question set, a text-insert mode for rewriting prompts, and
//! confirmation/result overlays.

mod action_handler;
mod app;
mod mode;
mod state;
mod widgets;

pub use app::{TuiApp, TuiOptions};
pub use mode::{Action, KeyHandler, Mode};
pub use state::TuiState;
