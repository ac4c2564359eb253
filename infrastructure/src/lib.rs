//! Infrastructure layer for kokoro-check
//!
//! This crate loads the TOML configuration (seed question set and TUI
//! options) and converts it into domain types. Answers and edits are
//! never written back; the config is read-only seed data.

pub mod config;

// Re-export commonly used types
pub use config::{
    file_config::{FileConfig, FileQuestion, FileTuiConfig},
    loader::ConfigLoader,
};
