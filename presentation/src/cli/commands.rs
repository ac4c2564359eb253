//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for kokoro-check
#[derive(Parser, Debug)]
#[command(name = "kokoro-check")]
#[command(author, version, about = "Daily mental-health check-in for your terminal")]
#[command(long_about = r#"
kokoro-check walks you through a list of weighted yes/no/not-applicable
questions about your day and computes a weighted score on a 0-5 scale.

The question set can be edited inside the app (press `e`) or seeded from
a config file, loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./kokoro.toml       Project-level config
3. ~/.config/kokoro-check/config.toml   Global config

Example:
  kokoro-check
  kokoro-check --config my-questions.toml
  kokoro-check --no-config -vv
"#)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files (use the built-in questions)
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
