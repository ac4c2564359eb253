//! CLI entrypoint for kokoro-check
//!
//! Wires the layers together: loads the question set from config,
//! builds the questionnaire engine, and hands it to the TUI.

use anyhow::{Context, Result};
use clap::Parser;
use kokoro_domain::Questionnaire;
use kokoro_infrastructure::ConfigLoader;
use kokoro_presentation::{Cli, TuiApp, TuiOptions};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Initialize logging based on verbosity level. The TUI owns stdout,
    // so logs go to a file next to the working directory.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };
    let file_appender = tracing_appender::rolling::never(".", "kokoro-check.log");
    let (writer, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .init();

    info!("Starting kokoro-check");

    // Load the question set
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!(e))
            .context("failed to load configuration")?
    };

    for warning in config.validate() {
        warn!("config: {warning}");
    }

    let options = TuiOptions {
        tick_ms: config.tui.tick_ms,
        show_help_on_start: config.tui.show_help_on_start,
    };

    let engine = Questionnaire::try_new(config.seed_questions())
        .context("invalid question set in configuration")?;
    info!(questions = engine.questions().len(), "questionnaire ready");

    TuiApp::new(engine, options)
        .run()
        .await
        .context("TUI terminated abnormally")?;

    Ok(())
}
