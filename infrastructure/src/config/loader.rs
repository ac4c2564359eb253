//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use std::path::PathBuf;
use tracing::debug;

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided)
    /// 2. Project root: `./kokoro.toml` or `./.kokoro.toml`
    /// 3. XDG config: `$XDG_CONFIG_HOME/kokoro-check/config.toml`
    /// 4. Fallback: `~/.config/kokoro-check/config.toml`
    /// 5. Built-in defaults (the standard nine-question set)
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        // Global config (XDG or fallback)
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            debug!(path = %global_path.display(), "merging global config");
            figment = figment.merge(Toml::file(&global_path));
        }

        // Project-level config files (check both names)
        for filename in &["kokoro.toml", ".kokoro.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                debug!(path = %path.display(), "merging project config");
                figment = figment.merge(Toml::file(&path));
                break;
            }
        }

        // Explicit config path (highest priority)
        if let Some(path) = config_path {
            debug!(path = %path.display(), "merging explicit config");
            figment = figment.merge(Toml::file(path));
        }

        figment.extract().map_err(Box::new)
    }

    /// Load only the built-in defaults (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns `$XDG_CONFIG_HOME/kokoro-check/config.toml` if set,
    /// otherwise `~/.config/kokoro-check/config.toml`.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("kokoro-check").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        for filename in &["kokoro.toml", ".kokoro.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                return Some(path);
            }
        }
        None
    }

    /// Print the config file locations being used (for --show-config)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./kokoro.toml or ./.kokoro.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in question set");
    }
}
