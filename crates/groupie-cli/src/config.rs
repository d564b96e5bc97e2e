use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default backend for the surrounding application.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Configuration for groupie.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (GROUPIE_* prefix)
/// 3. Config file (~/.config/groupie/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the Groupie Tracker backend.
    ///
    /// Not used for searching; kept here so every consumer of the catalog
    /// reads it from one place.
    ///
    /// Can be set via:
    /// - ENV: GROUPIE_API_BASE_URL
    /// - Config: api_base_url = "..."
    /// - Default: http://localhost:8080
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Path to the artist catalog (JSON array of artists).
    ///
    /// Can be set via:
    /// - CLI: --data /path/to/artists.json
    /// - ENV: GROUPIE_DATA_PATH
    /// - Config: data_path = "/path/to/artists.json"
    /// - Default: ~/.local/share/groupie/artists.json
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logger settings, applied once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of: trace, debug, info, warn, error.
    pub level: String,
    pub coloured: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from("warn"),
            coloured: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            data_path: default_data_path(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/groupie/config.toml
    /// Reads environment variables with GROUPIE_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        let mut builder = Confygery::new()
            .context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path.to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder.add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("groupie");
        builder.add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build()
            .context("Failed to build configuration")?;

        Ok(config)
    }

    /// Load configuration, overriding the catalog path.
    ///
    /// This is used when the --data CLI flag is provided.
    pub fn load_with_data_path(data_path: PathBuf) -> Result<Self> {
        let mut config = Self::load()?;
        config.data_path = data_path;
        Ok(config)
    }
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

/// Returns: ~/.local/share/groupie/artists.json (or platform equivalent)
fn default_data_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("groupie")
        .join("artists.json")
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/groupie/config.toml
/// - macOS: ~/Library/Application Support/groupie/config.toml
/// - Windows: %APPDATA%\groupie\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("groupie")
        .join("config.toml")
}

pub fn example_config() -> &'static str {
    r#"# Groupie Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (GROUPIE_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Base URL of the Groupie Tracker backend
#
# Can also be set via:
# - Environment: GROUPIE_API_BASE_URL=https://example.org
api_base_url = "http://localhost:8080"

# Path to the artist catalog, a JSON array as served by /artists
#
# Can also be set via:
# - CLI: groupie --data /custom/artists.json search queen
# - Environment: GROUPIE_DATA_PATH=/custom/artists.json
#
# Default: Platform-specific data directory
#data_path = "/path/to/artists.json"

[logging]
# trace, debug, info, warn or error
level = "warn"
coloured = true
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .context("Failed to create config directory")?;
    }

    std::fs::write(&config_path, example_config())
        .context("Failed to write config file")?;

    Ok(true)
}
