use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_PROMPT: &str = "Enter your times:";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show the welcome text on start-up
    pub banner: bool,
    /// Echo START/END for each pair
    pub echo_pairs: bool,
    /// Line printed before each day's entry
    pub prompt: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { banner: true, echo_pairs: true, prompt: DEFAULT_PROMPT.to_string() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// env_logger filter used when RUST_LOG is unset
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "warn".to_string() }
    }
}

impl Config {
    /// Load from the platform config directory, falling back to defaults
    /// when no file exists there. Nothing is ever written back.
    pub fn load() -> Result<Self> {
        match get_config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load from an explicit path; the file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}

/// `config.toml` under the platform config directory, if one can be determined
pub fn get_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "punchcard", "punchcard")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}
