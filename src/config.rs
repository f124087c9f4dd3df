// Configuration for the Parser Studio service client, UI and logging.
// Every field has a default so an empty or partial TOML file is valid.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::client::ServiceConfig;
use crate::error::{Result, StudioError};

pub const BASE_URL_ENV: &str = "PARSER_STUDIO_BASE_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Input poll interval of the TUI loop
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    #[serde(default)]
    pub show_examples_on_start: bool,

    /// Show the parser statistics strip when stats are available
    #[serde(default = "default_true")]
    pub show_stats: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            show_examples_on_start: false,
            show_stats: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log file; the terminal itself belongs to the TUI
    #[serde(default = "default_log_file")]
    pub file: PathBuf,

    /// Filter directive used when no env filter is set
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: default_log_file(),
            level: default_log_level(),
        }
    }
}

/// Master configuration combining all Parser Studio settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    pub fn from_toml_str(contents: &str, path: &Path) -> Result<Self> {
        toml::from_str(contents).map_err(|source| StudioError::InvalidConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read `path` when given; otherwise start from defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(StudioError::ConfigNotFound(path.to_path_buf()));
                }
                let contents = std::fs::read_to_string(path)?;
                Self::from_toml_str(&contents, path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply environment overrides through `lookup` (normally `std::env::var`).
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = lookup(BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.service.base_url = base_url;
        }
    }
}

fn default_tick_rate_ms() -> u64 {
    50
}

fn default_true() -> bool {
    true
}

fn default_log_file() -> PathBuf {
    PathBuf::from("parser-studio.log")
}

fn default_log_level() -> String {
    "info".to_string()
}
