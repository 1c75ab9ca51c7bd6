//! Configuration management for crane-quote
//!
//! Config stored at: ~/.config/crane-quote/config.json

use crate::cli::OutputFormat;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Region used when a command does not name one
    #[serde(default = "default_region")]
    pub default_region: String,

    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// Contingency added to project estimates, in percent
    #[serde(default = "default_contingency_percent")]
    pub contingency_percent: u32,

    /// Quote transport there and back
    #[serde(default = "default_true")]
    pub include_return_trip: bool,
}

fn default_region() -> String {
    "midlands".to_string()
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_contingency_percent() -> u32 {
    10
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_region: default_region(),
            output_format: default_output_format(),
            contingency_percent: default_contingency_percent(),
            include_return_trip: true,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("no config directory on this platform".to_string()))?
            .join("crane-quote");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load the user config, falling back to defaults if it cannot be read
    pub fn load_or_default() -> Self {
        match Self::config_path() {
            Ok(path) => Self::load_or_default_from(&path),
            Err(e) => {
                tracing::warn!(error = %e, "using default configuration");
                Config::default()
            }
        }
    }

    /// Load config from `path`, falling back to defaults if it cannot be read
    pub fn load_or_default_from(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|e| {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "ignoring unreadable config file, using defaults"
            );
            Config::default()
        })
    }

    /// Save config to `path`, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Crane Quote Configuration")?;
        writeln!(f, "=========================")?;
        writeln!(f)?;
        writeln!(f, "Default region:  {}", self.default_region)?;
        writeln!(f, "Output format:   {}", self.output_format)?;
        writeln!(f, "Contingency:     {}%", self.contingency_percent)?;
        writeln!(f, "Return trip:     {}", self.include_return_trip)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:     {}", path.display())?;
        }

        Ok(())
    }
}
