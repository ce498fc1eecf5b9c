//! Configuration management for fleet-sim
//!
//! Config stored at: ~/.config/fleet-sim/config.json

use std::path::{Path, PathBuf};

use fleet_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Log level filter (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Roster used when a command is not given one
    #[serde(default)]
    pub roster_path: Option<PathBuf>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            output_format: OutputFormat::default(),
            roster_path: None,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("fleet-sim");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from the default location, or defaults if absent
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let mut config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
            if config.validate().is_err() {
                warn!(
                    path = %path.display(),
                    log_level = %config.log_level,
                    "unknown log level in config, using default"
                );
                config.log_level = default_log_level();
            }
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .map_err(|e| ConfigError::SaveError(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }

    /// Set the log level after checking it is a known level
    pub fn set_log_level(&mut self, level: &str) -> Result<()> {
        let level = level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::ParseError(format!(
                "unknown log level '{}', expected one of {}",
                level,
                LOG_LEVELS.join(", ")
            ))
            .into());
        }
        self.log_level = level;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if LOG_LEVELS.contains(&self.log_level.as_str()) {
            Ok(())
        } else {
            Err(ConfigError::ParseError(format!("unknown log level '{}'", self.log_level)).into())
        }
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Fleet Sim Configuration")?;
        writeln!(f, "=======================")?;
        writeln!(f)?;
        writeln!(f, "Log level:      {}", self.log_level)?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        writeln!(
            f,
            "Roster:         {}",
            self.roster_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(none)".to_string())
        )?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}
