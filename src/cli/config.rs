//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

use super::logging::LogFormat;

/// Address used when neither the CLI nor the config file names one.
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Notes file
    pub store: Option<PathBuf>,

    /// Address the server listens on
    pub bind: Option<String>,

    /// Log output format
    pub log_format: Option<LogFormat>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        Self::parse(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/notebox/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("notebox")
            .join("config.toml")
    }

    /// Resolve the notes file, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--store` argument
    /// 2. Config file `store` setting
    /// 3. `notes.json` in the platform data directory
    /// 4. `notes.json` in the current working directory
    pub fn store_path(&self, cli_store: Option<&PathBuf>) -> PathBuf {
        cli_store
            .cloned()
            .or_else(|| self.store.clone())
            .or_else(|| dirs::data_dir().map(|d| d.join("notebox").join("notes.json")))
            .unwrap_or_else(|| PathBuf::from("notes.json"))
    }

    /// Resolve the listen address: CLI `--bind`, then config, then
    /// [`DEFAULT_BIND`].
    pub fn bind_addr(&self, cli_bind: Option<&str>) -> String {
        cli_bind
            .map(str::to_string)
            .or_else(|| self.bind.clone())
            .unwrap_or_else(|| DEFAULT_BIND.to_string())
    }

    /// Resolve the log format: CLI `--log-format`, then config, then pretty.
    pub fn log_format(&self, cli_format: Option<LogFormat>) -> LogFormat {
        cli_format.or(self.log_format).unwrap_or_default()
    }
}
