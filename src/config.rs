//! User configuration (`config.toml`).
//!
//! Resolution order: `--config <path>`, then `$CODESPACE_CONFIG`, then
//! `<config dir>/codespace/config.toml`, then built-in defaults. An explicitly
//! named file must exist; the default location may be absent.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::constants::{HISTORY_CAP, MAX_SOURCE_BYTES, PAGE_SIZE};
use crate::playground::{DelayRange, SimulatedRunner};

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "CODESPACE_CONFIG";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid config:\n  - {}", .0.join("\n  - "))]
    Invalid(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Items per result page.
    pub page_size: usize,
    /// Playground records kept.
    pub history_cap: usize,
    /// Simulated execution latency.
    pub delay: DelayRange,
    pub max_source_bytes: usize,
    /// Directory of YAML topic modules replacing the bundled content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
            history_cap: HISTORY_CAP,
            delay: DelayRange::default(),
            max_source_bytes: MAX_SOURCE_BYTES,
            content_dir: None,
        }
    }
}

impl Config {
    /// Resolve and load the configuration.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
            return Self::from_file(Path::new(&path));
        }
        match default_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Reject values the rest of the program cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut problems = Vec::new();
        if self.page_size == 0 {
            problems.push("page_size must be at least 1".to_string());
        }
        if self.history_cap == 0 {
            problems.push("history_cap must be at least 1".to_string());
        }
        if self.delay.min_ms > self.delay.max_ms {
            problems.push(format!(
                "delay.min_ms ({}) is greater than delay.max_ms ({})",
                self.delay.min_ms, self.delay.max_ms
            ));
        }
        if self.max_source_bytes == 0 {
            problems.push("max_source_bytes must be at least 1".to_string());
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(problems))
        }
    }

    pub fn runner(&self) -> SimulatedRunner {
        SimulatedRunner::new(self.delay, self.max_source_bytes)
    }
}

/// `<config dir>/codespace/config.toml`, when the platform has a config dir.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("codespace").join("config.toml"))
}
