use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable naming an optional TOML settings file.
pub const CONFIG_ENV: &str = "SKILLCHECK_CONFIG";
/// Environment variable overriding the log filter directive.
pub const LOG_ENV: &str = "SKILLCHECK_LOG";
/// Environment variable overriding the log format.
pub const LOG_FORMAT_ENV: &str = "SKILLCHECK_LOG_FORMAT";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings file: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("unknown log format '{0}' (expected pretty, json or off)")]
    InvalidFormat(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Pretty,
    Json,
    Off,
}

impl FromStr for LogFormat {
    type Err = SettingsError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            "off" => Ok(LogFormat::Off),
            other => Err(SettingsError::InvalidFormat(other.to_string())),
        }
    }
}

/// Diagnostic logging settings. Logs never go to stdout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// `tracing` filter directive (ex.: `warn`, `skillcheck_core=debug`).
    pub level: String,
    pub format: LogFormat,
    /// Append logs to this file instead of stderr.
    pub file: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Pretty,
            file: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    log: LogSettings,
}

impl LogSettings {
    /// Resolve settings from the process environment.
    pub fn from_env() -> Result<Self, SettingsError> {
        let config = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        let level = std::env::var(LOG_ENV).ok();
        let format = std::env::var(LOG_FORMAT_ENV).ok();
        Self::resolve(config.as_deref(), level, format)
    }

    /// Defaults, then the optional settings file, then explicit overrides.
    pub fn resolve(
        config: Option<&Path>,
        level: Option<String>,
        format: Option<String>,
    ) -> Result<Self, SettingsError> {
        let mut settings = match config {
            Some(path) => {
                let content =
                    std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
                        path: path.to_path_buf(),
                        source,
                    })?;
                Self::from_toml_str(&content)?
            }
            None => Self::default(),
        };

        if let Some(level) = level.filter(|level| !level.trim().is_empty()) {
            settings.level = level;
        }
        if let Some(format) = format {
            settings.format = format.parse()?;
        }
        Ok(settings)
    }

    /// Parse the `[log]` table of a settings file.
    pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
        let file: SettingsFile = toml::from_str(content)?;
        Ok(file.log)
    }
}
