use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{KrpError, Result};
use crate::format::DocumentFormat;

/// Key release policy configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KrpConfig {
    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,

    /// How the evaluator reports failing sub-checks
    #[serde(default)]
    pub mode: EvaluationMode,
}

impl KrpConfig {
    /// Load configuration from a JSON or YAML file.
    ///
    /// Files ending in `.yaml` or `.yml` are parsed as YAML, anything
    /// else as JSON.
    pub fn from_file(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let config = match DocumentFormat::from_path(path) {
            DocumentFormat::Json => serde_json::from_str(&data)?,
            DocumentFormat::Yaml => serde_yaml::from_str(&data)?,
        };
        Ok(config)
    }
}

/// Evaluation mode.
///
/// Both modes produce the same verdict; they only differ in how many
/// violations are reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EvaluationMode {
    /// Stop at the first failing sub-check
    #[default]
    FailFast,

    /// Evaluate every sub-check and report every violation
    CollectAll,
}

impl std::fmt::Display for EvaluationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FailFast => write!(f, "fail-fast"),
            Self::CollectAll => write!(f, "collect-all"),
        }
    }
}

impl std::str::FromStr for EvaluationMode {
    type Err = KrpError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "fail-fast" => Ok(Self::FailFast),
            "collect-all" => Ok(Self::CollectAll),
            _ => Err(KrpError::ConfigError(format!(
                "unknown evaluation mode: '{}' (supported: fail-fast, collect-all)",
                s
            ))),
        }
    }
}

/// Log level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = KrpError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(KrpError::ConfigError(format!("unknown log level: '{}'", s))),
        }
    }
}
