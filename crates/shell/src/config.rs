//! Process configuration read from environment variables.

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use glassdesk_observability::{LogFormat, ObservabilityConfig};

pub const PLATFORM_VAR: &str = "GLASSDESK_PLATFORM";
pub const INVENTORY_SEED_VAR: &str = "GLASSDESK_INVENTORY_SEED";
pub const LOG_FORMAT_VAR: &str = "GLASSDESK_LOG_FORMAT";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown platform {0:?} (expected ios, android or web)")]
    UnknownPlatform(String),

    #[error("unknown log format {0:?} (expected json or pretty)")]
    UnknownLogFormat(String),
}

/// Runtime platform flag; selects the navigation chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Platform {
    #[default]
    Ios,
    Android,
    Web,
}

impl FromStr for Platform {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ios" => Ok(Platform::Ios),
            "android" => Ok(Platform::Android),
            "web" => Ok(Platform::Web),
            _ => Err(ConfigError::UnknownPlatform(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub platform: Platform,
    /// JSON seed file; `None` means the built-in fixture.
    pub inventory_seed: Option<PathBuf>,
    pub observability: ObservabilityConfig,
    /// Variables that were unset and fell back to a default. Logged once
    /// tracing is up.
    pub defaulted: Vec<&'static str>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut defaulted = Vec::new();

        let platform = match lookup(PLATFORM_VAR) {
            Some(raw) => raw.parse()?,
            None => {
                defaulted.push(PLATFORM_VAR);
                Platform::default()
            }
        };

        let format = match lookup(LOG_FORMAT_VAR) {
            None => LogFormat::Json,
            Some(raw) => match raw.trim().to_lowercase().as_str() {
                "json" => LogFormat::Json,
                "pretty" => LogFormat::Pretty,
                _ => return Err(ConfigError::UnknownLogFormat(raw)),
            },
        };

        let inventory_seed = lookup(INVENTORY_SEED_VAR)
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            platform,
            inventory_seed,
            observability: ObservabilityConfig {
                format,
                ..ObservabilityConfig::default()
            },
            defaulted,
        })
    }
}
