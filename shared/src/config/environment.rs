//! Deployment environment and the log filter derived from it

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{env_parse, env_string};

/// Where the process is running. Selects CORS strictness and the default
/// log verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    pub fn is_production(&self) -> bool {
        *self == Environment::Production
    }

    pub fn is_development(&self) -> bool {
        *self == Environment::Development
    }

    /// Reads `ENVIRONMENT`. Unknown values fall back to development.
    pub fn from_env() -> Self {
        env_parse("ENVIRONMENT").unwrap_or_default()
    }

    fn label(self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase();
        [
            Environment::Development,
            Environment::Staging,
            Environment::Production,
        ]
        .into_iter()
        .find(|env| {
            let label = env.label();
            normalized == label || (normalized.len() >= 3 && label.starts_with(&normalized))
        })
        .ok_or_else(|| format!("unknown environment `{raw}`"))
    }
}

/// Default `env_logger` filter, used only when `RUST_LOG` is unset.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
        }
    }
}

impl LoggingConfig {
    /// `debug` in development, `info` elsewhere. `LOG_LEVEL` overrides both.
    pub fn for_environment(env: Environment) -> Self {
        let fallback = if env.is_development() { "debug" } else { "info" };
        Self {
            level: env_string("LOG_LEVEL").unwrap_or_else(|| fallback.to_owned()),
        }
    }
}
