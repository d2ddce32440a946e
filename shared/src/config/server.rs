//! Server configuration module

use serde::{Deserialize, Serialize};

use super::{env_parse, env_string};

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    #[serde(default)]
    pub workers: usize,

    /// Maximum JSON payload size in bytes
    #[serde(default = "default_max_payload_size")]
    pub max_payload_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 8080,
            workers: 0,
            max_payload_size: default_max_payload_size(),
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Load a server configuration whose variables share a prefix.
    ///
    /// With prefix `OTP` this reads `OTP_SERVER_HOST`, `OTP_SERVER_PORT` and
    /// `OTP_SERVER_WORKERS`. A bare `PORT` is honoured when the prefixed port
    /// is unset, matching how hosting platforms inject the listen port.
    pub fn from_env(prefix: &str, default_port: u16) -> Self {
        let defaults = Self::default();
        Self {
            host: env_string(&format!("{}_SERVER_HOST", prefix)).unwrap_or(defaults.host),
            port: env_parse(&format!("{}_SERVER_PORT", prefix))
                .or_else(|| env_parse("PORT"))
                .unwrap_or(default_port),
            workers: env_parse(&format!("{}_SERVER_WORKERS", prefix)).unwrap_or(defaults.workers),
            max_payload_size: env_parse("MAX_PAYLOAD_SIZE").unwrap_or(defaults.max_payload_size),
        }
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsConfig {
    /// Allowed origins; empty means "any" outside production
    #[serde(default)]
    pub allowed_origins: Vec<String>,

    /// Max age for preflight cache in seconds
    #[serde(default = "default_max_age")]
    pub max_age: usize,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![],
            max_age: default_max_age(),
        }
    }
}

impl CorsConfig {
    /// Load from `ALLOWED_ORIGINS` (comma separated) and `CORS_MAX_AGE`
    pub fn from_env() -> Self {
        let allowed_origins = env_string("ALLOWED_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Self {
            allowed_origins,
            max_age: env_parse("CORS_MAX_AGE").unwrap_or_else(default_max_age),
        }
    }
}

fn default_max_payload_size() -> usize {
    256 * 1024 // 256 KB
}

fn default_max_age() -> usize {
    3600
}
