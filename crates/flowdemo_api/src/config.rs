//! Server configuration read from environment variables.
//!
//! | Variable                        | Default           |
//! |---------------------------------|-------------------|
//! | `PORT`                          | `3000`            |
//! | `FLOWDEMO_HOST`                 | `127.0.0.1`       |
//! | `FLOWDEMO_LOG_LEVEL`            | by build mode     |
//! | `FLOWDEMO_LOG_DIR`              | unset (stderr)    |
//! | `FLOWDEMO_SIMULATED_LATENCY_MS` | `0`               |

use flowdemo_core::default_log_level;
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "127.0.0.1";
const MAX_SIMULATED_LATENCY_MS: u64 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub simulated_latency: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_level: default_log_level().to_string(),
            log_dir: None,
            simulated_latency: Duration::ZERO,
        }
    }
}

impl ServerConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let defaults = Self::default();

        let port = match read("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| format!("PORT must be a port number, got `{raw}`"))?,
            None => defaults.port,
        };

        let simulated_latency = match read("FLOWDEMO_SIMULATED_LATENCY_MS") {
            Some(raw) => {
                let millis = raw
                    .parse::<u64>()
                    .ok()
                    .filter(|value| *value <= MAX_SIMULATED_LATENCY_MS)
                    .ok_or_else(|| {
                        format!(
                            "FLOWDEMO_SIMULATED_LATENCY_MS must be 0..={MAX_SIMULATED_LATENCY_MS}, got `{raw}`"
                        )
                    })?;
                Duration::from_millis(millis)
            }
            None => defaults.simulated_latency,
        };

        Ok(Self {
            host: read("FLOWDEMO_HOST").unwrap_or(defaults.host),
            port,
            log_level: read("FLOWDEMO_LOG_LEVEL").unwrap_or(defaults.log_level),
            log_dir: read("FLOWDEMO_LOG_DIR"),
            simulated_latency,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|err| format!("invalid bind address `{}:{}`: {err}", self.host, self.port))
    }
}
