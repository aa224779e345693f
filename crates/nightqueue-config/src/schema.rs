//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;

/// Public URL the service is deployed under; the keepalive pinger targets it.
pub const DEFAULT_SELF_URL: &str = "https://nightbotqueue.vercel.app/";

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub keepalive: KeepaliveConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Render the effective configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String, crate::ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

/// Where the queue is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// JSON file holding the queue, rewritten on every mutation.
    #[serde(default = "default_queue_file")]
    pub queue_file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            queue_file: default_queue_file(),
        }
    }
}

fn default_queue_file() -> PathBuf {
    PathBuf::from("queue.json")
}

/// Self-ping settings used while the queue is open.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeepaliveConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_self_url")]
    pub url: Url,

    /// Seconds between pings.
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for KeepaliveConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            url: default_self_url(),
            interval_secs: default_interval_secs(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_self_url() -> Url {
    Url::parse(DEFAULT_SELF_URL).expect("default self URL is valid")
}

fn default_interval_secs() -> u64 {
    300
}

fn default_timeout_secs() -> u64 {
    30
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence.
    #[serde(default = "default_level")]
    pub level: String,

    /// Also write daily-rotated log files.
    #[serde(default)]
    pub file: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            file: false,
            dir: None,
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

impl LoggingConfig {
    /// Directory for log files, falling back to the platform data directory.
    pub fn log_dir(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(|| {
            dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("nightqueue")
                .join("logs")
        })
    }
}
