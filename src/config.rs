//! Configuration for the disha-view client
//!
//! Loads configuration from a TOML file. Every section and field has a
//! default so the visualizer comes up with zero setup; a config file only
//! needs the values it wants to override.

use crate::error::Result;
use crate::transport::RetryPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Top-level application configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub connection: ConnectionConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// Sensor daemon connection settings
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ConnectionConfig {
    /// Sensor daemon host
    pub host: String,
    /// Sensor daemon TCP port
    pub port: u16,
    /// Delay between connection attempts
    pub retry_interval_secs: f64,
    /// Give up after this many attempts; absent means retry forever
    pub max_connect_attempts: Option<u32>,
    /// Socket read timeout per render frame
    ///
    /// Bounds how long one stream poll may hold up drawing when the daemon
    /// goes quiet.
    pub read_timeout_ms: u64,
}

/// Canvas and frame pacing settings
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Canvas width in terminal cells
    pub width: u16,
    /// Canvas height in terminal cells
    pub height: u16,
    /// Present cadence; the event poll waits this long each frame
    pub frame_interval_ms: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (trace, debug, info, warn, error)
    pub level: String,
}

impl ConnectionConfig {
    /// Daemon address as `host:port`
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Socket read timeout as a `Duration`
    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }

    /// Dial retry policy derived from this config
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            interval: Duration::from_secs_f64(self.retry_interval_secs),
            max_attempts: self.max_connect_attempts,
        }
    }
}

impl DisplayConfig {
    /// Frame interval as a `Duration`
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            host: "192.168.128.223".to_string(),
            port: 2000,
            retry_interval_secs: 1.0,
            max_connect_attempts: None,
            read_timeout_ms: 15,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 96,
            height: 36,
            frame_interval_ms: 16,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    ///
    /// # Example
    /// ```no_run
    /// use disha_view::config::AppConfig;
    ///
    /// let config = AppConfig::from_file("disha-view.toml")?;
    /// # Ok::<(), disha_view::Error>(())
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents =
            toml::to_string_pretty(self).map_err(|e| crate::error::Error::Other(e.to_string()))?;
        fs::write(path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.connection.host, "192.168.128.223");
        assert_eq!(config.connection.port, 2000);
        assert_eq!(config.connection.address(), "192.168.128.223:2000");
        assert_eq!(config.connection.retry_interval_secs, 1.0);
        assert_eq!(config.connection.max_connect_attempts, None);
        assert_eq!(config.display.width, 96);
        assert_eq!(config.display.height, 36);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_retry_policy_from_config() {
        let mut config = ConnectionConfig::default();
        config.retry_interval_secs = 0.5;
        config.max_connect_attempts = Some(3);

        let policy = config.retry_policy();
        assert_eq!(policy.interval, Duration::from_millis(500));
        assert_eq!(policy.max_attempts, Some(3));
    }

    #[test]
    fn test_toml_deserialization() {
        let toml_content = r#"
[connection]
host = "10.0.0.7"
port = 2020
retry_interval_secs = 0.25
max_connect_attempts = 10

[display]
width = 120
height = 40

[logging]
level = "debug"
"#;

        let config: AppConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.connection.host, "10.0.0.7");
        assert_eq!(config.connection.port, 2020);
        assert_eq!(config.connection.max_connect_attempts, Some(10));
        assert_eq!(config.display.width, 120);
        assert_eq!(config.logging.level, "debug");
        // Unset fields keep their defaults
        assert_eq!(config.display.frame_interval_ms, 16);
        assert_eq!(config.connection.read_timeout_ms, 15);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("[connection]\nport = 9000\n").unwrap();
        assert_eq!(config.connection.port, 9000);
        assert_eq!(config.connection.host, "192.168.128.223");
        assert_eq!(config.display.height, 36);
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("disha-view.toml");

        let mut config = AppConfig::default();
        config.connection.host = "127.0.0.1".to_string();
        config.to_file(&path).unwrap();

        let loaded = AppConfig::from_file(&path).unwrap();
        assert_eq!(loaded.connection.host, "127.0.0.1");
        assert_eq!(loaded.connection.port, config.connection.port);
    }
}
