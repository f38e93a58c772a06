//! Configuration management for the equipment tracker

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
}

/// A color group seeded into the system catalog at startup
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct SystemSeed {
    pub name: String,
    pub color: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct TrackerConfig {
    /// PIN required by admin routes; admin routes are open when unset
    pub admin_pin: Option<String>,
    /// Note recorded for items returned by work order without a report
    pub default_check_in_note: String,
    pub systems: Vec<SystemSeed>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub tracker: TrackerConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // TRACKER_SERVER__PORT=9000, TRACKER_TRACKER__ADMIN_PIN=1234
            .add_source(
                Environment::with_prefix("TRACKER")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("tracker.admin_pin", env::var("ADMIN_PIN").ok())?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            admin_pin: None,
            default_check_in_note: "Returned with work order".to_string(),
            systems: vec![
                SystemSeed { name: "Blue".to_string(), color: "#1e88e5".to_string() },
                SystemSeed { name: "Red".to_string(), color: "#e53935".to_string() },
                SystemSeed { name: "Green".to_string(), color: "#43a047".to_string() },
                SystemSeed { name: "Yellow".to_string(), color: "#fdd835".to_string() },
            ],
        }
    }
}
