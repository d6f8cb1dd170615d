//! Configuration infrastructure
//!
//! Layered loading through the `config` crate: built-in defaults, then an
//! optional JSON/TOML file, then `SIZE_ADVISOR__*` environment variables
//! (double underscore separates nested keys, e.g.
//! `SIZE_ADVISOR__LOGGING__LEVEL=debug`).

use crate::domain::GenericSizeChart;
use crate::infrastructure::parsing::ParsingConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tokio::fs;
use tracing::info;

const ENV_PREFIX: &str = "SIZE_ADVISOR";
const APP_DIR_NAME: &str = "size-advisor";
const CONFIG_FILE_NAME: &str = "size_advisor_config.json";
const MEASUREMENTS_FILE_NAME: &str = "measurements.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load config: {source}")]
    Load {
        #[from]
        source: config::ConfigError,
    },

    #[error("Configuration validation failed: {message}")]
    Validation { message: String },
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Page parsing rules
    pub parsing: ParsingConfig,

    /// Generic chest chart used as the recommendation fallback
    pub chart: GenericSizeChart,

    /// Request/response adapter settings
    pub messaging: MessagingConfig,

    /// Where the last measurements are kept
    pub storage: StorageConfig,
}

/// Logging configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: "error", "warn", "info", "debug", "trace"
    pub level: String,

    /// Enable JSON formatted logs
    pub json_format: bool,

    /// Enable console output
    pub console_output: bool,

    /// Enable file output
    pub file_output: bool,

    /// Directory for log files; defaults to `logs/` beside the executable
    pub log_dir: Option<PathBuf>,

    /// Log file name
    pub file_name: String,

    /// Module-specific log level filters (e.g., "scraper": "warn")
    pub module_filters: HashMap<String, String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::LOG_LEVEL.to_string(),
            json_format: defaults::LOG_JSON_FORMAT,
            console_output: defaults::LOG_CONSOLE_OUTPUT,
            file_output: defaults::LOG_FILE_OUTPUT,
            log_dir: None,
            file_name: defaults::LOG_FILE_NAME.to_string(),
            module_filters: {
                let mut filters = HashMap::new();
                filters.insert("html5ever".to_string(), "warn".to_string());
                filters.insert("selectors".to_string(), "warn".to_string());
                filters
            },
        }
    }
}

/// Request/response adapter settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessagingConfig {
    /// Pending requests the page agent queues
    pub channel_capacity: usize,

    /// Give up waiting for a reply after this long; 0 waits forever
    pub response_timeout_ms: u64,
}

impl MessagingConfig {
    pub const fn response_timeout(&self) -> Option<Duration> {
        if self.response_timeout_ms == 0 {
            None
        } else {
            Some(Duration::from_millis(self.response_timeout_ms))
        }
    }
}

impl Default for MessagingConfig {
    fn default() -> Self {
        Self {
            channel_capacity: defaults::CHANNEL_CAPACITY,
            response_timeout_ms: defaults::RESPONSE_TIMEOUT_MS,
        }
    }
}

/// Measurement persistence settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    /// Measurements file; defaults to the app data directory
    pub measurements_path: Option<PathBuf>,
}

impl StorageConfig {
    pub fn resolved_measurements_path(&self) -> Result<PathBuf> {
        match &self.measurements_path {
            Some(path) => Ok(path.clone()),
            None => Ok(ConfigManager::get_app_data_dir()?.join(MEASUREMENTS_FILE_NAME)),
        }
    }
}

impl AppConfig {
    /// Load defaults, overlay `path` if it exists, then the environment.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        Self::layered(path, Self::environment())
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
    }

    fn layered(path: &Path, environment: config::Environment) -> Result<Self, ConfigError> {
        let defaults = config::Config::try_from(&Self::default())?;
        let settings = config::Config::builder()
            .add_source(defaults)
            .add_source(config::File::from(path).required(false))
            .add_source(environment)
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let parsing = &self.parsing;

        if parsing.candidate_selectors.is_empty() {
            return Err(ConfigError::Validation {
                message: "parsing.candidate_selectors must not be empty".to_string(),
            });
        }

        if parsing.size_phrases.iter().any(|phrase| phrase.trim().is_empty()) {
            return Err(ConfigError::Validation {
                message: "parsing.size_phrases must not contain blank phrases".to_string(),
            });
        }

        for (name, keywords) in [
            ("chest", &parsing.measurement_keywords.chest),
            ("shoulders", &parsing.measurement_keywords.shoulders),
            ("length", &parsing.measurement_keywords.length),
        ] {
            if keywords.iter().any(|keyword| keyword.trim().is_empty()) {
                return Err(ConfigError::Validation {
                    message: format!("parsing.measurement_keywords.{name} contains a blank keyword"),
                });
            }
        }

        if self.messaging.channel_capacity == 0 {
            return Err(ConfigError::Validation {
                message: "messaging.channel_capacity must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

pub struct ConfigManager {
    pub config_path: PathBuf,
}

impl ConfigManager {
    /// Get the application configuration directory
    pub fn get_config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get user config directory")?
            .join(APP_DIR_NAME);

        Ok(config_dir)
    }

    /// Get application data directory
    pub fn get_app_data_dir() -> Result<PathBuf> {
        let data_dir = dirs::data_local_dir()
            .context("Failed to get user data directory")?
            .join(APP_DIR_NAME);

        Ok(data_dir)
    }

    /// Manager for the default configuration location
    pub fn new() -> Result<Self> {
        let config_path = Self::get_config_dir()?.join(CONFIG_FILE_NAME);
        Ok(Self { config_path })
    }

    pub const fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    /// Write the default configuration on first run, then load.
    pub async fn initialize_on_first_run(&self) -> Result<AppConfig> {
        if !self.config_path.exists() {
            info!("First run detected - writing default configuration");
            self.save_config(&AppConfig::default()).await?;
        }
        self.load_config()
    }

    pub fn load_config(&self) -> Result<AppConfig> {
        AppConfig::from_file(&self.config_path)
            .with_context(|| format!("Failed to load configuration from {:?}", self.config_path))
    }

    pub async fn save_config(&self, config: &AppConfig) -> Result<()> {
        if let Some(dir) = self.config_path.parent() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("Failed to create config directory: {dir:?}"))?;
        }

        let content = serde_json::to_string_pretty(config).context("Failed to serialize configuration")?;
        fs::write(&self.config_path, content)
            .await
            .with_context(|| format!("Failed to write configuration to {:?}", self.config_path))?;

        info!("Saved configuration to {:?}", self.config_path);
        Ok(())
    }
}

/// Default values
pub mod defaults {
    pub const LOG_LEVEL: &str = "info";
    pub const LOG_JSON_FORMAT: bool = false;
    pub const LOG_CONSOLE_OUTPUT: bool = true;
    pub const LOG_FILE_OUTPUT: bool = false;
    pub const LOG_FILE_NAME: &str = "size-advisor.log";

    pub const CHANNEL_CAPACITY: usize = 8;

    /// Matches a popup that stops waiting after a few seconds.
    pub const RESPONSE_TIMEOUT_MS: u64 = 5000;
}
