//! Infrastructure layer: document parsing, configuration, logging and persistence
//!
//! This module provides the HTML-facing size discovery parsers together with
//! the ambient services the application runs on.

pub mod config; // Layered configuration loading
pub mod logging; // Logging infrastructure
pub mod measurement_store; // Last-entered measurements
pub mod parsing; // Size discovery over scraper documents
pub mod parsing_error; // Parser construction errors

// Re-export commonly used items
pub use config::{AppConfig, ConfigError, ConfigManager, LoggingConfig, MessagingConfig, StorageConfig};
pub use logging::init_logging_with_config;
pub use measurement_store::{InMemoryMeasurementStore, JsonFileMeasurementStore, MeasurementStore};
pub use parsing::{ParsingConfig, SizeInfoLocator, SizeInfoSource};
pub use parsing_error::{ParsingError, ParsingResult};
