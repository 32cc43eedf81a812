//! Infrastructure layer with configuration adapters.

/// Configuration handling.
pub mod config;

pub use config::{AppConfig, CliArgs, ConfigError};
