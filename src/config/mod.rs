//! Configuration management for harsnip
//!
//! Settings are layered:
//! 1. Default values (embedded in structs)
//! 2. TOML configuration file
//! 3. Environment variables (highest priority)
//!
//! # Environment Variables
//!
//! `HARSNIP__<section>__<key>`, for example:
//! - `HARSNIP__CONVERT__TARGET=python`
//! - `HARSNIP__CONVERT__OPTIONS__INDENT="    "`
//! - `HARSNIP__INPUT__MAX_BYTES=10MB`
//!
//! # Configuration File
//!
//! Loaded from `config/harsnip.toml` unless `HARSNIP_CONFIG` points elsewhere.

mod models;
mod sources;
mod validation;

pub use crate::humanize::ByteSize;
pub use models::{Config, ConvertConfig, InputConfig, TelemetryConfig};
pub use validation::{ValidationError, validate_indent};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] ValidationError),
}

impl Config {
    /// Load configuration from all sources (file + environment)
    pub fn load() -> Result<Self, ConfigError> {
        let config = sources::load()?;
        validation::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: std::path::PathBuf) -> Result<Self, ConfigError> {
        let config = sources::load_from_sources(path)?;
        validation::validate(&config)?;
        Ok(config)
    }
}
