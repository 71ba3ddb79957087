//! Configuration system for Memoria.
//!
//! Configuration is loaded from serialized defaults, then the first default
//! file found, then `MEMORIA_`-prefixed environment variables. Every load is
//! validated.

mod builder;
mod loader;
mod models;
mod validation;

pub use builder::ConfigBuilder;
pub use loader::ConfigLoader;
pub use models::*;
pub use validation::validate_config;

/// Default configuration file names that the system will look for
pub const DEFAULT_CONFIG_FILES: &[&str] = &[
    "memoria.toml",
    "memoria.yaml",
    "memoria.yml",
    "memoria.json",
    ".memoria/config.toml",
    ".memoria/config.yaml",
    ".memoria/config.yml",
    ".memoria/config.json",
];

/// Environment variable prefix for Memoria configuration
pub const ENV_PREFIX: &str = "MEMORIA_";

/// Configuration error type
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error occurred during file loading
    #[error("Failed to load configuration file: {0}")]
    FileLoadError(String),

    /// Error occurred during validation
    #[error("Configuration validation error: {0}")]
    ValidationError(String),

    /// Error occurred during parsing
    #[error("Configuration parsing error: {0}")]
    ParseError(String),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
