//! Configuration builder.
//!
//! This module provides a builder pattern API for creating configurations.

use super::{Result, models::*, validation};
use std::path::{Path, PathBuf};

/// Builder for creating MemoriaConfig instances.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    config: MemoriaConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with default values.
    pub fn new() -> Self {
        Self {
            config: MemoriaConfig::default(),
        }
    }

    /// Start from an existing configuration.
    pub fn from_config(config: MemoriaConfig) -> Self {
        Self { config }
    }

    /// Set the base data directory.
    pub fn with_data_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.storage.data_dir = path.as_ref().to_path_buf();
        self
    }

    /// Set the record file name, relative to the data directory.
    pub fn with_records_file<P: AsRef<Path>>(mut self, file: P) -> Self {
        self.config.storage.records_file = file.as_ref().to_path_buf();
        self
    }

    /// Select the record store backend.
    pub fn with_storage_backend(mut self, backend: StorageBackend) -> Self {
        self.config.storage.backend = backend;
        self
    }

    /// Use the in-memory record store (good for testing)
    pub fn with_memory_storage(self) -> Self {
        self.with_storage_backend(StorageBackend::Memory)
    }

    /// Set the partner code used in assigned ids.
    pub fn with_partner_code(mut self, code: impl Into<String>) -> Self {
        self.config.identity.partner_code = code.into();
        self
    }

    /// Set how many ids are tried when the store reports collisions.
    pub fn with_max_assign_attempts(mut self, attempts: u32) -> Self {
        self.config.identity.max_assign_attempts = attempts;
        self
    }

    /// Set the maximum number of search candidates.
    pub fn with_result_limit(mut self, limit: usize) -> Self {
        self.config.search.result_limit = limit;
        self
    }

    /// Set the search debounce interval in milliseconds.
    pub fn with_debounce_ms(mut self, debounce_ms: u64) -> Self {
        self.config.search.debounce_ms = debounce_ms;
        self
    }

    /// Set the log level.
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.config.logging.level = level;
        self
    }

    /// Set the log format.
    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.config.logging.format = format;
        self
    }

    /// Configure logging to a file.
    pub fn with_log_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.logging.file = Some(path.as_ref().to_path_buf());
        self.config.logging.stdout = false;
        self
    }

    /// Create a configuration for development with an in-memory store.
    pub fn development() -> Self {
        Self::new()
            .with_memory_storage()
            .with_log_level(LogLevel::Debug)
    }

    /// Create a configuration for testing.
    ///
    /// In-memory store, no debounce, test-specific data directory.
    pub fn testing() -> Self {
        Self::development()
            .with_data_dir(PathBuf::from("./test_data"))
            .with_debounce_ms(0)
    }

    /// Build the configuration, validating it in the process.
    pub fn build(self) -> Result<MemoriaConfig> {
        validation::validate_config(&self.config)?;

        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
