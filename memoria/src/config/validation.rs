//! Configuration validation utilities.
//!
//! This module provides validation functions for configuration values.

use super::ConfigError;
use super::models::*;

/// Validate the entire configuration.
pub fn validate_config(config: &MemoriaConfig) -> Result<(), ConfigError> {
    validate_identity_config(&config.identity)?;
    validate_search_config(&config.search)?;
    validate_storage_config(&config.storage)?;

    Ok(())
}

fn validate_identity_config(config: &IdentityConfig) -> Result<(), ConfigError> {
    let code = config.partner_code.trim();
    if code.is_empty() {
        return Err(ConfigError::ValidationError(
            "Partner code cannot be empty".to_string(),
        ));
    }
    if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ConfigError::ValidationError(format!(
            "Partner code must be ASCII letters or digits, got '{}'",
            config.partner_code
        )));
    }

    if config.max_assign_attempts == 0 {
        return Err(ConfigError::ValidationError(
            "max_assign_attempts must be at least 1".to_string(),
        ));
    }

    Ok(())
}

fn validate_search_config(config: &SearchConfig) -> Result<(), ConfigError> {
    if config.result_limit == 0 {
        return Err(ConfigError::ValidationError(
            "Search result_limit must be at least 1".to_string(),
        ));
    }

    Ok(())
}

/// Validate storage configuration.
fn validate_storage_config(config: &StorageConfig) -> Result<(), ConfigError> {
    if config.backend == StorageBackend::Memory {
        return Ok(());
    }

    if config.data_dir.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "Data directory cannot be empty".to_string(),
        ));
    }

    if config.records_file.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "Records file name cannot be empty".to_string(),
        ));
    }

    Ok(())
}
