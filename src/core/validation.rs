//! Validation utilities for CLI arguments and configuration values

use crate::core::error_handling::ContextualError;
use crate::core::logging::LOG_FORMATS;

/// Log levels accepted by `--log-level` and the config file
pub const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// A user-facing validation failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl ContextualError for ValidationError {
    fn is_user_actionable(&self) -> bool {
        true
    }

    fn user_message(&self) -> Option<&str> {
        Some(&self.message)
    }
}

/// Validate positive integer value
pub fn validate_positive_int(value: &str) -> Result<usize, ValidationError> {
    match value.trim().parse::<usize>() {
        Ok(0) => Err(ValidationError::new("Value must be greater than 0")),
        Ok(n) => Ok(n),
        Err(_) => Err(ValidationError::new(format!(
            "'{}' is not a valid positive integer",
            value
        ))),
    }
}

/// Validate a log level name, returning it lowercased
pub fn validate_log_level(level: &str) -> Result<String, ValidationError> {
    let lowered = level.to_lowercase();
    if LOG_LEVELS.contains(&lowered.as_str()) {
        Ok(lowered)
    } else {
        Err(ValidationError::new(format!(
            "Invalid log level '{}' (expected one of: {})",
            level,
            LOG_LEVELS.join(", ")
        )))
    }
}

/// Validate a log format name, returning it lowercased
pub fn validate_log_format(format: &str) -> Result<String, ValidationError> {
    let lowered = format.to_lowercase();
    if LOG_FORMATS.contains(&lowered.as_str()) {
        Ok(lowered)
    } else {
        Err(ValidationError::new(format!(
            "Invalid log format '{}' (expected one of: {})",
            format,
            LOG_FORMATS.join(", ")
        )))
    }
}
