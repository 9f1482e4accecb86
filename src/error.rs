// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Error types for the friends cache

use thiserror::Error;

/// Main application error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Attribute update for an entity that was never added
    #[error("Entity not found: {0}")]
    NotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem error while reading a roster script
    #[error("IO error")]
    Io(#[from] std::io::Error),

    /// Malformed roster script
    #[error("Script error: {0}")]
    Script(#[from] serde_json::Error),

    /// Metrics encoding error
    #[error("Metrics error: {0}")]
    Metrics(String),
}

impl From<std::fmt::Error> for AppError {
    fn from(error: std::fmt::Error) -> Self {
        Self::Metrics(error.to_string())
    }
}

/// Convenient alias for Result with application error
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let err = AppError::NotFound("1423".to_string());
        assert_eq!(err.to_string(), "Entity not found: 1423");
    }

    #[test]
    fn test_config_error() {
        let err = AppError::Config("test error".to_string());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_metrics_error() {
        let err = AppError::Metrics("encoding failed".to_string());
        assert_eq!(err.to_string(), "Metrics error: encoding failed");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let parse_result = serde_json::from_str::<Vec<u64>>("[1,");
        assert!(parse_result.is_err());
        let app_err: AppError = parse_result.unwrap_err().into();
        assert!(matches!(app_err, AppError::Script(_)));
    }

    #[test]
    fn test_fmt_error_conversion() {
        let app_err: AppError = std::fmt::Error.into();
        assert!(matches!(app_err, AppError::Metrics(_)));
    }
}
