//! # Error Handling Module
//!
//! ## Purpose
//! Centralized error handling for the legal case analyzer, providing structured
//! error types and conversion utilities for all system components.
//!
//! ## Input/Output Specification
//! - **Input**: Error conditions from various system components
//! - **Output**: Structured error types with context and error chains
//! - **Error Categories**: Configuration, Catalog, Web Search, API
//!
//! ## Key Features
//! - Hierarchical error types with detailed context
//! - Automatic error conversion and chaining
//! - User-friendly error messages for API responses
//! - Recovery hints for transient failures
//!
//! Classification, statute mapping, and rationale generation are total
//! functions and never produce an error; only the web-search collaborator and
//! the outer surfaces (configuration loading, catalog file loading, API
//! validation) can fail.

use thiserror::Error;

/// Result type used throughout the application
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Error types for the legal case analyzer
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Internal system errors
    #[error("Internal error: {message}")]
    Internal { message: String },

    /// Validation errors
    #[error("Validation failed for field '{field}': {reason}")]
    ValidationFailed { field: String, reason: String },

    /// Statute catalog file could not be read or parsed
    #[error("Failed to load statute catalog from {source_path}: {details}")]
    CatalogLoad {
        source_path: String,
        details: String,
    },

    /// Web-search collaborator failure; propagated to the caller unmodified
    #[error("Web search failed for query '{query}': {details}")]
    WebSearchFailed { query: String, details: String },

    /// Network-related errors
    #[error("Network error: {details}")]
    NetworkError { details: String },

    /// Serialization/deserialization errors
    #[error("Serialization failed: {message}")]
    SerializationFailed { message: String },

    /// Invalid API request payload
    #[error("Invalid API request: {details}")]
    InvalidApiRequest { details: String },
}

impl AnalysisError {
    /// Check if the error is recoverable (can be retried)
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AnalysisError::WebSearchFailed { .. } | AnalysisError::NetworkError { .. }
        )
    }

    /// Get error category for metrics and logging
    pub fn category(&self) -> &'static str {
        match self {
            AnalysisError::Config { .. } => "configuration",
            AnalysisError::CatalogLoad { .. } => "catalog",
            AnalysisError::WebSearchFailed { .. } | AnalysisError::NetworkError { .. } => {
                "web_search"
            }
            AnalysisError::InvalidApiRequest { .. } | AnalysisError::ValidationFailed { .. } => {
                "api"
            }
            AnalysisError::Internal { .. } | AnalysisError::SerializationFailed { .. } => "generic",
        }
    }

    /// Get suggested recovery action
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            AnalysisError::WebSearchFailed { .. } => {
                Some("Retry the analysis; the web-search service may be temporarily unavailable")
            }
            AnalysisError::NetworkError { .. } => Some("Check network connectivity and retry"),
            _ => None,
        }
    }
}

// Conversion from common error types
impl From<std::io::Error> for AnalysisError {
    fn from(err: std::io::Error) -> Self {
        AnalysisError::Internal {
            message: format!("IO error: {}", err),
        }
    }
}

impl From<serde_json::Error> for AnalysisError {
    fn from(err: serde_json::Error) -> Self {
        AnalysisError::SerializationFailed {
            message: format!("JSON serialization error: {}", err),
        }
    }
}

impl From<toml::de::Error> for AnalysisError {
    fn from(err: toml::de::Error) -> Self {
        AnalysisError::Config {
            message: format!("TOML parse error: {}", err),
        }
    }
}

impl From<reqwest::Error> for AnalysisError {
    fn from(err: reqwest::Error) -> Self {
        AnalysisError::NetworkError {
            details: err.to_string(),
        }
    }
}

// Helper macro for common error patterns
#[macro_export]
macro_rules! internal_error {
    ($msg:expr) => {
        $crate::errors::AnalysisError::Internal {
            message: $msg.to_string(),
        }
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::errors::AnalysisError::Internal {
            message: format!($fmt, $($arg)*),
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_web_search_failures_are_recoverable() {
        let err = AnalysisError::WebSearchFailed {
            query: "Corruption".to_string(),
            details: "connection refused".to_string(),
        };
        assert!(err.is_recoverable());
        assert_eq!(err.category(), "web_search");
        assert!(err.recovery_suggestion().is_some());
    }

    #[test]
    fn test_config_errors_are_not_recoverable() {
        let err = AnalysisError::Config {
            message: "bad port".to_string(),
        };
        assert!(!err.is_recoverable());
        assert_eq!(err.category(), "configuration");
    }
}
