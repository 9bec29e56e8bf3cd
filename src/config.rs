//! # Configuration Management Module
//!
//! ## Purpose
//! Centralized configuration management for the legal case analyzer, supporting
//! TOML files and environment variables with validation and type-safe access to
//! all system settings.
//!
//! ## Input/Output Specification
//! - **Input**: Configuration files (TOML), environment variables
//! - **Output**: Validated configuration structs with defaults and overrides
//! - **Validation**: Type checking, range validation, dependency verification
//!
//! ## Configuration Sources (in order of precedence)
//! 1. Environment variables (highest priority)
//! 2. Configuration files
//! 3. Default values (lowest priority)
//!
//! ## Usage
//! ```rust,no_run
//! use legal_case_analyzer::config::Config;
//!
//! let config = Config::from_file("config.toml").unwrap();
//! println!("Server port: {}", config.server.port);
//! ```

use crate::errors::{AnalysisError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure containing all system settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server and API configuration
    pub server: ServerConfig,
    /// Analysis pipeline behavior
    pub analysis: AnalysisConfig,
    /// Web-search fallback collaborator
    pub web_search: WebSearchConfig,
    /// Statute catalog data source
    pub catalog: CatalogConfig,
    /// Logging and monitoring
    pub logging: LoggingConfig,
}

/// Server and API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server bind address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Maximum request payload size in KB
    pub max_payload_size_kb: usize,
    /// Request timeout in seconds
    pub request_timeout_seconds: u64,
    /// Enable CORS
    pub enable_cors: bool,
}

/// Analysis pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Simulated backend latency before each analysis, in milliseconds.
    /// Placeholder for a real backend call; set to 0 to disable.
    pub simulated_latency_ms: u64,
    /// Minimum accepted case description length in characters
    pub min_description_length: usize,
    /// Maximum accepted case description length in characters
    pub max_description_length: usize,
}

/// Web-search fallback configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebSearchConfig {
    /// Provider kind: "stub" (fixed results) or "http" (external legal-search API)
    pub provider: String,
    /// Base URL of the external search API (required for the "http" provider)
    pub api_url: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// Maximum number of results to emit in a report
    pub max_results: usize,
}

/// Statute catalog data source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Optional JSON file with statute records; the embedded table is used
    /// when unset. Swapping the source does not change classifier or mapper
    /// behavior.
    pub source_path: Option<PathBuf>,
}

/// Logging and monitoring configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Enable structured JSON logging
    pub json_format: bool,
}

impl Config {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::from_file("config.toml")
    }

    /// Load configuration from a specific file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::warn!("Configuration file not found: {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| AnalysisError::Config {
            message: format!("Failed to read config file {:?}: {}", path, e),
        })?;

        let mut config: Config = toml::from_str(&content).map_err(|e| AnalysisError::Config {
            message: format!("Failed to parse config file {:?}: {}", path, e),
        })?;

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(host) = std::env::var("LEGAL_ANALYZER_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("LEGAL_ANALYZER_PORT") {
            self.server.port = port.parse().map_err(|_| AnalysisError::Config {
                message: "Invalid port number in LEGAL_ANALYZER_PORT".to_string(),
            })?;
        }
        if let Ok(latency) = std::env::var("LEGAL_ANALYZER_LATENCY_MS") {
            self.analysis.simulated_latency_ms =
                latency.parse().map_err(|_| AnalysisError::Config {
                    message: "Invalid value in LEGAL_ANALYZER_LATENCY_MS".to_string(),
                })?;
        }
        if let Ok(url) = std::env::var("LEGAL_ANALYZER_SEARCH_URL") {
            self.web_search.api_url = url;
        }
        if let Ok(catalog) = std::env::var("LEGAL_ANALYZER_CATALOG_PATH") {
            self.catalog.source_path = Some(PathBuf::from(catalog));
        }

        Ok(())
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AnalysisError::ValidationFailed {
                field: "server.port".to_string(),
                reason: "Port cannot be zero".to_string(),
            });
        }

        if self.analysis.min_description_length > self.analysis.max_description_length {
            return Err(AnalysisError::ValidationFailed {
                field: "analysis.min_description_length".to_string(),
                reason: "Minimum description length cannot be greater than maximum".to_string(),
            });
        }

        match self.web_search.provider.as_str() {
            "stub" => {}
            "http" => {
                if self.web_search.api_url.is_empty() {
                    return Err(AnalysisError::ValidationFailed {
                        field: "web_search.api_url".to_string(),
                        reason: "An API URL is required for the http provider".to_string(),
                    });
                }
            }
            other => {
                return Err(AnalysisError::ValidationFailed {
                    field: "web_search.provider".to_string(),
                    reason: format!("Unknown provider '{}' (expected 'stub' or 'http')", other),
                });
            }
        }

        Ok(())
    }

    /// Get configuration as TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| AnalysisError::Config {
            message: format!("Failed to serialize config to TOML: {}", e),
        })
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = self.to_toml()?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
                max_payload_size_kb: 64,
                request_timeout_seconds: 30,
                enable_cors: true,
            },
            analysis: AnalysisConfig {
                simulated_latency_ms: 4000,
                min_description_length: 2,
                max_description_length: 10_000,
            },
            web_search: WebSearchConfig {
                provider: "stub".to_string(),
                api_url: String::new(),
                timeout_seconds: 10,
                max_results: 5,
            },
            catalog: CatalogConfig { source_path: None },
            logging: LoggingConfig {
                level: "info".to_string(),
                json_format: false,
            },
        }
    }
}
