//! # Legal Case Analyzer
//!
//! ## Overview
//! This library implements the case-classification and statute-mapping engine
//! behind an educational legal portal: free-text incident descriptions are
//! classified into legal-case categories, expanded into ordered statutory
//! citations with human-readable rationale text, and rendered into a
//! structured multi-section report. The analysis is a teaching aid with a
//! mocked backend, not legal advice.
//!
//! ## Architecture
//! The system is composed of several key modules:
//! - `catalog`: Fixed table of statute metadata, keyed by identifier
//! - `classifier`: Keyword-rule classification of case text into categories
//! - `mapper`: Category-to-statute expansion with stable de-duplication
//! - `rationale`: Per-statute justification text and display labels
//! - `report`: Structured report composition with a web-search fallback
//! - `websearch`: Pluggable external search collaborator (stub and HTTP)
//! - `engine`: Analysis orchestration with simulated backend latency
//! - `api`: REST API endpoints
//! - `config`: Configuration management and settings
//! - `errors`: Centralized error handling and types
//!
//! ## Input/Output Specification
//! - **Input**: Case details (incident type, description, date, location)
//! - **Output**: Structured markdown analysis report with detected case
//!   types, relevant statutes, rationales and suggested next steps
//! - **Determinism**: Classification and mapping are pure functions of the
//!   input text
//!
//! ## Usage
//! ```rust,no_run
//! use legal_case_analyzer::{AnalysisEngine, CaseInput, Config};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Arc::new(Config::from_file("config.toml")?);
//!     let engine = AnalysisEngine::new(config)?;
//!     let analysis = engine
//!         .analyze(&CaseInput {
//!             incident_type: "theft".to_string(),
//!             description: "stole my bike".to_string(),
//!             date: "2024-03-01".to_string(),
//!             location: "Pune".to_string(),
//!         })
//!         .await?;
//!     println!("{}", analysis.report);
//!     Ok(())
//! }
//! ```

// Core modules
pub mod catalog;
pub mod classifier;
pub mod config;
pub mod engine;
pub mod errors;
pub mod mapper;
pub mod rationale;
pub mod report;
pub mod websearch;

// Outer surface
pub mod api;

// Utilities
pub mod utils;

// Re-exports for convenience
pub use catalog::{StatuteCatalog, StatuteRecord};
pub use classifier::{CaseCategory, CaseClassifier};
pub use config::Config;
pub use engine::{AnalysisEngine, AnalysisReport};
pub use errors::{AnalysisError, Result};

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One case submitted for analysis. A value object: created per request,
/// immutable once passed to the engine, not retained by the core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseInput {
    /// Free-text incident type (e.g. "theft")
    pub incident_type: String,
    /// Free-text case description
    pub description: String,
    /// Incident date as entered by the user
    pub date: String,
    /// Incident location as entered by the user
    pub location: String,
}

/// Application state shared across API handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<config::Config>,
    pub engine: Arc<engine::AnalysisEngine>,
}
