//! # Web Search Collaborator Module
//!
//! ## Purpose
//! Pluggable external search service used by the report composer when
//! categories are detected but no statute resolves locally. The default
//! implementation is a stub returning fixed legal-portal entries; an HTTP
//! implementation targets a configurable legal-search API.
//!
//! ## Input/Output Specification
//! - **Input**: Search query (joined category names)
//! - **Output**: Ordered title/url/snippet entries
//! - **Failure**: Propagated to the caller unmodified; no retry, no silent
//!   fallback to empty results

use crate::config::WebSearchConfig;
use crate::errors::{AnalysisError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// A single web-search hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebSearchResult {
    pub title: String,
    pub url: String,
    pub snippet: String,
}

/// External search service boundary
#[async_trait]
pub trait WebSearchProvider: Send + Sync {
    /// Provider name for logging and health output
    fn name(&self) -> &'static str;

    /// Run a search. Errors must surface to the caller; implementations do
    /// not retry or swallow failures.
    async fn search(&self, query: &str) -> Result<Vec<WebSearchResult>>;
}

/// Build the provider selected by configuration
pub fn provider_from_config(config: &WebSearchConfig) -> Result<Arc<dyn WebSearchProvider>> {
    match config.provider.as_str() {
        "stub" => Ok(Arc::new(StubLegalSearch)),
        "http" => Ok(Arc::new(HttpLegalSearch::new(config)?)),
        other => Err(AnalysisError::Config {
            message: format!("Unknown web-search provider '{}'", other),
        }),
    }
}

/// Fixed-result search stub pointing at public legal portals. Stands in for a
/// real legal-search API integration.
pub struct StubLegalSearch;

#[async_trait]
impl WebSearchProvider for StubLegalSearch {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn search(&self, query: &str) -> Result<Vec<WebSearchResult>> {
        Ok(vec![
            WebSearchResult {
                title: format!("Search results for \"{}\" on Indian Kanoon", query),
                url: format!(
                    "https://indiankanoon.org/search/?formInput={}",
                    urlencoding::encode(query)
                ),
                snippet: "Find relevant case law, statutes, and legal commentary for your query."
                    .to_string(),
            },
            WebSearchResult {
                title: format!("General legal information for \"{}\"", query),
                url: "https://www.legalserviceindia.com/".to_string(),
                snippet: "Browse articles, case studies, and legal advice on Indian law."
                    .to_string(),
            },
        ])
    }
}

/// HTTP-backed search provider targeting a legal-search API that answers
/// `GET {base}/search?q=<query>` with a JSON array of results.
pub struct HttpLegalSearch {
    client: Client,
    base_url: String,
    max_results: usize,
}

impl HttpLegalSearch {
    /// Build the HTTP client from configuration
    pub fn new(config: &WebSearchConfig) -> Result<Self> {
        if config.api_url.is_empty() {
            return Err(AnalysisError::Config {
                message: "web_search.api_url is required for the http provider".to_string(),
            });
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent("legal-case-analyzer/0.1")
            .build()
            .map_err(|e| AnalysisError::NetworkError {
                details: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            max_results: config.max_results,
        })
    }
}

#[async_trait]
impl WebSearchProvider for HttpLegalSearch {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn search(&self, query: &str) -> Result<Vec<WebSearchResult>> {
        let url = format!("{}/search", self.base_url);
        tracing::debug!("Searching {} for '{}'", url, query);

        let response = self
            .client
            .get(&url)
            .query(&[("q", query)])
            .send()
            .await
            .map_err(|e| AnalysisError::WebSearchFailed {
                query: query.to_string(),
                details: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(AnalysisError::WebSearchFailed {
                query: query.to_string(),
                details: format!("HTTP {}", response.status()),
            });
        }

        let mut results: Vec<WebSearchResult> =
            response
                .json()
                .await
                .map_err(|e| AnalysisError::WebSearchFailed {
                    query: query.to_string(),
                    details: format!("Invalid response body: {}", e),
                })?;

        results.truncate(self.max_results);
        Ok(results)
    }
}
