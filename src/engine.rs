//! # Analysis Engine Module
//!
//! ## Purpose
//! Main analysis engine tying the classifier, statute mapper, rationale
//! generator and report composer into a single suspend-capable call chain per
//! case, with a configurable simulated backend latency.
//!
//! ## Input/Output Specification
//! - **Input**: `CaseInput` (incident type, description, date, location)
//! - **Output**: `AnalysisReport` with detected categories, resolved statute
//!   identifiers and the composed report document
//! - **Concurrency**: Stateless between calls; catalog and rule tables are
//!   read-only and safely shared without locking
//!
//! ## Key Features
//! - One engine instance serves any number of concurrent analysis calls
//! - Pluggable web-search collaborator and catalog source
//! - Simulated latency placeholder for a real backend call (configurable,
//!   0 disables)

use crate::catalog::StatuteCatalog;
use crate::classifier::{self, CaseClassifier};
use crate::config::Config;
use crate::errors::{AnalysisError, Result};
use crate::mapper::StatuteMapper;
use crate::report::ReportComposer;
use crate::utils::Timer;
use crate::websearch::{self, WebSearchProvider};
use crate::CaseInput;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

/// Result of one analysis call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Unique identifier of this analysis request
    pub request_id: Uuid,
    /// Detected case-type labels, in classification order
    pub case_types: Vec<String>,
    /// Resolved statute identifiers, in mapping order
    pub statute_ids: Vec<String>,
    /// Composed report document (markdown)
    pub report: String,
    /// Completion timestamp
    pub analyzed_at: DateTime<Utc>,
    /// Wall-clock analysis duration in milliseconds
    pub analysis_time_ms: u64,
}

/// Engine statistics for monitoring endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineStats {
    pub classification_rules: usize,
    pub catalog_records: usize,
    pub mapped_categories: usize,
    pub search_provider: String,
}

/// Main analysis engine
pub struct AnalysisEngine {
    config: Arc<Config>,
    catalog: Arc<StatuteCatalog>,
    classifier: CaseClassifier,
    mapper: StatuteMapper,
    search: Arc<dyn WebSearchProvider>,
}

impl AnalysisEngine {
    /// Create an engine from configuration, wiring the configured catalog
    /// source and web-search provider
    pub fn new(config: Arc<Config>) -> Result<Self> {
        let search = websearch::provider_from_config(&config.web_search)?;
        Self::with_search_provider(config, search)
    }

    /// Create an engine with an explicit web-search collaborator
    pub fn with_search_provider(
        config: Arc<Config>,
        search: Arc<dyn WebSearchProvider>,
    ) -> Result<Self> {
        let catalog = match &config.catalog.source_path {
            Some(path) => Arc::new(StatuteCatalog::from_json_file(path)?),
            None => Arc::new(StatuteCatalog::builtin()),
        };

        let classifier = CaseClassifier::new()?;
        let mapper = StatuteMapper::new(catalog.clone());

        tracing::info!(
            "Analysis engine ready: {} rules, {} catalog records, '{}' search provider",
            classifier.rule_count(),
            catalog.len(),
            search.name()
        );

        Ok(Self {
            config,
            catalog,
            classifier,
            mapper,
            search,
        })
    }

    /// Analyze one case: classify, map statutes, compose the report.
    ///
    /// The simulated latency runs first, modeling asynchronous backend work.
    /// Only the web-search fallback can fail; that failure propagates.
    pub async fn analyze(&self, input: &CaseInput) -> Result<AnalysisReport> {
        let timer = Timer::new("analyze");

        let latency_ms = self.config.analysis.simulated_latency_ms;
        if latency_ms > 0 {
            tokio::time::sleep(Duration::from_millis(latency_ms)).await;
        }

        let text = classifier::combined_text(&input.incident_type, &input.description);
        let categories = self.classifier.classify(&text);
        let statutes = self.mapper.map_statutes(&categories);

        let report =
            ReportComposer::compose(input, &categories, &statutes, self.search.as_ref()).await?;

        let analysis = AnalysisReport {
            request_id: Uuid::new_v4(),
            case_types: categories.iter().map(|c| c.label().to_string()).collect(),
            statute_ids: statutes.iter().map(|s| s.id.clone()).collect(),
            report,
            analyzed_at: Utc::now(),
            analysis_time_ms: timer.stop(),
        };

        tracing::info!(
            "Analysis {}: {} categories, {} statutes",
            analysis.request_id,
            analysis.case_types.len(),
            analysis.statute_ids.len()
        );
        Ok(analysis)
    }

    /// The statute catalog backing this engine
    pub fn catalog(&self) -> &StatuteCatalog {
        &self.catalog
    }

    /// Health check for the engine
    pub fn health_check(&self) -> Result<()> {
        if self.catalog.is_empty() {
            return Err(AnalysisError::Internal {
                message: "Statute catalog is empty".to_string(),
            });
        }
        Ok(())
    }

    /// Engine statistics
    pub fn stats(&self) -> EngineStats {
        EngineStats {
            classification_rules: self.classifier.rule_count(),
            catalog_records: self.catalog.len(),
            mapped_categories: StatuteMapper::mapped_category_count(),
            search_provider: self.search.name().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::websearch::WebSearchResult;
    use async_trait::async_trait;

    struct FailingSearch;

    #[async_trait]
    impl WebSearchProvider for FailingSearch {
        fn name(&self) -> &'static str {
            "failing"
        }

        async fn search(&self, query: &str) -> Result<Vec<WebSearchResult>> {
            Err(AnalysisError::WebSearchFailed {
                query: query.to_string(),
                details: "simulated outage".to_string(),
            })
        }
    }

    fn test_config() -> Arc<Config> {
        let mut config = Config::default();
        config.analysis.simulated_latency_ms = 0;
        Arc::new(config)
    }

    fn engine() -> AnalysisEngine {
        AnalysisEngine::new(test_config()).unwrap()
    }

    fn case(incident_type: &str, description: &str) -> CaseInput {
        CaseInput {
            incident_type: incident_type.to_string(),
            description: description.to_string(),
            date: "2024-03-01".to_string(),
            location: "Pune".to_string(),
        }
    }

    #[tokio::test]
    async fn test_theft_end_to_end() {
        let analysis = engine()
            .analyze(&case("theft", "stole my bike"))
            .await
            .unwrap();

        assert!(analysis.case_types.contains(&"Theft".to_string()));
        assert!(analysis.statute_ids.contains(&"IPC 379".to_string()));
        assert!(analysis.report.contains("IPC Section 379"));
    }

    #[tokio::test]
    async fn test_unrecognized_text_end_to_end() {
        let analysis = engine()
            .analyze(&case("", "my neighbor's dog barks loudly"))
            .await
            .unwrap();

        assert!(analysis.case_types.is_empty());
        // The mapper's default subset is reported as metadata, but the
        // document itself carries the generic notice and no statute section
        assert_eq!(analysis.statute_ids, vec!["14", "15", "19", "21", "22"]);
        assert!(analysis
            .report
            .contains("**No specific case type detected. Please provide more details.**"));
        assert!(!analysis.report.contains("**Relevant Laws/Articles"));
    }

    #[tokio::test]
    async fn test_unmapped_category_takes_web_fallback() {
        let analysis = engine()
            .analyze(&case("corruption", "the clerk demanded a bribe"))
            .await
            .unwrap();

        assert_eq!(analysis.case_types, vec!["Corruption".to_string()]);
        assert!(analysis.statute_ids.is_empty());
        assert!(analysis.report.contains("**Web Search Results:**"));
    }

    #[tokio::test]
    async fn test_attempt_to_murder_suppression_end_to_end() {
        let analysis = engine()
            .analyze(&case("violence", "he was stabbed but survived"))
            .await
            .unwrap();

        assert!(analysis
            .case_types
            .contains(&"Attempt to Murder".to_string()));
        assert!(!analysis.case_types.contains(&"Murder".to_string()));
        assert!(analysis.statute_ids.contains(&"IPC 307".to_string()));
        assert!(!analysis.statute_ids.contains(&"IPC 302".to_string()));
    }

    #[tokio::test]
    async fn test_repeated_analysis_is_deterministic() {
        let e = engine();
        let input = case("theft", "stole my bike");
        let first = e.analyze(&input).await.unwrap();
        let second = e.analyze(&input).await.unwrap();
        assert_eq!(first.case_types, second.case_types);
        assert_eq!(first.statute_ids, second.statute_ids);
        assert_eq!(first.report, second.report);
    }

    #[tokio::test]
    async fn test_concurrent_analyses_share_one_engine() {
        let e = Arc::new(engine());
        let calls = (0..4).map(|_| {
            let e = e.clone();
            async move { e.analyze(&case("theft", "stole my bike")).await.unwrap() }
        });

        let results = futures::future::join_all(calls).await;
        for analysis in &results {
            assert_eq!(analysis.case_types, results[0].case_types);
            assert_eq!(analysis.statute_ids, results[0].statute_ids);
        }
    }

    #[tokio::test]
    async fn test_web_search_failure_propagates_from_analyze() {
        let e = AnalysisEngine::with_search_provider(test_config(), Arc::new(FailingSearch))
            .unwrap();
        let err = e
            .analyze(&case("corruption", "the clerk demanded a bribe"))
            .await
            .unwrap_err();
        assert!(matches!(err, AnalysisError::WebSearchFailed { .. }));
    }

    #[test]
    fn test_health_and_stats() {
        let e = engine();
        assert!(e.health_check().is_ok());
        let stats = e.stats();
        assert!(stats.classification_rules >= 17);
        assert!(stats.catalog_records > 50);
        assert_eq!(stats.search_provider, "stub");
    }
}
