//! # API Server Module
//!
//! ## Purpose
//! REST API server exposing the analysis engine to the portal frontend, with
//! request validation, structured error responses and health/statistics
//! endpoints.
//!
//! ## Input/Output Specification
//! - **Input**: HTTP requests with case details
//! - **Output**: JSON responses with the composed analysis report and metadata
//! - **Endpoints**: Analyze, statute lookup, health, stats
//!
//! ## Key Features
//! - Request validation against configured description bounds
//! - CORS support for the web frontend
//! - Web-search collaborator failures surface as 502 with a retry hint so the
//!   frontend can render a retry state
//! - HTML index page documenting the endpoints

use crate::config::Config;
use crate::errors::{AnalysisError, Result};
use crate::utils::{TextUtils, ValidationUtils};
use crate::{AppState, CaseInput};
use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use serde::{Deserialize, Serialize};

/// API server wrapping the shared application state
pub struct ApiServer {
    app_state: AppState,
}

/// Analyze request payload
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub incident_type: String,
    pub description: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub location: String,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub components: HealthComponents,
}

/// Component health status
#[derive(Debug, Serialize)]
pub struct HealthComponents {
    pub engine: String,
    pub catalog: String,
}

impl ApiServer {
    /// Create new API server
    pub fn new(app_state: AppState) -> Self {
        Self { app_state }
    }

    /// Run the API server
    pub async fn run(self) -> Result<()> {
        let config = self.app_state.config.clone();
        let bind_addr = format!("{}:{}", config.server.host, config.server.port);

        tracing::info!("Starting API server on {}", bind_addr);

        let app_state = self.app_state.clone();
        let payload_limit = config.server.max_payload_size_kb * 1024;
        let enable_cors = config.server.enable_cors;

        let server = HttpServer::new(move || {
            let cors = if enable_cors {
                Cors::permissive()
            } else {
                Cors::default()
            };

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(app_state.clone()))
                .app_data(web::JsonConfig::default().limit(payload_limit))
                .route("/analyze", web::post().to(analyze_handler))
                .route("/statutes/{id}", web::get().to(statute_handler))
                .route("/health", web::get().to(health_handler))
                .route("/stats", web::get().to(stats_handler))
                .route("/", web::get().to(index_handler))
        })
        .bind(&bind_addr)
        .map_err(|e| AnalysisError::Internal {
            message: format!("Failed to bind server to {}: {}", bind_addr, e),
        })?
        .run();

        server.await.map_err(|e| AnalysisError::Internal {
            message: format!("Server error: {}", e),
        })?;

        Ok(())
    }
}

/// Validate an analyze request against configured bounds
fn validate_request(request: &AnalyzeRequest, config: &Config) -> Result<()> {
    if !ValidationUtils::is_valid_description(
        &request.description,
        config.analysis.min_description_length,
        config.analysis.max_description_length,
    ) {
        return Err(AnalysisError::InvalidApiRequest {
            details: format!(
                "description must be between {} and {} characters",
                config.analysis.min_description_length, config.analysis.max_description_length
            ),
        });
    }
    Ok(())
}

/// Analyze endpoint handler
async fn analyze_handler(
    app_state: web::Data<AppState>,
    request: web::Json<AnalyzeRequest>,
) -> ActixResult<HttpResponse> {
    if let Err(e) = validate_request(&request, &app_state.config) {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Invalid request",
            "message": e.to_string(),
        })));
    }

    let input = CaseInput {
        incident_type: TextUtils::sanitize(&request.incident_type),
        description: TextUtils::sanitize(&request.description),
        date: TextUtils::sanitize(&request.date),
        location: TextUtils::sanitize(&request.location),
    };

    match app_state.engine.analyze(&input).await {
        Ok(analysis) => Ok(HttpResponse::Ok().json(analysis)),
        Err(e) if e.is_recoverable() => {
            tracing::warn!("Analysis failed on a recoverable error: {}", e);
            Ok(HttpResponse::BadGateway().json(serde_json::json!({
                "error": "Analysis failed",
                "message": e.to_string(),
                "retryable": true,
                "suggestion": e.recovery_suggestion(),
            })))
        }
        Err(e) => {
            tracing::error!("Analysis error: {}", e);
            Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Analysis failed",
                "message": e.to_string(),
                "retryable": false,
            })))
        }
    }
}

/// Statute lookup endpoint handler
async fn statute_handler(
    app_state: web::Data<AppState>,
    id: web::Path<String>,
) -> ActixResult<HttpResponse> {
    match app_state.engine.catalog().lookup(&id) {
        Some(record) => Ok(HttpResponse::Ok().json(record)),
        None => Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": "Statute not found",
            "id": id.as_str(),
        }))),
    }
}

/// Health check endpoint handler
async fn health_handler(app_state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    let engine_status = match app_state.engine.health_check() {
        Ok(_) => "healthy",
        Err(_) => "unhealthy",
    };

    let response = HealthResponse {
        status: engine_status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        components: HealthComponents {
            engine: engine_status.to_string(),
            catalog: engine_status.to_string(),
        },
    };

    Ok(HttpResponse::Ok().json(response))
}

/// Statistics endpoint handler
async fn stats_handler(app_state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(app_state.engine.stats()))
}

/// Index page handler
async fn index_handler() -> ActixResult<HttpResponse> {
    let html = r#"
    <!DOCTYPE html>
    <html>
    <head>
        <title>Legal Case Analyzer</title>
        <style>
            body { font-family: Arial, sans-serif; margin: 40px; }
            .header { color: #2c3e50; }
            .endpoint { margin: 20px 0; padding: 15px; background: #f8f9fa; border-radius: 5px; }
            .method { font-weight: bold; color: #27ae60; }
        </style>
    </head>
    <body>
        <h1 class="header">Legal Case Analyzer API</h1>
        <p>Educational case-classification and statute-mapping service. Analyses are for learning purposes only and are not legal advice.</p>

        <h2>Available Endpoints</h2>

        <div class="endpoint">
            <span class="method">POST</span> /analyze
            <p>Classify a case description and receive a structured legal-analysis report.</p>
        </div>

        <div class="endpoint">
            <span class="method">GET</span> /statutes/{id}
            <p>Look up a statute record by identifier (e.g. "IPC 302", "21").</p>
        </div>

        <div class="endpoint">
            <span class="method">GET</span> /health
            <p>Check the health status of the analysis engine.</p>
        </div>

        <div class="endpoint">
            <span class="method">GET</span> /stats
            <p>Get rule, catalog and provider statistics.</p>
        </div>

        <h2>Example Analyze Request</h2>
        <pre>{
  "incident_type": "theft",
  "description": "someone stole my bike from the parking lot",
  "date": "2024-03-01",
  "location": "Pune"
}</pre>
    </body>
    </html>
    "#;

    Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::AnalysisEngine;
    use actix_web::{test, App};
    use std::sync::Arc;

    fn test_state() -> AppState {
        let mut config = Config::default();
        config.analysis.simulated_latency_ms = 0;
        let config = Arc::new(config);
        let engine = Arc::new(AnalysisEngine::new(config.clone()).unwrap());
        AppState { config, engine }
    }

    #[actix_web::test]
    async fn test_analyze_endpoint_returns_report() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .route("/analyze", web::post().to(analyze_handler)),
        )
        .await;

        let request = test::TestRequest::post()
            .uri("/analyze")
            .set_json(serde_json::json!({
                "incident_type": "theft",
                "description": "someone stole my bike",
                "date": "2024-03-01",
                "location": "Pune"
            }))
            .to_request();

        let response: serde_json::Value = test::call_and_read_body_json(&app, request).await;
        assert!(response["case_types"]
            .as_array()
            .unwrap()
            .contains(&serde_json::json!("Theft")));
        assert!(response["report"]
            .as_str()
            .unwrap()
            .contains("IPC Section 379"));
    }

    #[actix_web::test]
    async fn test_analyze_endpoint_rejects_empty_description() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .route("/analyze", web::post().to(analyze_handler)),
        )
        .await;

        let request = test::TestRequest::post()
            .uri("/analyze")
            .set_json(serde_json::json!({
                "incident_type": "theft",
                "description": ""
            }))
            .to_request();

        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_statute_lookup_endpoint() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .route("/statutes/{id}", web::get().to(statute_handler)),
        )
        .await;

        let request = test::TestRequest::get().uri("/statutes/21").to_request();
        let response: serde_json::Value = test::call_and_read_body_json(&app, request).await;
        assert_eq!(response["id"], "21");

        let request = test::TestRequest::get()
            .uri("/statutes/IPC%209999")
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_health_endpoint() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .route("/health", web::get().to(health_handler)),
        )
        .await;

        let request = test::TestRequest::get().uri("/health").to_request();
        let response: serde_json::Value = test::call_and_read_body_json(&app, request).await;
        assert_eq!(response["status"], "healthy");
    }
}
