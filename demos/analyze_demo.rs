//! Simple demonstration of the legal case analyzer
//!
//! Runs a handful of sample cases through the full analysis pipeline and
//! prints the composed reports.

use anyhow::Result;
use legal_case_analyzer::{AnalysisEngine, CaseInput, Config};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    println!("⚖️  Legal Case Analyzer - Demo");
    println!("==============================");

    // Run with no simulated latency for the demo
    let mut config = Config::default();
    config.analysis.simulated_latency_ms = 0;
    let engine = AnalysisEngine::new(Arc::new(config))?;

    let sample_cases = vec![
        CaseInput {
            incident_type: "theft".to_string(),
            description: "Someone broke into my house and stole jewellery from the locker."
                .to_string(),
            date: "2024-02-10".to_string(),
            location: "Mumbai".to_string(),
        },
        CaseInput {
            incident_type: "violence".to_string(),
            description: "My uncle was stabbed during an argument but survived.".to_string(),
            date: "2024-03-05".to_string(),
            location: "Delhi".to_string(),
        },
        CaseInput {
            incident_type: "corruption".to_string(),
            description: "The clerk demanded a bribe to process my application.".to_string(),
            date: "2024-04-18".to_string(),
            location: "Jaipur".to_string(),
        },
        CaseInput {
            incident_type: "".to_string(),
            description: "My neighbor's dog barks loudly at night.".to_string(),
            date: "2024-05-01".to_string(),
            location: "Pune".to_string(),
        },
    ];

    for (i, case) in sample_cases.iter().enumerate() {
        println!("\n--- Case {} ({}) ---", i + 1, case.location);
        let analysis = engine.analyze(case).await?;
        println!(
            "Detected: {}",
            if analysis.case_types.is_empty() {
                "none".to_string()
            } else {
                analysis.case_types.join(", ")
            }
        );
        println!("Statutes: {}", analysis.statute_ids.join(", "));
        println!("\n{}", analysis.report);
    }

    println!("\nEngine stats: {:?}", engine.stats());
    Ok(())
}
