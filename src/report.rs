//! # Report Composer Module
//!
//! ## Purpose
//! Assembles classifier output, mapped statutes, and rationales into a single
//! structured markdown report with fixed section markers, in a fixed order:
//! summary blockquote, detected case types, the branch-dependent law/analysis
//! or web-search section, suggested next steps, and the educational closing
//! note.
//!
//! ## Input/Output Specification
//! - **Input**: Case input, ordered categories, resolved statutes, the
//!   web-search collaborator
//! - **Output**: Composed report string
//! - **Failure**: Composition itself never fails; only the web-search call
//!   can, and that error propagates to the caller unmodified
//!
//! Branching: no categories -> generic "provide more details" notice (no
//! statute or web-search section); statutes present -> law list plus per-
//! statute analysis; categories present but nothing resolved -> no-local-match
//! notice plus web-search results.

use crate::classifier::CaseCategory;
use crate::catalog::StatuteRecord;
use crate::errors::Result;
use crate::rationale;
use crate::websearch::WebSearchProvider;
use crate::CaseInput;

/// Composes analysis reports. Stateless; one call per analysis.
pub struct ReportComposer;

impl ReportComposer {
    /// Compose the full report. Async because the no-local-match branch
    /// consults the web-search collaborator.
    pub async fn compose(
        input: &CaseInput,
        categories: &[CaseCategory],
        statutes: &[StatuteRecord],
        search: &dyn WebSearchProvider,
    ) -> Result<String> {
        let mut output = String::new();
        let joined = join_categories(categories);

        // Summary blockquote
        let summary_subject = if categories.is_empty() {
            "a general legal issue".to_string()
        } else {
            joined.clone()
        };
        output.push_str(&format!(
            "> **SUMMARY**: This case appears to involve: **{}**.\n> The most relevant laws and sections are listed below.\n\n",
            summary_subject
        ));

        // Detected case types
        let detected = if categories.is_empty() {
            "Not specifically identified".to_string()
        } else {
            joined.clone()
        };
        output.push_str(&format!("**Detected Case Type(s):** {}\n\n", detected));

        if categories.is_empty() {
            output.push_str("**No specific case type detected. Please provide more details.**\n");
        } else if !statutes.is_empty() {
            Self::compose_statute_sections(&mut output, input, statutes);
        } else {
            // The search query joins labels with spaces, unlike the
            // comma-joined display form
            let query = categories
                .iter()
                .map(|category| category.label())
                .collect::<Vec<_>>()
                .join(" ");
            Self::compose_web_fallback(&mut output, &query, search).await?;
        }

        // Fixed closers
        output.push_str(
            "\n**Suggested Next Steps:**\n\
             - Consult a qualified legal professional\n\
             - Gather all relevant evidence and documentation\n\
             - Report to the police if not already done\n",
        );
        output.push_str(
            "\n---\n**Teacher's Note:**\n\
             This analysis is for educational purposes. Encourage students to research each \
             law/section further and discuss real-world implications in class.\n",
        );

        Ok(output)
    }

    /// Statute list plus per-statute rationale block
    fn compose_statute_sections(
        output: &mut String,
        input: &CaseInput,
        statutes: &[StatuteRecord],
    ) {
        output.push_str("**Relevant Laws/Articles (in order of importance):**\n");
        for statute in statutes {
            output.push_str(&format!(
                "- ⚖️ **{}**: {}  \n  _{}_\n",
                rationale::full_label(&statute.id),
                statute.title,
                statute.description
            ));
        }

        output.push_str("\n**Analysis:**\n");
        output.push_str(&format!(
            "Based on the information provided (Type: {}, Description: {}, Date: {}, Location: {}), \
             the following sections/articles are likely to be relevant:\n",
            input.incident_type, input.description, input.date, input.location
        ));
        for statute in statutes {
            let explanation = rationale::explain(statute);
            if !explanation.is_empty() {
                output.push_str(&format!(
                    "- **{}**: _Why this law applies:_ {}\n",
                    rationale::full_label(&statute.id),
                    explanation
                ));
            }
        }
    }

    /// No-local-match notice plus web-search results. The collaborator's
    /// failure propagates out of `compose`.
    async fn compose_web_fallback(
        output: &mut String,
        query: &str,
        search: &dyn WebSearchProvider,
    ) -> Result<()> {
        output.push_str(
            "**No specific laws found in the local database for this case type. \
             Searching the web for relevant legal information...**\n",
        );
        output.push_str("\n**Web Search Results:**\n");

        let results = search.search(query).await?;
        for result in &results {
            output.push_str(&format!(
                "- [{}]({})\n  _{}_\n",
                result.title, result.url, result.snippet
            ));
        }

        output.push_str(
            "\nPlease consult a qualified legal professional or trusted legal website for the \
             most up-to-date information.\n",
        );
        Ok(())
    }
}

/// Join category labels for display and search queries
pub fn join_categories(categories: &[CaseCategory]) -> String {
    categories
        .iter()
        .map(|category| category.label())
        .collect::<Vec<_>>()
        .join(", ")
}
