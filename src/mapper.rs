//! # Statute Mapper Module
//!
//! ## Purpose
//! Deterministic expansion of an ordered category list into an ordered,
//! de-duplicated list of statute records, resolved against the catalog.
//!
//! ## Input/Output Specification
//! - **Input**: Ordered case categories from the classifier
//! - **Output**: Resolved `StatuteRecord`s; order = category order, then
//!   within-category listing order; no duplicate identifiers
//! - **Empty input**: A fixed default subset of baseline constitutional
//!   protections
//!
//! ## Key Features
//! - One static ordered `category -> [identifier]` table
//! - Stable first-occurrence de-duplication across categories
//! - Identifiers with no catalog match are silently dropped, never an error
//! - Categories absent from the table contribute nothing; when every category
//!   resolves to nothing the result is an explicit empty sequence, distinct
//!   from the empty-input default-subset case

use crate::catalog::{StatuteCatalog, StatuteRecord};
use crate::classifier::CaseCategory;
use std::collections::HashSet;
use std::sync::Arc;

/// Baseline constitutional protections returned when classification yields
/// no category at all.
const DEFAULT_RIGHTS: &[&str] = &["14", "15", "19", "21", "22"];

/// Static category-to-identifier table, in within-category citation order.
/// Corruption and Environmental Law intentionally have no entry; reports for
/// those categories fall back to web search.
const CATEGORY_STATUTES: &[(CaseCategory, &[&str])] = &[
    (
        CaseCategory::Murder,
        &["IPC 302", "IPC 120B", "IPC 34", "IPC 201", "IPC 297", "21"],
    ),
    (
        CaseCategory::AttemptToMurder,
        &["IPC 307", "IPC 120B", "IPC 34", "21"],
    ),
    (
        CaseCategory::Robbery,
        &["IPC 392", "IPC 397", "IPC 398", "IPC 394", "IPC 395", "IPC 34", "21"],
    ),
    (
        // "IPC 21" has no catalog record and drops out during resolution
        CaseCategory::Theft,
        &["IPC 379", "IPC 380", "IPC 457", "IPC 411", "IPC 454", "IPC 21"],
    ),
    (
        CaseCategory::Fraud,
        &["IPC 420", "IPC 415", "IPC 417", "IPC 468", "IPC 471", "21"],
    ),
    (
        CaseCategory::Assault,
        &["IPC 351", "IPC 352", "IPC 323", "IPC 504", "21"],
    ),
    (
        CaseCategory::Harassment,
        &["IPC 354", "IPC 509", "14", "15", "21"],
    ),
    (
        CaseCategory::Intimidation,
        &["IPC 503", "IPC 506", "IPC 507", "21"],
    ),
    (
        CaseCategory::Cybercrime,
        &["IT Act 66C", "IT Act 66D", "IT Act 67", "IPC 354A", "IPC 499", "IPC 500", "21"],
    ),
    (
        CaseCategory::DomesticViolence,
        &["DV Act 3", "IPC 498A", "IPC 506", "21"],
    ),
    (
        CaseCategory::ChildProtection,
        &["POCSO 3", "POCSO 7", "POCSO 9", "IPC 75", "IPC 82", "21"],
    ),
    (
        CaseCategory::SexualOffense,
        &["IPC 376", "IPC 354", "IPC 354A", "IPC 509", "IPC 228A", "21", "14"],
    ),
    (
        CaseCategory::ConsumerNegligence,
        &["CPA 2", "IPC 272", "IPC 273", "21"],
    ),
    (
        CaseCategory::Tenancy,
        &["Rent Act", "IPC 441", "IPC 427", "21"],
    ),
    (
        CaseCategory::HitAndRun,
        &["IPC 304A", "MV Act 134", "21"],
    ),
];

/// Maps ordered category lists to ordered statute-record lists
pub struct StatuteMapper {
    catalog: Arc<StatuteCatalog>,
}

impl StatuteMapper {
    /// Create a mapper over the given catalog
    pub fn new(catalog: Arc<StatuteCatalog>) -> Self {
        Self { catalog }
    }

    /// Expand categories into resolved statute records.
    ///
    /// Empty input returns the fixed default constitutional-rights subset.
    /// Non-empty input walks the static table in category order, appending
    /// each category's identifiers with first-occurrence de-duplication,
    /// then resolves them against the catalog; identifiers with no record
    /// are silently dropped. Non-empty input that resolves to nothing
    /// returns an explicit empty vector.
    pub fn map_statutes(&self, categories: &[CaseCategory]) -> Vec<StatuteRecord> {
        if categories.is_empty() {
            return self.default_rights();
        }

        let mut order: Vec<&str> = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();

        for category in categories {
            let Some(ids) = Self::statute_ids(*category) else {
                tracing::debug!("No statute table entry for category '{}'", category);
                continue;
            };
            for id in ids {
                if seen.insert(id) {
                    order.push(id);
                }
            }
        }

        order
            .into_iter()
            .filter_map(|id| {
                let record = self.catalog.lookup(id);
                if record.is_none() {
                    tracing::debug!("Dropping unresolvable statute identifier '{}'", id);
                }
                record.cloned()
            })
            .collect()
    }

    /// The fixed default subset emitted for an empty category list
    pub fn default_rights(&self) -> Vec<StatuteRecord> {
        DEFAULT_RIGHTS
            .iter()
            .filter_map(|id| self.catalog.lookup(id).cloned())
            .collect()
    }

    /// Table lookup: ordered identifier list for a category, if present
    pub fn statute_ids(category: CaseCategory) -> Option<&'static [&'static str]> {
        CATEGORY_STATUTES
            .iter()
            .find(|(cat, _)| *cat == category)
            .map(|(_, ids)| *ids)
    }

    /// Number of categories with a table entry
    pub fn mapped_category_count() -> usize {
        CATEGORY_STATUTES.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StatuteCatalog;

    fn mapper() -> StatuteMapper {
        StatuteMapper::new(Arc::new(StatuteCatalog::builtin()))
    }

    #[test]
    fn test_empty_categories_yield_default_rights() {
        let m = mapper();
        let statutes = m.map_statutes(&[]);
        let ids: Vec<&str> = statutes.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["14", "15", "19", "21", "22"]);
    }

    #[test]
    fn test_theft_resolves_against_catalog() {
        let m = mapper();
        let statutes = m.map_statutes(&[CaseCategory::Theft]);
        assert!(!statutes.is_empty());
        let ids: Vec<&str> = statutes.iter().map(|s| s.id.as_str()).collect();
        // The dangling "IPC 21" identifier drops silently during resolution
        assert_eq!(ids, vec!["IPC 379", "IPC 380", "IPC 457", "IPC 411", "IPC 454"]);
    }

    #[test]
    fn test_no_duplicate_identifiers_across_categories() {
        let m = mapper();
        // Both lists contain IPC 120B, IPC 34 and 21
        let statutes = m.map_statutes(&[CaseCategory::AttemptToMurder, CaseCategory::Murder]);
        let mut seen = HashSet::new();
        for statute in &statutes {
            assert!(seen.insert(statute.id.clone()), "duplicate {}", statute.id);
        }
        // First occurrence wins: IPC 307 leads, and 21 appears where the
        // attempt list put it
        assert_eq!(statutes[0].id, "IPC 307");
        let pos_21 = statutes.iter().position(|s| s.id == "21").unwrap();
        assert_eq!(pos_21, 3);
    }

    #[test]
    fn test_order_follows_category_then_listing_order() {
        let m = mapper();
        let statutes = m.map_statutes(&[CaseCategory::Harassment, CaseCategory::Tenancy]);
        let ids: Vec<&str> = statutes.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["IPC 354", "IPC 509", "14", "15", "21", "Rent Act", "IPC 441", "IPC 427"]
        );
    }

    #[test]
    fn test_unmapped_category_yields_explicit_empty() {
        let m = mapper();
        let statutes = m.map_statutes(&[CaseCategory::Corruption]);
        assert!(statutes.is_empty());
        let statutes =
            m.map_statutes(&[CaseCategory::Corruption, CaseCategory::EnvironmentalLaw]);
        assert!(statutes.is_empty());
    }

    #[test]
    fn test_mixed_mapped_and_unmapped_categories() {
        let m = mapper();
        let statutes = m.map_statutes(&[CaseCategory::Corruption, CaseCategory::Theft]);
        assert_eq!(statutes[0].id, "IPC 379");
    }

    #[test]
    fn test_determinism_and_idempotence() {
        let m = mapper();
        let input = [CaseCategory::Cybercrime, CaseCategory::SexualOffense];
        let first = m.map_statutes(&input);
        let second = m.map_statutes(&input);
        assert_eq!(first, second);
    }

    #[test]
    fn test_round_trip_through_catalog() {
        let m = mapper();
        let catalog = StatuteCatalog::builtin();
        for category in [
            CaseCategory::Murder,
            CaseCategory::Robbery,
            CaseCategory::Fraud,
            CaseCategory::DomesticViolence,
            CaseCategory::ChildProtection,
            CaseCategory::HitAndRun,
        ] {
            for statute in m.map_statutes(&[category]) {
                let resolved = catalog.lookup(&statute.id).unwrap();
                assert_eq!(resolved.id, statute.id);
            }
        }
    }

    #[test]
    fn test_every_table_identifier_except_dangling_resolves() {
        let catalog = StatuteCatalog::builtin();
        for (_, ids) in CATEGORY_STATUTES {
            for id in *ids {
                if *id == "IPC 21" {
                    assert!(catalog.lookup(id).is_none());
                } else {
                    assert!(catalog.lookup(id).is_some(), "missing record for {}", id);
                }
            }
        }
    }
}
