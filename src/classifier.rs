//! # Category Classifier Module
//!
//! ## Purpose
//! Keyword-driven classification of free-text incident descriptions into zero
//! or more legal-case categories, using an ordered table of pattern rules with
//! priority and suppression logic.
//!
//! ## Input/Output Specification
//! - **Input**: Combined incident-type and description text (any casing)
//! - **Output**: Matched categories in rule-evaluation order, de-duplicated
//! - **Determinism**: Pure function of the input text; no hidden state
//!
//! ## Key Features
//! - Data-driven rule table: `{patterns, category, suppressed_by}` records
//! - All patterns of a rule must match for the rule to fire
//! - A rule is skipped when a category in its suppression set already matched
//!   (the "Attempt to Murder" rule fires before, and suppresses, "Murder")
//! - Word-boundary-anchored keyword alternations keep the original stemming
//!   behavior ("threat" matches "threatened") without bare-substring false
//!   hits ("ill" inside "killed")

use crate::errors::{AnalysisError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// Closed set of case categories the classifier can emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaseCategory {
    #[serde(rename = "Attempt to Murder")]
    AttemptToMurder,
    #[serde(rename = "Murder")]
    Murder,
    #[serde(rename = "Robbery")]
    Robbery,
    #[serde(rename = "Theft")]
    Theft,
    #[serde(rename = "Fraud / Cheating")]
    Fraud,
    #[serde(rename = "Assault")]
    Assault,
    #[serde(rename = "Harassment")]
    Harassment,
    #[serde(rename = "Criminal Intimidation / Threats")]
    Intimidation,
    #[serde(rename = "Cybercrime")]
    Cybercrime,
    #[serde(rename = "Domestic Violence / Family")]
    DomesticViolence,
    #[serde(rename = "Child Abuse / Protection")]
    ChildProtection,
    #[serde(rename = "Sexual Offense")]
    SexualOffense,
    #[serde(rename = "Consumer / Medical Negligence")]
    ConsumerNegligence,
    #[serde(rename = "Landlord / Tenancy")]
    Tenancy,
    #[serde(rename = "Hit and Run / Accident")]
    HitAndRun,
    #[serde(rename = "Corruption")]
    Corruption,
    #[serde(rename = "Environmental Law")]
    EnvironmentalLaw,
}

impl CaseCategory {
    /// Human-readable category label as shown in reports
    pub fn label(&self) -> &'static str {
        match self {
            CaseCategory::AttemptToMurder => "Attempt to Murder",
            CaseCategory::Murder => "Murder",
            CaseCategory::Robbery => "Robbery",
            CaseCategory::Theft => "Theft",
            CaseCategory::Fraud => "Fraud / Cheating",
            CaseCategory::Assault => "Assault",
            CaseCategory::Harassment => "Harassment",
            CaseCategory::Intimidation => "Criminal Intimidation / Threats",
            CaseCategory::Cybercrime => "Cybercrime",
            CaseCategory::DomesticViolence => "Domestic Violence / Family",
            CaseCategory::ChildProtection => "Child Abuse / Protection",
            CaseCategory::SexualOffense => "Sexual Offense",
            CaseCategory::ConsumerNegligence => "Consumer / Medical Negligence",
            CaseCategory::Tenancy => "Landlord / Tenancy",
            CaseCategory::HitAndRun => "Hit and Run / Accident",
            CaseCategory::Corruption => "Corruption",
            CaseCategory::EnvironmentalLaw => "Environmental Law",
        }
    }
}

impl std::fmt::Display for CaseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Static description of one classification rule
struct RuleSpec {
    category: CaseCategory,
    /// Keyword alternation patterns; all must match for the rule to fire
    patterns: &'static [&'static str],
    /// Categories whose earlier match suppresses this rule
    suppressed_by: &'static [CaseCategory],
}

/// Ordered rule table. Evaluation order is priority order: the attempt
/// variant of homicide is checked before the unconditional rule, and the
/// result sequence follows this ordering.
const RULES: &[RuleSpec] = &[
    RuleSpec {
        category: CaseCategory::AttemptToMurder,
        patterns: &[
            r"\b(?:murder|killed|homicide|stab|knife|shoot|poison)",
            r"\b(?:attempt|try|tried|poison|failed|not die|surviv|didn't die|did not die)",
        ],
        suppressed_by: &[],
    },
    RuleSpec {
        category: CaseCategory::Murder,
        patterns: &[r"\b(?:murder|killed|homicide|stab|knife|shoot|poison)"],
        suppressed_by: &[CaseCategory::AttemptToMurder],
    },
    RuleSpec {
        category: CaseCategory::Robbery,
        patterns: &[
            r"\b(?:robbery|robbed|robber|dacoit|snatch|armed|weapon|threaten|knife|gun|forcefully)",
        ],
        suppressed_by: &[],
    },
    RuleSpec {
        category: CaseCategory::Theft,
        patterns: &[r"\b(?:theft|stole|steal|burglar|break[- ]?in|broke into|locker|pick\s?pocket)"],
        suppressed_by: &[],
    },
    RuleSpec {
        category: CaseCategory::Fraud,
        patterns: &[
            r"\b(?:cheat|fraud|scam|fake|forgery|dishonest|builder|online seller|not responding|unreachable|false|mislead)",
        ],
        suppressed_by: &[],
    },
    RuleSpec {
        category: CaseCategory::Assault,
        patterns: &[
            r"\b(?:assault|slap|hit|beat|push|attack|fight|physical|injur|hurt|aggressiv)",
        ],
        suppressed_by: &[],
    },
    RuleSpec {
        category: CaseCategory::Harassment,
        patterns: &[
            r"\b(?:harass|eve teasing|lewd|comment|inappropriate|touch|molest|outrage|modesty|insult|humiliat|public)",
        ],
        suppressed_by: &[],
    },
    RuleSpec {
        category: CaseCategory::Intimidation,
        patterns: &[
            r"\b(?:intimidat|threat|blackmail|fear|frighten|kill you|kill me|kill family|anonymous message|personal details)",
        ],
        suppressed_by: &[],
    },
    RuleSpec {
        category: CaseCategory::Cybercrime,
        patterns: &[
            r"\b(?:cyber|hack|phish|online|account|instagram|facebook|social media|morph|photoshop|obscene|blackmail|profile|lost access|fake image|fake video)",
        ],
        suppressed_by: &[],
    },
    RuleSpec {
        category: CaseCategory::DomesticViolence,
        patterns: &[
            r"\b(?:domestic violence|husband hits|in-laws abuse|dowry|mental torture|abuse|family|spouse|remarry|throw me out|demand money)",
        ],
        suppressed_by: &[],
    },
    RuleSpec {
        category: CaseCategory::ChildProtection,
        patterns: &[
            r"\b(?:child|minor|underage|young girl|maid|beaten|not allowed|school|locked|student|teacher)",
        ],
        suppressed_by: &[],
    },
    RuleSpec {
        category: CaseCategory::SexualOffense,
        patterns: &[
            r"\b(?:rape|gang rape|gangrape|sexual assault|sexual abuse|sexual harassment|vulgar|gesture|bus|crowded|touching|inappropriately|consent|victim|man stood close|purpose)",
        ],
        suppressed_by: &[],
    },
    RuleSpec {
        category: CaseCategory::ConsumerNegligence,
        patterns: &[
            r"\b(?:expired medicine|pharmacy|chemist|sick|illness|refused|responsibility)",
        ],
        suppressed_by: &[],
    },
    RuleSpec {
        category: CaseCategory::Tenancy,
        patterns: &[
            r"\b(?:landlord|rent|water|electricity|disconnect|force leave|evict|illegal)",
        ],
        suppressed_by: &[],
    },
    RuleSpec {
        category: CaseCategory::HitAndRun,
        patterns: &[r"\b(?:hit and run|accident|rash driving|ran over|run over|speeding)"],
        suppressed_by: &[],
    },
    RuleSpec {
        category: CaseCategory::Corruption,
        patterns: &[r"\b(?:corruption|bribe|graft|public servant)"],
        suppressed_by: &[],
    },
    RuleSpec {
        category: CaseCategory::EnvironmentalLaw,
        patterns: &[r"\b(?:pollution|environment|wildlife|forest|water act|air act)"],
        suppressed_by: &[],
    },
];

/// Compiled classification rule
struct CompiledRule {
    category: CaseCategory,
    patterns: Vec<Regex>,
    suppressed_by: &'static [CaseCategory],
}

/// Category classifier holding the compiled rule table
pub struct CaseClassifier {
    rules: Vec<CompiledRule>,
}

impl CaseClassifier {
    /// Compile the rule table
    pub fn new() -> Result<Self> {
        let mut rules = Vec::with_capacity(RULES.len());

        for spec in RULES {
            let mut patterns = Vec::with_capacity(spec.patterns.len());
            for pattern in spec.patterns {
                patterns.push(Regex::new(pattern).map_err(|e| AnalysisError::Internal {
                    message: format!("Invalid classification pattern '{}': {}", pattern, e),
                })?);
            }
            rules.push(CompiledRule {
                category: spec.category,
                patterns,
                suppressed_by: spec.suppressed_by,
            });
        }

        Ok(Self { rules })
    }

    /// Classify free text into case categories.
    ///
    /// Rules are evaluated in table order; a rule fires when all of its
    /// patterns match and none of its suppressing categories has already
    /// matched. The result preserves first-occurrence order with no
    /// duplicates. Text matching no rule yields an empty vector.
    pub fn classify(&self, text: &str) -> Vec<CaseCategory> {
        let normalized = normalize_case_text(text);
        let mut matched: Vec<CaseCategory> = Vec::new();

        for rule in &self.rules {
            if matched.contains(&rule.category) {
                continue;
            }
            if rule
                .suppressed_by
                .iter()
                .any(|category| matched.contains(category))
            {
                continue;
            }
            if rule.patterns.iter().all(|re| re.is_match(&normalized)) {
                matched.push(rule.category);
            }
        }

        tracing::debug!(
            "Classified {} chars of text into {} categories",
            text.len(),
            matched.len()
        );
        matched
    }

    /// Number of rules in the table
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

/// Build the combined classification text from the incident-type and
/// description fields, as the classifier expects it.
pub fn combined_text(incident_type: &str, description: &str) -> String {
    format!("{} {}", incident_type, description)
}

/// Normalize text for classification: Unicode NFC, lower-case, collapsed
/// whitespace.
fn normalize_case_text(text: &str) -> String {
    let nfc: String = text.nfc().collect();
    nfc.to_lowercase().split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> CaseClassifier {
        CaseClassifier::new().unwrap()
    }

    #[test]
    fn test_unrecognized_text_yields_empty() {
        let c = classifier();
        assert!(c.classify("my neighbor's dog barks loudly").is_empty());
        assert!(c.classify("").is_empty());
        assert!(c.classify("   \n\t  ").is_empty());
    }

    #[test]
    fn test_theft_scenario() {
        let c = classifier();
        let text = combined_text("theft", "stole my bike");
        let categories = c.classify(&text);
        assert!(categories.contains(&CaseCategory::Theft));
    }

    #[test]
    fn test_attempt_suppresses_completed_murder() {
        let c = classifier();
        let categories = c.classify("He was stabbed but survived the attack");
        assert!(categories.contains(&CaseCategory::AttemptToMurder));
        assert!(!categories.contains(&CaseCategory::Murder));
    }

    #[test]
    fn test_completed_murder_without_attempt_qualifier() {
        let c = classifier();
        let categories = c.classify("my brother was murdered last night");
        assert_eq!(categories[0], CaseCategory::Murder);
        assert!(!categories.contains(&CaseCategory::AttemptToMurder));
    }

    #[test]
    fn test_classification_is_case_insensitive() {
        let c = classifier();
        let lower = c.classify("someone hacked my instagram account");
        let upper = c.classify("SOMEONE HACKED MY INSTAGRAM ACCOUNT");
        assert_eq!(lower, upper);
        assert!(lower.contains(&CaseCategory::Cybercrime));
    }

    #[test]
    fn test_multiple_categories_in_rule_order() {
        let c = classifier();
        let categories =
            c.classify("robbers threatened me with a knife and stole my wallet");
        let robbery = categories
            .iter()
            .position(|&cat| cat == CaseCategory::Robbery)
            .unwrap();
        let theft = categories
            .iter()
            .position(|&cat| cat == CaseCategory::Theft)
            .unwrap();
        assert!(robbery < theft, "rule order must be preserved");
    }

    #[test]
    fn test_no_duplicate_categories() {
        let c = classifier();
        // "theft" and "stole" both hit the theft rule
        let categories = c.classify("theft: they stole and stole again");
        let theft_count = categories
            .iter()
            .filter(|&&cat| cat == CaseCategory::Theft)
            .count();
        assert_eq!(theft_count, 1);
    }

    #[test]
    fn test_idempotence() {
        let c = classifier();
        let text = "my landlord disconnected the water and threatened to evict me";
        assert_eq!(c.classify(text), c.classify(text));
    }

    #[test]
    fn test_word_boundaries_prevent_substring_hits() {
        let c = classifier();
        // "parent" must not trip the tenancy rule via "rent"
        let categories = c.classify("my parent visited yesterday");
        assert!(!categories.contains(&CaseCategory::Tenancy));
        // "killed" must not trip consumer negligence via "ill"
        let categories = c.classify("the goat was killed");
        assert!(!categories.contains(&CaseCategory::ConsumerNegligence));
    }

    #[test]
    fn test_stemmed_keyword_prefixes_still_match() {
        let c = classifier();
        let categories = c.classify("he threatened my family over the phone");
        assert!(categories.contains(&CaseCategory::Intimidation));
    }

    #[test]
    fn test_supplemental_categories() {
        let c = classifier();
        assert!(c
            .classify("the clerk demanded a bribe to process my papers")
            .contains(&CaseCategory::Corruption));
        assert!(c
            .classify("the factory is releasing pollution into the river")
            .contains(&CaseCategory::EnvironmentalLaw));
        assert!(c
            .classify("a speeding car ran over a pedestrian and fled")
            .contains(&CaseCategory::HitAndRun));
    }

    #[test]
    fn test_domestic_violence_keywords() {
        let c = classifier();
        let categories = c.classify("my in-laws abuse me for dowry every day");
        assert!(categories.contains(&CaseCategory::DomesticViolence));
    }
}
