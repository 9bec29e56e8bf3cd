//! # Rationale Generator Module
//!
//! ## Purpose
//! Fixed-template justification text for resolved statutes, plus the derived
//! display label for a statute identifier. Both functions are total: unknown
//! identifiers yield an empty explanation, never an error.
//!
//! ## Input/Output Specification
//! - **Input**: Statute identifiers / records
//! - **Output**: "Why this law applies" sentences and display labels
//! - **Labels**: Known act prefixes render as "<Act> Section N", bare numbers
//!   as "Article N", anything else verbatim

use crate::catalog::StatuteRecord;

/// Act prefixes whose identifiers render as "<Act> Section N"
const SECTION_PREFIXES: &[&str] = &["IPC", "MV Act", "IT Act", "DV Act", "POCSO", "CPA"];

/// Derive the display label for a statute identifier.
///
/// "IPC 302" -> "IPC Section 302", "MV Act 134" -> "MV Act Section 134",
/// "21" -> "Article 21", "Rent Act" -> "Rent Act".
pub fn full_label(id: &str) -> String {
    for prefix in SECTION_PREFIXES {
        if let Some(rest) = id.strip_prefix(prefix) {
            let rest = rest.trim_start();
            if !rest.is_empty() {
                return format!("{} Section {}", prefix, rest);
            }
        }
    }
    if !id.is_empty() && id.chars().all(|c| c.is_ascii_digit()) {
        return format!("Article {}", id);
    }
    id.to_string()
}

/// Fixed per-identifier explanation of why a statute applies. Identifiers
/// outside the table yield an empty string; the report composer skips those
/// rationale lines.
pub fn explain(statute: &StatuteRecord) -> String {
    let label = full_label(&statute.id);
    match statute.id.as_str() {
        "IPC 302" => format!("{} applies because the case involves murder.", label),
        "IPC 201" => format!(
            "{} applies if there was an attempt to hide evidence or dispose of the body.",
            label
        ),
        "IPC 297" => format!(
            "{} applies if there was indignity to a corpse or trespassing on burial places.",
            label
        ),
        "21" => format!(
            "{} applies as it protects the right to life and personal liberty.",
            label
        ),
        "14" => format!("{} applies as it ensures equality before the law.", label),
        "IPC 304A" => format!(
            "{} applies in cases of death by negligence (e.g., accidents).",
            label
        ),
        "MV Act 134" => format!(
            "{} applies for duties of a driver in case of an accident.",
            label
        ),
        "IPC 376" => format!("{} applies in cases of rape or sexual assault.", label),
        "15" => format!("{} applies as it prohibits discrimination.", label),
        "19" => format!("{} applies for protection of fundamental rights.", label),
        "22" => format!(
            "{} applies for protection against arrest and detention.",
            label
        ),
        "IPC 379" => format!("{} applies in cases of theft.", label),
        "IPC 354" => format!(
            "{} applies in cases of harassment or assault on women.",
            label
        ),
        "IPC 441" => format!(
            "{} applies in cases of criminal trespass or property disputes.",
            label
        ),
        "IPC 120B" => format!(
            "{} applies if there was a criminal conspiracy related to the offence.",
            label
        ),
        "IPC 34" => format!(
            "{} applies when a criminal act is done by several persons in furtherance of common intention.",
            label
        ),
        "IPC 411" => format!(
            "{} applies if someone received or retained stolen property.",
            label
        ),
        "IPC 457" => format!(
            "{} applies in cases of house-breaking or lurking house-trespass by night.",
            label
        ),
        "IPC 427" => format!(
            "{} applies in cases of mischief causing damage to property.",
            label
        ),
        "IPC 228A" => format!(
            "{} applies if there was disclosure of the identity of a victim of certain offences (e.g., rape).",
            label
        ),
        _ => String::new(),
    }
}
