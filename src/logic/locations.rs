//! Location Extraction
//!
//! Two independent sources merged into one deduplicated list: named-entity
//! spans from an injected recognizer, and a small fixed set of textual
//! patterns applied to the raw (not lowercased) text.
//!
//! The result is a set in contract terms: callers must not read relevance
//! into the ordering. The engine iterates NER spans first and pattern hits
//! second only so that repeated runs are byte-for-byte identical.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

// ============================================================================
// ENTITY RECOGNIZER SEAM
// ============================================================================

/// One tagged span from the recognizer, in its own taxonomy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySpan {
    pub text: String,
    /// Recognizer label, e.g. "GPE", "LOC", "ORG". Not reinterpreted here.
    pub label: String,
}

/// Injected named-entity recognizer.
///
/// The engine only consumes spans labeled `GPE` or `LOC`; everything else is
/// the recognizer's business. Implementations must be cheap and bounded per
/// call.
pub trait EntityRecognizer: Send + Sync {
    fn entities(&self, text: &str) -> Vec<EntitySpan>;
}

/// Span labels treated as place mentions
const PLACE_LABELS: [&str; 2] = ["GPE", "LOC"];

// ============================================================================
// PATTERN SOURCE
// ============================================================================

static LOCATION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // trailing administrative noun: "mexico city", "texas state"
        r"\b\w+(?: city| town| village| state| province| country)\b",
        // trailing geographic noun: "mississippi river", "crater lake"
        r"\b\w+(?: mountain| river| lake| ocean| sea)\b",
        // US "City, ST" format: "Denver, CO"
        r"\b[A-Z][a-z]+, [A-Z]{2}\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("location pattern must compile"))
    .collect()
});

// ============================================================================
// EXTRACTION
// ============================================================================

/// Extract distinct location mentions from the text.
///
/// Never fails: an absent recognizer, an empty span list, and zero pattern
/// hits all just shrink the result, possibly to empty.
pub fn extract_locations(recognizer: Option<&dyn EntityRecognizer>, text: &str) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut locations: Vec<String> = Vec::new();

    if let Some(ner) = recognizer {
        for span in ner.entities(text) {
            if PLACE_LABELS.contains(&span.label.as_str()) && seen.insert(span.text.clone()) {
                locations.push(span.text);
            }
        }
    }

    for pattern in LOCATION_PATTERNS.iter() {
        for hit in pattern.find_iter(text) {
            let candidate = hit.as_str().to_string();
            if seen.insert(candidate.clone()) {
                locations.push(candidate);
            }
        }
    }

    locations
}

// ============================================================================
// TESTS
// ============================================================================
