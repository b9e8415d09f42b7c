//! Sentiment Scoring
//!
//! Lexicon-based polarity scoring in the VADER style: sum the valence of
//! every known token, normalize into a bounded compound score, then cut at
//! the canonical thresholds. The thresholds are exact: a compound of 0.05
//! is already Positive and -0.05 already Negative.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::path::Path;

use super::types::{Sentiment, SentimentReading};

/// Positive at or above this compound score
pub const POSITIVE_THRESHOLD: f32 = 0.05;

/// Negative at or below this compound score
pub const NEGATIVE_THRESHOLD: f32 = -0.05;

/// VADER normalization constant: compound = s / sqrt(s^2 + ALPHA)
const NORMALIZATION_ALPHA: f32 = 15.0;

static TOKEN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w+\b").expect("token pattern must compile"));

// ============================================================================
// LEXICON
// ============================================================================

/// Token-to-valence lexicon parsed from the tab-separated VADER format
/// (`token<TAB>mean valence<TAB>...`).
pub struct SentimentLexicon {
    valences: HashMap<String, f32>,
}

impl SentimentLexicon {
    /// Parse a lexicon file. Lines that do not carry a token and a numeric
    /// valence are skipped rather than failing the whole load.
    pub fn load(path: &Path) -> std::io::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(Self::parse(&raw))
    }

    pub fn parse(raw: &str) -> Self {
        let mut valences = HashMap::new();
        for line in raw.lines() {
            let mut fields = line.split('\t');
            let (Some(token), Some(valence)) = (fields.next(), fields.next()) else {
                continue;
            };
            if let Ok(v) = valence.trim().parse::<f32>() {
                valences.insert(token.to_lowercase(), v);
            }
        }
        log::debug!("Sentiment lexicon loaded: {} tokens", valences.len());
        Self { valences }
    }

    pub fn len(&self) -> usize {
        self.valences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.valences.is_empty()
    }

    /// Aggregate signed polarity of the text, in [-1, 1].
    pub fn compound(&self, text: &str) -> f32 {
        let lowered = text.to_lowercase();
        let sum: f32 = TOKEN_PATTERN
            .find_iter(&lowered)
            .filter_map(|t| self.valences.get(t.as_str()))
            .sum();

        if sum == 0.0 {
            return 0.0;
        }
        (sum / (sum * sum + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
    }
}

// ============================================================================
// CLASSIFICATION
// ============================================================================

/// Cut a compound score at the canonical thresholds.
///
/// Intensity is the absolute compound value, kept for use as a confidence
/// stand-in downstream.
pub fn classify_compound(compound: f32) -> SentimentReading {
    let label = if compound >= POSITIVE_THRESHOLD {
        Sentiment::Positive
    } else if compound <= NEGATIVE_THRESHOLD {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    };

    SentimentReading {
        label,
        intensity: compound.abs(),
    }
}

/// Score the text, or fall back to a neutral zero reading when no lexicon
/// was loaded. Soft failure only.
pub fn score_sentiment(lexicon: Option<&SentimentLexicon>, text: &str) -> SentimentReading {
    match lexicon {
        Some(lex) => classify_compound(lex.compound(text)),
        None => SentimentReading::default(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
