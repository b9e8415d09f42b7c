//! Core Types
//!
//! Data structures shared across the analysis engine. No logic here.

use serde::{Deserialize, Serialize};

// ============================================================================
// SENTIMENT
// ============================================================================

/// Sentiment classification of a tweet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sentiment label plus the strength of the signal behind it.
///
/// `intensity` is the absolute compound score and doubles as the confidence
/// stand-in when the classifier provides no probability.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SentimentReading {
    pub label: Sentiment,
    pub intensity: f32,
}

impl Default for SentimentReading {
    fn default() -> Self {
        Self {
            label: Sentiment::Neutral,
            intensity: 0.0,
        }
    }
}

// ============================================================================
// ASSESSMENT
// ============================================================================

/// Category emitted when no keyword table entry matches the text
pub const UNKNOWN_CATEGORY: &str = "Unknown Category";

/// Result of analyzing one tweet.
///
/// Created fresh per input by the orchestrator and immutable once returned.
/// Persistence is the caller's problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TweetAssessment {
    /// Original input, verbatim
    pub text: String,
    pub is_disaster: bool,
    /// In [0, 1]. The predicted-class probability when the classifier
    /// reports one, otherwise the sentiment intensity. The two meanings are
    /// historical and intentionally not unified.
    pub confidence: f32,
    /// Matched category name, or [`UNKNOWN_CATEGORY`]. Never empty.
    pub category: String,
    /// Distinct location mentions. The first element carries no relevance
    /// claim; ordering is an implementation detail.
    pub locations: Vec<String>,
    pub sentiment: Sentiment,
}
