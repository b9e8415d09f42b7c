//! Classifier Layer
//!
//! Two inference paths behind one prediction type: the optional ONNX model
//! (`inference`) and the baseline linear model (`baseline`). The orchestrator
//! prefers the ONNX path when it loaded and falls back to the baseline
//! otherwise; everything downstream only sees a [`Prediction`].

pub mod baseline;
pub mod inference;

use serde::{Deserialize, Serialize};

pub use baseline::LinearModel;
pub use inference::OnnxClassifier;

// ============================================================================
// PREDICTION
// ============================================================================

/// Raw classifier label as it appears in the artifact or model output.
///
/// Trained artifacts disagree on representation: some carry the class as an
/// integer (0/1), others as a string label. The untagged serde form accepts
/// both; [`PredictedLabel::is_disaster`] is the single place that collapses
/// them to a boolean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PredictedLabel {
    Index(i64),
    Name(String),
}

impl PredictedLabel {
    /// Normalize either representation to the disaster boolean.
    pub fn is_disaster(&self) -> bool {
        match self {
            PredictedLabel::Index(n) => *n != 0,
            PredictedLabel::Name(s) => {
                matches!(s.to_lowercase().as_str(), "disaster" | "1" | "true")
            }
        }
    }
}

/// Output of one classifier run.
#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    pub label: PredictedLabel,
    /// Predicted-class probability, when the model reports one
    pub probability: Option<f32>,
    /// Which path produced this ("onnx" or "linear")
    pub method: &'static str,
}

// ============================================================================
// METADATA
// ============================================================================

/// Model metadata for status reporting
#[derive(Debug, Clone, Serialize)]
pub struct ModelMetadata {
    pub path: String,
    pub kind: &'static str,
    /// Feature dimension, when the artifact declares one
    pub features: Option<usize>,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
}

// ============================================================================
// TESTS
// ============================================================================
