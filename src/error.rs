//! Error handling
//!
//! One taxonomy for every caller of the engine. Callers map `kind()` to
//! their own transport (HTTP layers use 400 for `empty_input`, 500 for the
//! rest).

pub type AnalyzeResult<T> = Result<T, AnalyzeError>;

#[derive(Debug, thiserror::Error)]
pub enum AnalyzeError {
    /// Input was empty or whitespace-only. No computation was attempted.
    #[error("no tweet text provided")]
    EmptyInput,

    /// A required artifact (vectorizer, scaler, baseline model) failed to
    /// load at startup. Every classify call fails until the process is
    /// restarted with a valid artifact set.
    #[error("model unavailable: {0}")]
    ModelUnavailable(String),

    /// Unexpected failure inside a sub-analysis. Details are logged at the
    /// orchestrator boundary; the message stays opaque.
    #[error("internal analysis error: {0}")]
    Internal(String),
}

impl AnalyzeError {
    /// Machine-readable error kind for transport mapping.
    pub fn kind(&self) -> &'static str {
        match self {
            AnalyzeError::EmptyInput => "empty_input",
            AnalyzeError::ModelUnavailable(_) => "model_unavailable",
            AnalyzeError::Internal(_) => "internal_error",
        }
    }

    /// True for errors the user can correct by changing the request.
    pub fn is_user_error(&self) -> bool {
        matches!(self, AnalyzeError::EmptyInput)
    }
}
