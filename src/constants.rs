//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! To change the default artifact directory, only edit this file.

/// Default directory holding the model artifacts
pub const DEFAULT_MODEL_DIR: &str = "models";

/// Baseline linear classifier weights (JSON export of the trained model)
pub const BASELINE_MODEL_FILE: &str = "lr_model.json";

/// Text vectorizer vocabulary + idf weights
pub const VECTORIZER_FILE: &str = "vectorizer.json";

/// Feature scaler parameters
pub const SCALER_FILE: &str = "scaler.json";

/// Optional higher-capacity ONNX classifier
pub const ADVANCED_MODEL_FILE: &str = "disaster_classifier.onnx";

/// Optional sentiment valence lexicon (VADER tab-separated format)
pub const SENTIMENT_LEXICON_FILE: &str = "vader_lexicon.txt";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "Disaster Tweet Analyzer";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get the model artifact directory from environment or use default
pub fn get_model_dir() -> String {
    std::env::var("DISASTER_MODEL_DIR").unwrap_or_else(|_| DEFAULT_MODEL_DIR.to_string())
}
