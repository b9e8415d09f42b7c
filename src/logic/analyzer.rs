//! Classification Orchestrator
//!
//! Owns the loaded artifacts and composes the four sub-analyses into one
//! [`TweetAssessment`]. The context is built once at process start and then
//! treated as read-only; `classify` takes `&self` and concurrent callers
//! need no coordination.

use std::path::Path;

use serde::Serialize;

use crate::constants;
use crate::error::{AnalyzeError, AnalyzeResult};
use crate::logic::features::{FeatureVector, StandardScaler, TermVectorizer};
use crate::logic::keywords::{display_category, tag_category};
use crate::logic::locations::{extract_locations, EntityRecognizer};
use crate::logic::model::{LinearModel, ModelMetadata, OnnxClassifier, Prediction};
use crate::logic::sentiment::{score_sentiment, SentimentLexicon};
use crate::logic::types::{SentimentReading, TweetAssessment, UNKNOWN_CATEGORY};

// ============================================================================
// CONTEXT
// ============================================================================

/// Loaded model artifacts, assembled once at startup.
///
/// The vectorizer, scaler and baseline model are the required minimum path:
/// when any of them is missing every classify call fails. The ONNX model,
/// the entity recognizer and the sentiment lexicon are optional enhancers
/// that degrade per-signal instead.
pub struct AnalyzerContext {
    vectorizer: Option<TermVectorizer>,
    scaler: Option<StandardScaler>,
    baseline: Option<LinearModel>,
    advanced: Option<OnnxClassifier>,
    recognizer: Option<Box<dyn EntityRecognizer>>,
    lexicon: Option<SentimentLexicon>,
}

/// Which artifacts made it, for status reporting.
#[derive(Debug, Clone, Serialize)]
pub struct EngineStatus {
    pub vectorizer_loaded: bool,
    pub scaler_loaded: bool,
    pub baseline_loaded: bool,
    pub advanced_loaded: bool,
    pub recognizer_loaded: bool,
    pub lexicon_loaded: bool,
    /// "onnx", "linear", or "unavailable"
    pub inference_path: &'static str,
    /// Metadata of the advanced model, when one loaded
    pub advanced_model: Option<ModelMetadata>,
}

impl AnalyzerContext {
    /// Load every artifact from `dir`, each independently.
    ///
    /// Never fails: missing required artifacts are reported per classify
    /// call, missing optional ones only cost their signal.
    pub fn load(dir: &Path) -> Self {
        let vectorizer = TermVectorizer::load(&dir.join(constants::VECTORIZER_FILE))
            .map_err(|e| log::error!("Vectorizer load failed: {}", e))
            .ok();
        let scaler = StandardScaler::load(&dir.join(constants::SCALER_FILE))
            .map_err(|e| log::error!("Scaler load failed: {}", e))
            .ok();
        let baseline = LinearModel::load(&dir.join(constants::BASELINE_MODEL_FILE))
            .map_err(|e| log::error!("Baseline model load failed: {}", e))
            .ok();

        let advanced = OnnxClassifier::load(&dir.join(constants::ADVANCED_MODEL_FILE))
            .map_err(|e| log::warn!("Advanced model not loaded: {} - using baseline path", e))
            .ok();
        let lexicon = SentimentLexicon::load(&dir.join(constants::SENTIMENT_LEXICON_FILE))
            .map_err(|e| log::warn!("Sentiment lexicon not loaded: {} - sentiment will read neutral", e))
            .ok();

        // No recognizer ships with the artifacts; embedders inject one via
        // with_recognizer. Location extraction falls back to patterns only.
        log::info!("Entity recognizer not configured - location extraction uses patterns only");

        Self::assemble(vectorizer, scaler, baseline).with_optional(advanced, lexicon)
    }

    /// Assemble a context from already-loaded required artifacts.
    ///
    /// Artifacts with disagreeing feature dimensions are rejected as a set:
    /// classify must never feed a vector into a model of another shape.
    pub fn assemble(
        vectorizer: Option<TermVectorizer>,
        scaler: Option<StandardScaler>,
        baseline: Option<LinearModel>,
    ) -> Self {
        let (vectorizer, scaler, baseline) = match (vectorizer, scaler, baseline) {
            (Some(v), Some(s), Some(b)) if v.dim() != s.dim() || v.dim() != b.dim() => {
                log::error!(
                    "Artifact feature dimensions disagree: vectorizer={}, scaler={}, model={}",
                    v.dim(),
                    s.dim(),
                    b.dim()
                );
                (None, None, None)
            }
            parts => parts,
        };

        Self {
            vectorizer,
            scaler,
            baseline,
            advanced: None,
            recognizer: None,
            lexicon: None,
        }
    }

    fn with_optional(mut self, advanced: Option<OnnxClassifier>, lexicon: Option<SentimentLexicon>) -> Self {
        self.advanced = advanced;
        self.lexicon = lexicon;
        self
    }

    pub fn with_advanced(mut self, advanced: OnnxClassifier) -> Self {
        self.advanced = Some(advanced);
        self
    }

    pub fn with_recognizer(mut self, recognizer: Box<dyn EntityRecognizer>) -> Self {
        self.recognizer = Some(recognizer);
        self
    }

    pub fn with_lexicon(mut self, lexicon: SentimentLexicon) -> Self {
        self.lexicon = Some(lexicon);
        self
    }

    pub fn status(&self) -> EngineStatus {
        let required_ok =
            self.vectorizer.is_some() && self.scaler.is_some() && self.baseline.is_some();
        EngineStatus {
            vectorizer_loaded: self.vectorizer.is_some(),
            scaler_loaded: self.scaler.is_some(),
            baseline_loaded: self.baseline.is_some(),
            advanced_loaded: self.advanced.is_some(),
            recognizer_loaded: self.recognizer.is_some(),
            lexicon_loaded: self.lexicon.is_some(),
            inference_path: if !required_ok {
                "unavailable"
            } else if self.advanced.is_some() {
                "onnx"
            } else {
                "linear"
            },
            advanced_model: self.advanced.as_ref().map(|m| m.metadata().clone()),
        }
    }

    // ========================================================================
    // CLASSIFICATION
    // ========================================================================

    /// Analyze one tweet.
    ///
    /// Stateless request/response: no retries, no persistence, all-or-nothing
    /// result. Empty and whitespace-only input is rejected before any model
    /// work.
    pub fn classify(&self, text: &str) -> AnalyzeResult<TweetAssessment> {
        if text.trim().is_empty() {
            return Err(AnalyzeError::EmptyInput);
        }

        let result = self.classify_inner(text);
        if let Err(AnalyzeError::Internal(msg)) = &result {
            log::error!("Analysis failed (input length {}): {}", text.len(), msg);
        }
        result
    }

    fn classify_inner(&self, text: &str) -> AnalyzeResult<TweetAssessment> {
        let vectorizer = self.require(&self.vectorizer, "vectorizer")?;
        let scaler = self.require(&self.scaler, "scaler")?;
        let baseline = self.require(&self.baseline, "baseline model")?;

        let mut features = vectorizer.transform(text);
        scaler.transform(&mut features)?;
        let prediction = self.predict(baseline, &features)?;

        // Independent signals; none depends on another or on the classifier.
        let sentiment = score_sentiment(self.lexicon.as_ref(), text);
        let category = tag_category(text)
            .map(display_category)
            .unwrap_or_else(|| UNKNOWN_CATEGORY.to_string());
        let locations = extract_locations(self.recognizer.as_deref(), text);

        Ok(TweetAssessment {
            text: text.to_string(),
            is_disaster: prediction.label.is_disaster(),
            confidence: resolve_confidence(&prediction, &sentiment),
            category,
            locations,
            sentiment: sentiment.label,
        })
    }

    /// Advanced model preferred when loaded, baseline otherwise.
    fn predict(
        &self,
        baseline: &LinearModel,
        features: &FeatureVector,
    ) -> AnalyzeResult<Prediction> {
        if let Some(advanced) = &self.advanced {
            match advanced.predict(features) {
                Ok(prediction) => return Ok(prediction),
                Err(e) => log::debug!("ONNX inference failed ({}), using baseline", e),
            }
        }
        baseline.predict(features)
    }

    fn require<'a, T>(&self, part: &'a Option<T>, name: &str) -> AnalyzeResult<&'a T> {
        part.as_ref()
            .ok_or_else(|| AnalyzeError::ModelUnavailable(format!("{} artifact not loaded", name)))
    }

    /// Analyze each row independently. One bad row never aborts the rest;
    /// callers get a per-row verdict in input order.
    pub fn classify_batch<'a, I>(&self, rows: I) -> Vec<AnalyzeResult<TweetAssessment>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        rows.into_iter().map(|row| self.classify(row)).collect()
    }
}

/// Predicted-class probability when the classifier reports one, sentiment
/// intensity otherwise. Historical double meaning, kept on purpose.
fn resolve_confidence(prediction: &Prediction, sentiment: &SentimentReading) -> f32 {
    prediction
        .probability
        .unwrap_or(sentiment.intensity)
        .clamp(0.0, 1.0)
}

/// Pull the text column out of one batch record: `tweet` preferred, `text`
/// accepted, anything else skipped.
pub fn record_text(record: &serde_json::Value) -> Option<&str> {
    record
        .get("tweet")
        .and_then(serde_json::Value::as_str)
        .or_else(|| record.get("text").and_then(serde_json::Value::as_str))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::model::PredictedLabel;
    use crate::logic::types::Sentiment;
    use std::collections::HashMap;

    // Toy artifact set: "earthquake"/"flooding" push the score up,
    // "sunny"/"love" push it down.
    fn toy_context() -> AnalyzerContext {
        let vocabulary: HashMap<String, usize> = [
            ("earthquake".to_string(), 0),
            ("flooding".to_string(), 1),
            ("sunny".to_string(), 2),
            ("love".to_string(), 3),
        ]
        .into_iter()
        .collect();
        let vectorizer = TermVectorizer::new(vocabulary, vec![1.0; 4]).unwrap();
        let scaler = StandardScaler::new(vec![0.0; 4], vec![1.0; 4]).unwrap();
        let baseline = LinearModel::new(
            vec![4.0, 4.0, -4.0, -4.0],
            -1.0,
            vec![PredictedLabel::Index(0), PredictedLabel::Index(1)],
        )
        .unwrap();

        let lexicon = SentimentLexicon::parse("love\t3.2\t0.4\t[]\nsunny\t1.9\t0.3\t[]\n");

        AnalyzerContext::assemble(Some(vectorizer), Some(scaler), Some(baseline))
            .with_lexicon(lexicon)
    }

    #[test]
    fn test_empty_input_rejected_before_models() {
        // even a context with nothing loaded rejects empty input first
        let bare = AnalyzerContext::assemble(None, None, None);
        assert!(matches!(bare.classify(""), Err(AnalyzeError::EmptyInput)));
        assert!(matches!(
            bare.classify("   \t\n"),
            Err(AnalyzeError::EmptyInput)
        ));
    }

    #[test]
    fn test_missing_required_artifact_fails_classify() {
        let bare = AnalyzerContext::assemble(None, None, None);
        assert!(matches!(
            bare.classify("some text"),
            Err(AnalyzeError::ModelUnavailable(_))
        ));
    }

    #[test]
    fn test_dimension_mismatch_rejected_at_assembly() {
        let vocabulary: HashMap<String, usize> =
            [("flood".to_string(), 0)].into_iter().collect();
        let vectorizer = TermVectorizer::new(vocabulary, vec![1.0]).unwrap();
        let scaler = StandardScaler::new(vec![0.0; 3], vec![1.0; 3]).unwrap();
        let baseline = LinearModel::new(
            vec![1.0],
            0.0,
            vec![PredictedLabel::Index(0), PredictedLabel::Index(1)],
        )
        .unwrap();

        let ctx = AnalyzerContext::assemble(Some(vectorizer), Some(scaler), Some(baseline));
        assert_eq!(ctx.status().inference_path, "unavailable");
        assert!(matches!(
            ctx.classify("flood"),
            Err(AnalyzeError::ModelUnavailable(_))
        ));
    }

    #[test]
    fn test_disaster_text_classified() {
        let ctx = toy_context();
        let result = ctx.classify("Massive earthquake just hit the coast").unwrap();
        assert!(result.is_disaster);
        assert_eq!(result.category, "Earthquake");
        assert!(result.confidence > 0.5);
        assert_eq!(result.text, "Massive earthquake just hit the coast");
    }

    #[test]
    fn test_benign_text_classified() {
        let ctx = toy_context();
        let result = ctx.classify("I love sunny days at the beach").unwrap();
        assert!(!result.is_disaster);
        assert_eq!(result.category, UNKNOWN_CATEGORY);
        assert_eq!(result.sentiment, Sentiment::Positive);
    }

    #[test]
    fn test_deterministic_for_fixed_context() {
        let ctx = toy_context();
        let text = "flooding in the valley, I love none of it";
        let first = ctx.classify(text).unwrap();
        let second = ctx.classify(text).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_degraded_mode_without_lexicon_or_recognizer() {
        let bare = AnalyzerContext::assemble(
            Some(TermVectorizer::new(
                [("earthquake".to_string(), 0)].into_iter().collect(),
                vec![1.0],
            )
            .unwrap()),
            Some(StandardScaler::new(vec![0.0], vec![1.0]).unwrap()),
            Some(LinearModel::new(
                vec![4.0],
                -1.0,
                vec![PredictedLabel::Index(0), PredictedLabel::Index(1)],
            )
            .unwrap()),
        );

        let result = bare.classify("earthquake downtown").unwrap();
        assert!(result.is_disaster);
        assert_eq!(result.sentiment, Sentiment::Neutral);
        // classifier probability still drives confidence
        assert!(result.confidence > 0.5);
    }

    #[test]
    fn test_confidence_falls_back_to_sentiment_intensity() {
        let prediction = Prediction {
            label: PredictedLabel::Index(1),
            probability: None,
            method: "onnx",
        };
        let sentiment = SentimentReading {
            label: Sentiment::Negative,
            intensity: 0.62,
        };
        assert_eq!(resolve_confidence(&prediction, &sentiment), 0.62);
    }

    #[test]
    fn test_confidence_prefers_probability_and_clamps() {
        let sentiment = SentimentReading {
            label: Sentiment::Negative,
            intensity: 0.9,
        };
        let prediction = Prediction {
            label: PredictedLabel::Index(1),
            probability: Some(1.25),
            method: "linear",
        };
        assert_eq!(resolve_confidence(&prediction, &sentiment), 1.0);
    }

    #[test]
    fn test_batch_isolates_row_failures() {
        let ctx = toy_context();
        let rows = ["earthquake hits", "", "I love sunny days"];
        let results = ctx.classify_batch(rows);
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(AnalyzeError::EmptyInput)));
        assert!(results[2].is_ok());
    }

    #[test]
    fn test_record_text_prefers_tweet_column() {
        let both: serde_json::Value =
            serde_json::json!({"tweet": "from tweet", "text": "from text"});
        assert_eq!(record_text(&both), Some("from tweet"));

        let text_only: serde_json::Value = serde_json::json!({"text": "fallback"});
        assert_eq!(record_text(&text_only), Some("fallback"));

        let neither: serde_json::Value = serde_json::json!({"id": 7});
        assert_eq!(record_text(&neither), None);
    }

    #[test]
    fn test_record_text_skips_non_string_tweet_column() {
        let numeric_tweet: serde_json::Value =
            serde_json::json!({"tweet": 5, "text": "usable text"});
        assert_eq!(record_text(&numeric_tweet), Some("usable text"));

        let both_unusable: serde_json::Value = serde_json::json!({"tweet": 5, "text": null});
        assert_eq!(record_text(&both_unusable), None);
    }

    #[test]
    fn test_status_reports_linear_path() {
        let ctx = toy_context();
        let status = ctx.status();
        assert!(status.baseline_loaded);
        assert!(!status.advanced_loaded);
        assert_eq!(status.inference_path, "linear");
    }
}
