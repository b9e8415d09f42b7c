//! Term Vectorizer
//!
//! Vocabulary tf-idf transform matching the trained artifact: lowercase,
//! word tokens of two or more characters, term counts weighted by idf, then
//! l2 normalization. Tokens outside the vocabulary are ignored.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::error::AnalyzeError;

use super::vector::FeatureVector;

static WORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("word pattern must compile"));

#[derive(Debug, Deserialize)]
struct VectorizerArtifact {
    /// token -> feature index
    vocabulary: HashMap<String, usize>,
    /// idf weight per feature index
    idf: Vec<f32>,
}

pub struct TermVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
}

impl TermVectorizer {
    pub fn new(vocabulary: HashMap<String, usize>, idf: Vec<f32>) -> Result<Self, AnalyzeError> {
        Self::from_artifact(VectorizerArtifact { vocabulary, idf })
    }

    /// Load and validate the vectorizer artifact.
    pub fn load(path: &Path) -> Result<Self, AnalyzeError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AnalyzeError::ModelUnavailable(format!("vectorizer not readable at {:?}: {}", path, e))
        })?;
        let artifact: VectorizerArtifact = serde_json::from_str(&raw).map_err(|e| {
            AnalyzeError::ModelUnavailable(format!("vectorizer artifact malformed: {}", e))
        })?;
        Self::from_artifact(artifact)
    }

    fn from_artifact(artifact: VectorizerArtifact) -> Result<Self, AnalyzeError> {
        if artifact.vocabulary.is_empty() {
            return Err(AnalyzeError::ModelUnavailable(
                "vectorizer vocabulary is empty".to_string(),
            ));
        }
        for (token, &index) in &artifact.vocabulary {
            if index >= artifact.idf.len() {
                return Err(AnalyzeError::ModelUnavailable(format!(
                    "vectorizer vocabulary index {} for token {:?} exceeds idf table ({})",
                    index,
                    token,
                    artifact.idf.len()
                )));
            }
        }
        Ok(Self {
            vocabulary: artifact.vocabulary,
            idf: artifact.idf,
        })
    }

    /// Output dimension of the transform
    pub fn dim(&self) -> usize {
        self.idf.len()
    }

    /// Transform text into the tf-idf feature vector.
    ///
    /// Deterministic and total: empty text and all-unknown text both yield
    /// the zero vector.
    pub fn transform(&self, text: &str) -> FeatureVector {
        let mut vector = FeatureVector::zeroed(self.dim());
        let values = vector.as_mut_slice();

        let lowered = text.to_lowercase();
        for token in WORD_PATTERN.find_iter(&lowered) {
            if let Some(&index) = self.vocabulary.get(token.as_str()) {
                values[index] += self.idf[index];
            }
        }

        let norm: f32 = values.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for v in values.iter_mut() {
                *v /= norm;
            }
        }

        vector
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn toy_vectorizer() -> TermVectorizer {
        let vocabulary: HashMap<String, usize> = [
            ("earthquake".to_string(), 0),
            ("flood".to_string(), 1),
            ("flooding".to_string(), 2),
            ("beach".to_string(), 3),
        ]
        .into_iter()
        .collect();
        TermVectorizer::from_artifact(VectorizerArtifact {
            vocabulary,
            idf: vec![1.5, 1.2, 1.2, 1.0],
        })
        .unwrap()
    }

    #[test]
    fn test_transform_is_l2_normalized() {
        let v = toy_vectorizer().transform("earthquake and flood");
        let norm: f32 = v.as_slice().iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_unknown_tokens_are_ignored() {
        let v = toy_vectorizer().transform("zebras and xylophones");
        assert!(v.as_slice().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_empty_text_yields_zero_vector() {
        let v = toy_vectorizer().transform("");
        assert_eq!(v.dim(), 4);
        assert!(v.as_slice().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_tokenization_is_case_insensitive() {
        let vz = toy_vectorizer();
        assert_eq!(vz.transform("EARTHQUAKE"), vz.transform("earthquake"));
    }

    #[test]
    fn test_deterministic() {
        let vz = toy_vectorizer();
        let text = "flooding at the beach after the earthquake";
        assert_eq!(vz.transform(text), vz.transform(text));
    }

    #[test]
    fn test_short_tokens_excluded() {
        // the word pattern requires two or more characters; map a
        // single-char token and confirm it never fires
        let vocabulary: HashMap<String, usize> = [("a".to_string(), 0)].into_iter().collect();
        let vz = TermVectorizer::from_artifact(VectorizerArtifact {
            vocabulary,
            idf: vec![1.0],
        })
        .unwrap();
        assert!(vz.transform("a a a").as_slice().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_out_of_range_vocabulary_index_rejected() {
        let vocabulary: HashMap<String, usize> = [("flood".to_string(), 7)].into_iter().collect();
        let result = TermVectorizer::from_artifact(VectorizerArtifact {
            vocabulary,
            idf: vec![1.0],
        });
        assert!(matches!(result, Err(AnalyzeError::ModelUnavailable(_))));
    }

    #[test]
    fn test_load_missing_file_is_model_unavailable() {
        let result = TermVectorizer::load(Path::new("/nonexistent/vectorizer.json"));
        assert!(matches!(result, Err(AnalyzeError::ModelUnavailable(_))));
    }

    #[test]
    fn test_load_reads_artifact_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vectorizer.json");
        std::fs::write(
            &path,
            r#"{"vocabulary": {"earthquake": 0, "flood": 1}, "idf": [1.5, 1.2]}"#,
        )
        .unwrap();

        let vz = TermVectorizer::load(&path).unwrap();
        assert_eq!(vz.dim(), 2);
        assert_eq!(vz.transform("earthquake").as_slice(), &[1.0, 0.0]);
    }

    #[test]
    fn test_load_rejects_malformed_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vectorizer.json");
        std::fs::write(&path, "{not json").unwrap();

        let result = TermVectorizer::load(&path);
        assert!(matches!(result, Err(AnalyzeError::ModelUnavailable(_))));
    }
}
