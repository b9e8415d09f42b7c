//! Integration Tests for the Analysis Engine
//!
//! End-to-end scenarios across feature pipeline, classifier, and the three
//! text signals, with a small hand-built artifact set.

#[cfg(test)]
mod integration_tests {
    use std::collections::HashMap;

    use crate::constants;
    use crate::logic::analyzer::AnalyzerContext;
    use crate::logic::features::{StandardScaler, TermVectorizer};
    use crate::logic::locations::{EntityRecognizer, EntitySpan};
    use crate::logic::model::{LinearModel, PredictedLabel};
    use crate::logic::sentiment::SentimentLexicon;
    use crate::logic::types::{Sentiment, UNKNOWN_CATEGORY};

    struct StaticRecognizer(Vec<EntitySpan>);

    impl EntityRecognizer for StaticRecognizer {
        fn entities(&self, _text: &str) -> Vec<EntitySpan> {
            self.0.clone()
        }
    }

    /// Toy but complete artifact set: disaster vocabulary pushes the score
    /// up, benign vocabulary pushes it down.
    fn engine() -> AnalyzerContext {
        let vocabulary: HashMap<String, usize> = [
            ("earthquake", 0),
            ("tsunami", 1),
            ("flooding", 2),
            ("coast", 3),
            ("love", 4),
            ("sunny", 5),
            ("beach", 6),
            ("days", 7),
        ]
        .into_iter()
        .map(|(token, index)| (token.to_string(), index))
        .collect();

        let vectorizer = TermVectorizer::new(vocabulary, vec![1.0; 8]).unwrap();
        let scaler = StandardScaler::new(vec![0.0; 8], vec![1.0; 8]).unwrap();
        let baseline = LinearModel::new(
            vec![3.0, 3.0, 3.0, 1.0, -3.0, -3.0, -3.0, -1.0],
            -0.5,
            vec![PredictedLabel::Index(0), PredictedLabel::Index(1)],
        )
        .unwrap();
        let lexicon =
            SentimentLexicon::parse("love\t3.2\t0.4\t[]\nsunny\t1.9\t0.3\t[]\nbeach\t1.8\t0.3\t[]\n");

        AnalyzerContext::assemble(Some(vectorizer), Some(scaler), Some(baseline))
            .with_lexicon(lexicon)
    }

    #[test]
    fn test_earthquake_scenario() {
        let result = engine()
            .classify("Massive earthquake just hit the coast of Japan! Tsunami warning issued.")
            .unwrap();

        assert!(result.is_disaster);
        // earthquake precedes tsunami in the category table
        assert_eq!(result.category, "Earthquake");
        assert!(result.confidence > 0.5);
    }

    #[test]
    fn test_benign_beach_scenario() {
        let result = engine().classify("I love sunny days at the beach").unwrap();

        assert!(!result.is_disaster);
        assert_eq!(result.category, UNKNOWN_CATEGORY);
        assert_eq!(result.sentiment, Sentiment::Positive);
    }

    #[test]
    fn test_denver_flood_scenario() {
        let result = engine().classify("Denver, CO is flooding right now").unwrap();

        assert!(result.is_disaster);
        assert_eq!(result.category, "Flood");
        assert!(result.locations.contains(&"Denver, CO".to_string()));
    }

    #[test]
    fn test_recognizer_spans_join_pattern_hits() {
        let engine = engine().with_recognizer(Box::new(StaticRecognizer(vec![EntitySpan {
            text: "Japan".to_string(),
            label: "GPE".to_string(),
        }])));

        let result = engine
            .classify("Massive earthquake just hit the coast of Japan")
            .unwrap();
        assert!(result.locations.contains(&"Japan".to_string()));
    }

    #[test]
    fn test_batch_with_empty_row() {
        let rows = [
            "Massive earthquake just hit the coast",
            "",
            "I love sunny days at the beach",
        ];
        let results = engine().classify_batch(rows);

        assert_eq!(results.len(), 3);
        assert!(results[0].as_ref().unwrap().is_disaster);
        assert!(results[1].is_err());
        assert!(!results[2].as_ref().unwrap().is_disaster);
    }

    #[test]
    fn test_artifact_set_loads_from_disk_and_classifies() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(constants::VECTORIZER_FILE),
            r#"{"vocabulary": {"earthquake": 0, "love": 1}, "idf": [1.0, 1.0]}"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join(constants::SCALER_FILE),
            r#"{"mean": [0.0, 0.0], "scale": [1.0, 1.0]}"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join(constants::BASELINE_MODEL_FILE),
            r#"{"weights": [4.0, -4.0], "bias": -1.0}"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join(constants::SENTIMENT_LEXICON_FILE),
            "love\t3.2\t0.4\t[]\n",
        )
        .unwrap();

        let engine = AnalyzerContext::load(dir.path());
        let status = engine.status();
        assert_eq!(status.inference_path, "linear");
        assert!(status.lexicon_loaded);
        assert!(!status.advanced_loaded);

        let disaster = engine.classify("earthquake downtown").unwrap();
        assert!(disaster.is_disaster);
        assert_eq!(disaster.category, "Earthquake");

        let benign = engine.classify("so much love today").unwrap();
        assert!(!benign.is_disaster);
        assert_eq!(benign.sentiment, Sentiment::Positive);
    }

    #[test]
    fn test_assessment_serializes_with_contract_fields() {
        let result = engine().classify("Denver, CO is flooding right now").unwrap();
        let json = serde_json::to_value(&result).unwrap();

        for field in [
            "text",
            "is_disaster",
            "confidence",
            "category",
            "locations",
            "sentiment",
        ] {
            assert!(json.get(field).is_some(), "missing field {}", field);
        }
        assert_eq!(json["sentiment"], "Neutral");
    }
}
