//! Baseline Linear Classifier
//!
//! Logistic model over the scaled feature vector, loaded from a JSON export
//! of the trained weights. This is the required minimum path; the ONNX
//! model in `inference` is an optional upgrade on top of it.

use serde::Deserialize;
use std::path::Path;

use crate::error::AnalyzeError;
use crate::logic::features::FeatureVector;

use super::{PredictedLabel, Prediction};

fn default_classes() -> Vec<PredictedLabel> {
    vec![PredictedLabel::Index(0), PredictedLabel::Index(1)]
}

#[derive(Debug, Deserialize)]
pub struct LinearModel {
    weights: Vec<f32>,
    bias: f32,
    /// Class labels in model order: [negative, positive]. Artifacts exported
    /// without labels default to integer classes.
    #[serde(default = "default_classes")]
    classes: Vec<PredictedLabel>,
}

impl LinearModel {
    pub fn new(
        weights: Vec<f32>,
        bias: f32,
        classes: Vec<PredictedLabel>,
    ) -> Result<Self, AnalyzeError> {
        let model = Self {
            weights,
            bias,
            classes,
        };
        model.validate()?;
        Ok(model)
    }

    /// Load and validate the weight artifact.
    pub fn load(path: &Path) -> Result<Self, AnalyzeError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AnalyzeError::ModelUnavailable(format!(
                "baseline model not readable at {:?}: {}",
                path, e
            ))
        })?;
        let model: LinearModel = serde_json::from_str(&raw).map_err(|e| {
            AnalyzeError::ModelUnavailable(format!("baseline model artifact malformed: {}", e))
        })?;
        model.validate()?;
        Ok(model)
    }

    fn validate(&self) -> Result<(), AnalyzeError> {
        if self.weights.is_empty() {
            return Err(AnalyzeError::ModelUnavailable(
                "baseline model has no weights".to_string(),
            ));
        }
        if self.classes.len() != 2 {
            return Err(AnalyzeError::ModelUnavailable(format!(
                "baseline model must declare 2 classes, found {}",
                self.classes.len()
            )));
        }
        Ok(())
    }

    /// Expected feature dimension
    pub fn dim(&self) -> usize {
        self.weights.len()
    }

    /// Run the logistic model on one scaled feature vector.
    pub fn predict(&self, features: &FeatureVector) -> Result<Prediction, AnalyzeError> {
        if features.dim() != self.dim() {
            return Err(AnalyzeError::Internal(format!(
                "baseline model expects {} features, got {}",
                self.dim(),
                features.dim()
            )));
        }

        let z: f32 = self
            .weights
            .iter()
            .zip(features.as_slice())
            .map(|(w, x)| w * x)
            .sum::<f32>()
            + self.bias;
        let positive = sigmoid(z);

        let (class_index, class_probability) = if positive >= 0.5 {
            (1, positive)
        } else {
            (0, 1.0 - positive)
        };

        Ok(Prediction {
            label: self.classes[class_index].clone(),
            probability: Some(class_probability),
            method: "linear",
        })
    }
}

fn sigmoid(z: f32) -> f32 {
    1.0 / (1.0 + (-z).exp())
}

// ============================================================================
// TESTS
// ============================================================================
