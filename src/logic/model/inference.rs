//! ONNX Inference - optional higher-capacity classifier
//!
//! Loads an exported classifier graph and runs it on the scaled feature
//! vector. Loading is best-effort: when the model file is absent the engine
//! stays on the baseline linear path.

use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::{Value, ValueType};
use parking_lot::RwLock;
use std::path::Path;

use crate::error::AnalyzeError;
use crate::logic::features::FeatureVector;

use super::{ModelMetadata, PredictedLabel, Prediction};

pub struct OnnxClassifier {
    // Session::run needs exclusive access; the lock keeps classify callable
    // through &self.
    session: RwLock<Session>,
    output_names: Vec<String>,
    metadata: ModelMetadata,
}

impl OnnxClassifier {
    /// Load the ONNX model from file.
    pub fn load(path: &Path) -> Result<Self, AnalyzeError> {
        log::info!("Loading ONNX model from: {}", path.display());

        if !path.exists() {
            return Err(AnalyzeError::ModelUnavailable(format!(
                "model not found: {}",
                path.display()
            )));
        }

        let session = Session::builder()
            .map_err(|e| {
                AnalyzeError::ModelUnavailable(format!("failed to create session builder: {}", e))
            })?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| {
                AnalyzeError::ModelUnavailable(format!("failed to set optimization: {}", e))
            })?
            .commit_from_file(path)
            .map_err(|e| AnalyzeError::ModelUnavailable(format!("failed to load model: {}", e)))?;

        let output_names: Vec<String> = session.outputs.iter().map(|o| o.name.clone()).collect();
        if output_names.is_empty() {
            return Err(AnalyzeError::ModelUnavailable(
                "model declares no outputs".to_string(),
            ));
        }

        let features = session.inputs.first().and_then(|input| match &input.input_type {
            ValueType::Tensor { shape, .. } => feature_dim(shape),
            _ => None,
        });

        log::info!("ONNX model loaded successfully");

        Ok(Self {
            session: RwLock::new(session),
            output_names,
            metadata: ModelMetadata {
                path: path.display().to_string(),
                kind: "onnx",
                features,
                loaded_at: chrono::Utc::now(),
            },
        })
    }

    pub fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }

    /// Run inference on one scaled feature vector.
    ///
    /// Reads the label from an integer output when the graph exposes one,
    /// otherwise from the argmax of the probabilities output. Probability is
    /// the predicted-class value when a probabilities output exists.
    pub fn predict(&self, features: &FeatureVector) -> Result<Prediction, AnalyzeError> {
        let input_array =
            Array2::<f32>::from_shape_vec((1, features.dim()), features.as_slice().to_vec())
                .map_err(|e| AnalyzeError::Internal(format!("array error: {}", e)))?;

        let input_tensor = Value::from_array(input_array)
            .map_err(|e| AnalyzeError::Internal(format!("tensor error: {}", e)))?;

        let mut session = self.session.write();
        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| AnalyzeError::Internal(format!("inference failed: {}", e)))?;

        let mut explicit_label: Option<PredictedLabel> = None;
        let mut argmax_label: Option<PredictedLabel> = None;
        let mut probability: Option<f32> = None;

        for name in &self.output_names {
            let Some(output) = outputs.get(name) else {
                continue;
            };

            if let Ok(tensor) = output.try_extract_tensor::<f32>() {
                let data = tensor.1;
                if data.len() >= 2 {
                    let (index, value) = argmax(data);
                    argmax_label = Some(PredictedLabel::Index(index as i64));
                    probability = Some(value);
                } else if let Some(&score) = data.first() {
                    // single-score graphs: positive iff score crosses 0.5
                    argmax_label = Some(PredictedLabel::Index((score >= 0.5) as i64));
                    probability = Some(if score >= 0.5 { score } else { 1.0 - score });
                }
            } else if let Ok(tensor) = output.try_extract_tensor::<i64>() {
                if let Some(&v) = tensor.1.first() {
                    explicit_label = Some(PredictedLabel::Index(v));
                }
            }
        }

        let label = explicit_label.or(argmax_label).ok_or_else(|| {
            AnalyzeError::Internal("model produced no usable output tensor".to_string())
        })?;

        Ok(Prediction {
            label,
            probability,
            method: "onnx",
        })
    }
}

/// Feature count from the declared input shape: the trailing dimension,
/// when the export pins it. Dynamic axes report -1 and carry no count.
fn feature_dim(shape: &[i64]) -> Option<usize> {
    shape.last().copied().filter(|&d| d > 0).map(|d| d as usize)
}

fn argmax(data: &[f32]) -> (usize, f32) {
    let mut best = (0usize, f32::NEG_INFINITY);
    for (i, &v) in data.iter().enumerate() {
        if v > best.1 {
            best = (i, v);
        }
    }
    best
}

// ============================================================================
// TESTS
// ============================================================================
