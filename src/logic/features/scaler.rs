//! Feature Scaler
//!
//! Per-dimension standardization `(x - mean) / scale` matching the trained
//! scaler artifact. The scale denominator is floored to keep degenerate
//! dimensions finite.

use serde::Deserialize;
use std::path::Path;

use crate::error::AnalyzeError;

use super::vector::FeatureVector;

/// Lower bound for the scale denominator
const SCALE_FLOOR: f32 = 1e-8;

#[derive(Debug, Deserialize)]
pub struct StandardScaler {
    mean: Vec<f32>,
    scale: Vec<f32>,
}

impl StandardScaler {
    pub fn new(mean: Vec<f32>, scale: Vec<f32>) -> Result<Self, AnalyzeError> {
        let scaler = Self { mean, scale };
        scaler.validate()?;
        Ok(scaler)
    }

    /// Load and validate the scaler artifact.
    pub fn load(path: &Path) -> Result<Self, AnalyzeError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AnalyzeError::ModelUnavailable(format!("scaler not readable at {:?}: {}", path, e))
        })?;
        let scaler: StandardScaler = serde_json::from_str(&raw).map_err(|e| {
            AnalyzeError::ModelUnavailable(format!("scaler artifact malformed: {}", e))
        })?;
        scaler.validate()?;
        Ok(scaler)
    }

    fn validate(&self) -> Result<(), AnalyzeError> {
        if self.mean.is_empty() || self.mean.len() != self.scale.len() {
            return Err(AnalyzeError::ModelUnavailable(format!(
                "scaler parameter lengths inconsistent: mean={}, scale={}",
                self.mean.len(),
                self.scale.len()
            )));
        }
        Ok(())
    }

    /// Expected feature dimension
    pub fn dim(&self) -> usize {
        self.mean.len()
    }

    /// Standardize the vector in place.
    pub fn transform(&self, vector: &mut FeatureVector) -> Result<(), AnalyzeError> {
        if vector.dim() != self.dim() {
            return Err(AnalyzeError::Internal(format!(
                "scaler expects {} features, got {}",
                self.dim(),
                vector.dim()
            )));
        }

        for (i, v) in vector.as_mut_slice().iter_mut().enumerate() {
            let scale = self.scale[i].max(SCALE_FLOOR);
            *v = (*v - self.mean[i]) / scale;
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
