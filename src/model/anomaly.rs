//! Isolation-forest anomaly detector exported to ONNX (`label` and `scores` outputs).

use super::onnx::{float_output, int_output, OnnxModel};
use super::{AnomalyAssessment, AnomalyDetector, ModelError};
use crate::features::FeatureVector;
use std::path::Path;

/// Outlier label emitted by the forest.
const OUTLIER: i64 = -1;

pub struct OnnxAnomalyDetector {
    model: OnnxModel,
}

impl OnnxAnomalyDetector {
    pub fn load(path: &Path, intra_threads: usize) -> Result<Self, ModelError> {
        Ok(Self {
            model: OnnxModel::load("anomaly", path, intra_threads)?,
        })
    }
}

impl AnomalyDetector for OnnxAnomalyDetector {
    fn decision_function(&self, features: &FeatureVector) -> Result<f64, ModelError> {
        Ok(self.assess(features)?.anomaly_score)
    }

    fn is_anomaly(&self, features: &FeatureVector) -> Result<bool, ModelError> {
        Ok(self.assess(features)?.is_anomaly)
    }

    /// One session run yields both the score and the label. Without a label
    /// output the forest's own rule applies: negative score means outlier.
    fn assess(&self, features: &FeatureVector) -> Result<AnomalyAssessment, ModelError> {
        let outputs = self.model.run(&features.to_model_input())?;

        let anomaly_score = float_output(&outputs, "score")
            .and_then(|v| v.first().copied())
            .ok_or_else(|| ModelError::MissingOutput {
                model: self.model.name().to_string(),
                output: "scores",
            })? as f64;

        let is_anomaly = match int_output(&outputs, "label").and_then(|v| v.first().copied()) {
            Some(label) => label == OUTLIER,
            None => anomaly_score < 0.0,
        };

        Ok(AnomalyAssessment {
            anomaly_score,
            is_anomaly,
        })
    }

    fn is_loaded(&self) -> bool {
        self.model.is_loaded()
    }
}
