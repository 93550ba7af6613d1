//! Pretrained classifiers behind traits so request handling never sees the artifact format.

mod anomaly;
mod fraud;
mod onnx;

pub use anomaly::OnnxAnomalyDetector;
pub use fraud::OnnxFraudClassifier;
pub use onnx::{ModelOutput, OnnxModel, OutputValues};

use crate::features::FeatureVector;
use crate::transaction::TransactionRecord;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model `{0}` is not loaded")]
    NotLoaded(String),
    #[error("onnx runtime: {0}")]
    Runtime(#[from] ort::Error),
    #[error("input shape: {0}")]
    Shape(#[from] ndarray::ShapeError),
    #[error("model `{model}` produced no usable `{output}` output")]
    MissingOutput { model: String, output: &'static str },
    #[error("model `{0}` session lock poisoned")]
    Poisoned(String),
}

/// Decision-function score and outlier label for one feature vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnomalyAssessment {
    pub anomaly_score: f64,
    pub is_anomaly: bool,
}

/// Scores mouse-movement feature vectors. The model owns its decision boundary.
pub trait AnomalyDetector: Send + Sync {
    /// Continuous score; lower is more anomalous.
    fn decision_function(&self, features: &FeatureVector) -> Result<f64, ModelError>;

    /// True when the vector falls outside the learned distribution.
    fn is_anomaly(&self, features: &FeatureVector) -> Result<bool, ModelError>;

    fn assess(&self, features: &FeatureVector) -> Result<AnomalyAssessment, ModelError> {
        Ok(AnomalyAssessment {
            anomaly_score: self.decision_function(features)?,
            is_anomaly: self.is_anomaly(features)?,
        })
    }

    fn is_loaded(&self) -> bool {
        true
    }
}

/// Fraud probability for a transaction record.
pub trait FraudClassifier: Send + Sync {
    fn probability(&self, record: &TransactionRecord) -> Result<f64, ModelError>;

    fn is_loaded(&self) -> bool {
        true
    }
}
