//! Turns a fraud probability into a categorical label with a fixed threshold.

use crate::config::FraudConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FraudLabel {
    #[serde(rename = "FRAUD")]
    Fraud,
    #[serde(rename = "NOT FRAUD")]
    NotFraud,
}

impl FraudLabel {
    /// Strictly greater than the threshold is fraud.
    pub fn from_probability(probability: f64, config: &FraudConfig) -> Self {
        if probability > config.threshold {
            FraudLabel::Fraud
        } else {
            FraudLabel::NotFraud
        }
    }
}

/// Verdict for a single transaction, shaped as the API response.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FraudVerdict {
    pub prediction: FraudLabel,
    pub probability: f64,
}

#[derive(Debug, Clone, Default)]
pub struct FraudPolicy {
    config: FraudConfig,
}

impl FraudPolicy {
    pub fn new(config: FraudConfig) -> Self {
        Self { config }
    }

    pub fn judge(&self, probability: f64) -> FraudVerdict {
        FraudVerdict {
            prediction: FraudLabel::from_probability(probability, &self.config),
            probability,
        }
    }

    pub fn config(&self) -> &FraudConfig {
        &self.config
    }
}
