//! Transaction fraud model exported to ONNX.

use super::onnx::{float_output, int_output, ModelOutput, OnnxModel};
use super::{FraudClassifier, ModelError};
use crate::transaction::TransactionRecord;
use std::path::Path;

pub struct OnnxFraudClassifier {
    model: OnnxModel,
}

impl OnnxFraudClassifier {
    pub fn load(path: &Path, intra_threads: usize) -> Result<Self, ModelError> {
        Ok(Self {
            model: OnnxModel::load("fraud", path, intra_threads)?,
        })
    }
}

/// Classifier exports give [1, n_classes] probabilities (fraud is class 1);
/// regressor exports give a single value that is used as-is.
fn fraud_probability(values: &[f32]) -> Option<f64> {
    match values {
        [] => None,
        [single] => Some(*single as f64),
        [_, fraud, ..] => Some(*fraud as f64),
    }
}

/// Sklearn classifier exports without `zipmap=False` return probabilities as a
/// sequence of maps, which is skipped when outputs are copied; the hard label
/// (0 or 1) stands in for the probability then.
fn fraud_score(outputs: &[ModelOutput]) -> Option<f64> {
    float_output(outputs, "prob")
        .and_then(fraud_probability)
        .or_else(|| int_output(outputs, "label")?.first().map(|&label| label as f64))
}

impl FraudClassifier for OnnxFraudClassifier {
    fn probability(&self, record: &TransactionRecord) -> Result<f64, ModelError> {
        let outputs = self.model.run(&record.to_model_input())?;
        fraud_score(&outputs).ok_or_else(|| ModelError::MissingOutput {
            model: self.model.name().to_string(),
            output: "probabilities",
        })
    }

    fn is_loaded(&self) -> bool {
        self.model.is_loaded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OutputValues;

    #[test]
    fn picks_fraud_class_probability() {
        assert_eq!(fraud_probability(&[0.25, 0.75]), Some(0.75));
        assert_eq!(fraud_probability(&[0.5]), Some(0.5));
        assert_eq!(fraud_probability(&[]), None);
    }

    #[test]
    fn label_stands_in_when_probabilities_are_a_map() {
        let outputs = vec![ModelOutput { name: "output_label".into(), values: OutputValues::Int(vec![1]) }];
        assert_eq!(fraud_score(&outputs), Some(1.0));

        let outputs = vec![
            ModelOutput { name: "output_label".into(), values: OutputValues::Int(vec![0]) },
            ModelOutput { name: "output_probability".into(), values: OutputValues::Float(vec![0.1, 0.9]) },
        ];
        assert_eq!(fraud_score(&outputs), Some(0.9_f32 as f64));
        assert_eq!(fraud_score(&[]), None);
    }
}
