//! Feature extraction pipeline: trace → kinematics → summary statistics → vector.

use super::kinematics::{mean, sample_std, Kinematics};
use super::{FeatureVector, Trace};
use crate::config::{FeaturesConfig, SingleSampleStd};

/// Stateless; one instance is shared by every request.
#[derive(Debug, Clone, Default)]
pub struct FeatureExtractor {
    config: FeaturesConfig,
}

impl FeatureExtractor {
    pub fn new(config: FeaturesConfig) -> Self {
        Self { config }
    }

    /// Summarize a trace. Samples are used in the order given.
    pub fn extract(&self, trace: &Trace) -> FeatureVector {
        let samples = trace.samples();
        let k = Kinematics::from_samples(samples);

        let total_duration = if samples.len() > 1 {
            trace.last().time_ms
        } else {
            0.0
        };

        FeatureVector {
            mean_velocity: mean(&k.velocity),
            std_velocity: self.std(&k.velocity),
            mean_acceleration: mean(&k.acceleration),
            std_acceleration: self.std(&k.acceleration),
            total_duration,
            num_points: samples.len(),
        }
    }

    fn std(&self, values: &[f64]) -> f64 {
        match (values.len(), self.config.single_sample_std) {
            (1, SingleSampleStd::Zero) => 0.0,
            _ => sample_std(values),
        }
    }
}
