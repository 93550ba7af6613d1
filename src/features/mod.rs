//! Kinematic feature extraction from raw pointer traces.

mod kinematics;
mod pipeline;
mod trace;

pub use kinematics::{mean, sample_std, Kinematics};
pub use pipeline::FeatureExtractor;
pub use trace::{Sample, Trace, TraceError};

use serde::{Deserialize, Serialize};

/// Number of scalars in a [`FeatureVector`].
pub const FEATURE_DIM: usize = 6;

/// Column names in model-input order.
pub const FEATURE_NAMES: [&str; FEATURE_DIM] = [
    "mean_velocity",
    "std_velocity",
    "mean_acceleration",
    "std_acceleration",
    "total_duration",
    "num_points",
];

/// Fixed-width kinematic summary of one trace.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub mean_velocity: f64,
    pub std_velocity: f64,
    pub mean_acceleration: f64,
    pub std_acceleration: f64,
    pub total_duration: f64,
    pub num_points: usize,
}

impl FeatureVector {
    /// Values in [`FEATURE_NAMES`] order, narrowed to the model's f32 input type.
    pub fn to_model_input(&self) -> [f32; FEATURE_DIM] {
        [
            self.mean_velocity as f32,
            self.std_velocity as f32,
            self.mean_acceleration as f32,
            self.std_acceleration as f32,
            self.total_duration as f32,
            self.num_points as f32,
        ]
    }

    /// False when any statistic is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        [
            self.mean_velocity,
            self.std_velocity,
            self.mean_acceleration,
            self.std_acceleration,
            self.total_duration,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}
