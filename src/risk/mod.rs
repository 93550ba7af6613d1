//! Fraud labelling policy.

mod engine;

pub use engine::{FraudLabel, FraudPolicy, FraudVerdict};
