//! behavior-guard: pointer-movement anomaly scoring and transaction fraud prediction.
//!
//! Modular structure:
//! - [`features`]: Kinematic feature extraction from pointer traces
//! - [`transaction`]: Transaction records for the fraud model
//! - [`model`]: Classifier traits and ONNX inference adapters
//! - [`risk`]: Fraud threshold labelling
//! - [`api`]: HTTP routes, handlers and error mapping
//! - [`logging`]: Structured JSON logging

pub mod api;
pub mod config;
pub mod features;
pub mod logging;
pub mod model;
pub mod risk;
pub mod transaction;

pub use api::{create_router, AppState};
pub use config::ServiceConfig;
pub use features::{FeatureExtractor, FeatureVector, Sample, Trace};
pub use logging::StructuredLogger;
pub use model::{AnomalyDetector, FraudClassifier, OnnxAnomalyDetector, OnnxFraudClassifier};
pub use risk::FraudPolicy;
pub use transaction::TransactionRecord;
