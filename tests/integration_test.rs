//! Integration test: config load, trace validation, feature extraction, fraud policy.

use behavior_guard::{
    config::{FeaturesConfig, FraudConfig, ServiceConfig, SingleSampleStd},
    features::{FeatureExtractor, Sample, Trace, FEATURE_NAMES},
    risk::{FraudLabel, FraudPolicy},
};
use std::path::Path;

fn trace(points: &[(f64, f64, f64)]) -> Trace {
    Trace::new(points.iter().map(|&(x, y, t)| Sample::new(x, y, t)).collect()).unwrap()
}

#[test]
fn config_load_default() {
    let c = ServiceConfig::load(Path::new("nonexistent.json")).unwrap();
    assert_eq!(c.fraud.threshold, 0.95);
    assert_eq!(c.server.cors_origin, "http://localhost:5173");
    assert_eq!(c.features.single_sample_std, SingleSampleStd::Nan);
}

#[test]
fn config_partial_file_keeps_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{"fraud": {"threshold": 0.8}, "features": {"single_sample_std": "zero"}}"#,
    )
    .unwrap();
    let c = ServiceConfig::load(&path).unwrap();
    assert_eq!(c.fraud.threshold, 0.8);
    assert_eq!(c.features.single_sample_std, SingleSampleStd::Zero);
    assert_eq!(c.server.bind_addr, "127.0.0.1:5001");
    assert_eq!(c.models.intra_threads, 1);
}

#[test]
fn config_malformed_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(ServiceConfig::load(&path).is_err());
}

#[test]
fn single_sample_trace() {
    let f = FeatureExtractor::default().extract(&trace(&[(120.0, 80.0, 60000.0)]));
    assert_eq!(f.num_points, 1);
    assert_eq!(f.total_duration, 0.0);
    assert_eq!(f.mean_velocity, 0.0);
    assert_eq!(f.mean_acceleration, 0.0);
    assert!(f.std_velocity.is_nan());
    assert!(f.std_acceleration.is_nan());
    assert!(!f.is_finite());
}

#[test]
fn single_sample_std_can_be_zero() {
    let extractor = FeatureExtractor::new(FeaturesConfig {
        single_sample_std: SingleSampleStd::Zero,
    });
    let f = extractor.extract(&trace(&[(120.0, 80.0, 60000.0)]));
    assert_eq!(f.std_velocity, 0.0);
    assert_eq!(f.std_acceleration, 0.0);
    assert!(f.is_finite());

    // only the one-element case is affected
    let f = extractor.extract(&trace(&[(0.0, 0.0, 0.0), (3.0, 4.0, 1.0)]));
    assert_eq!(f.std_velocity, 12.5_f64.sqrt());
}

#[test]
fn three_four_five_trace() {
    let f = FeatureExtractor::default().extract(&trace(&[(0.0, 0.0, 0.0), (3.0, 4.0, 1.0), (3.0, 4.0, 2.0)]));
    assert_eq!(f.mean_velocity, 5.0 / 3.0);
    assert_eq!(f.mean_acceleration, 0.0);
    assert_eq!(f.std_acceleration, 5.0);
    assert_eq!(f.total_duration, 2.0);
    assert_eq!(f.num_points, 3);
}

#[test]
fn repeated_sample_keeps_statistics_finite() {
    let f = FeatureExtractor::default().extract(&trace(&[(0.0, 0.0, 0.0), (0.0, 0.0, 0.0), (3.0, 4.0, 1.0)]));
    assert_eq!(f.mean_velocity, 2.5);
    assert_eq!(f.std_velocity, 12.5_f64.sqrt());
    assert_eq!(f.mean_acceleration, 0.0);
    assert_eq!(f.std_acceleration, 0.0);
    assert_eq!(f.total_duration, 1.0);
    assert_eq!(f.num_points, 3);
    assert!(f.is_finite());
}

#[test]
fn total_duration_is_last_timestamp_not_span() {
    let f = FeatureExtractor::default().extract(&trace(&[(0.0, 0.0, 60000.0), (10.0, 0.0, 120000.0)]));
    assert_eq!(f.total_duration, 120000.0);
}

#[test]
fn num_points_matches_sample_count() {
    let extractor = FeatureExtractor::default();
    for n in [1usize, 2, 7, 64] {
        let points: Vec<_> = (0..n).map(|i| (i as f64 * 2.0, i as f64, i as f64 * 16.0)).collect();
        assert_eq!(extractor.extract(&trace(&points)).num_points, n);
    }
}

#[test]
fn extraction_is_order_sensitive() {
    let extractor = FeatureExtractor::default();
    let forward = extractor.extract(&trace(&[(0.0, 0.0, 0.0), (3.0, 4.0, 1.0), (3.0, 4.0, 2.0)]));
    let reversed = extractor.extract(&trace(&[(3.0, 4.0, 2.0), (3.0, 4.0, 1.0), (0.0, 0.0, 0.0)]));
    assert_ne!(forward.mean_velocity, reversed.mean_velocity);
    assert_ne!(forward.mean_acceleration, reversed.mean_acceleration);
    assert_eq!(reversed.mean_velocity, -5.0 / 3.0);
}

#[test]
fn model_input_follows_feature_names() {
    let f = FeatureExtractor::default().extract(&trace(&[(0.0, 0.0, 0.0), (3.0, 4.0, 1.0), (3.0, 4.0, 2.0)]));
    let row = f.to_model_input();
    assert_eq!(row.len(), FEATURE_NAMES.len());
    assert_eq!(row[4], 2.0);
    assert_eq!(row[5], 3.0);
}

#[test]
fn fraud_threshold_is_strict() {
    let policy = FraudPolicy::new(FraudConfig::default());
    assert_eq!(policy.judge(0.95).prediction, FraudLabel::NotFraud);
    assert_eq!(policy.judge(0.951).prediction, FraudLabel::Fraud);
    assert_eq!(policy.judge(0.1).prediction, FraudLabel::NotFraud);
}
