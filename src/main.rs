//! behavior-guard entrypoint: load config and both models once, then serve the HTTP API.

use behavior_guard::{
    api::{self, AppState},
    config::ServiceConfig,
    features::FeatureExtractor,
    logging::StructuredLogger,
    model::{OnnxAnomalyDetector, OnnxFraudClassifier},
    risk::FraudPolicy,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config_path = std::env::var("BGUARD_CONFIG_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.json"));
    let config = ServiceConfig::load(&config_path)?.with_env_overrides();

    StructuredLogger::init(config.log.json, &config.log.level);

    info!(config = %config_path.display(), "behavior-guard starting");

    let detector = OnnxAnomalyDetector::load(
        &config.models.anomaly_model_path,
        config.models.intra_threads,
    )?;
    let classifier = OnnxFraudClassifier::load(
        &config.models.fraud_model_path,
        config.models.intra_threads,
    )?;

    let state = Arc::new(AppState::new(
        FeatureExtractor::new(config.features.clone()),
        Arc::new(detector),
        Arc::new(classifier),
        FraudPolicy::new(config.fraud.clone()),
    ));

    let cors = api::cors_layer(&config.server.cors_origin)?;
    let router = api::create_router(state, cors);
    api::serve(&config.server.bind_addr, router).await?;

    Ok(())
}
