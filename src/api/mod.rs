//! HTTP API: `/analyze-mouse`, `/predict-fraud`, `/health`.

pub mod error;
pub mod handlers;

pub use error::{ApiError, ErrorBody};

use std::sync::Arc;

use axum::{
    extract::Request,
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::features::FeatureExtractor;
use crate::logging::StructuredLogger;
use crate::model::{AnomalyDetector, FraudClassifier};
use crate::risk::FraudPolicy;

/// Shared, read-only request-handling state. Models are loaded once and injected here.
pub struct AppState {
    pub extractor: FeatureExtractor,
    pub detector: Arc<dyn AnomalyDetector>,
    pub classifier: Arc<dyn FraudClassifier>,
    pub fraud_policy: FraudPolicy,
}

impl AppState {
    pub fn new(
        extractor: FeatureExtractor,
        detector: Arc<dyn AnomalyDetector>,
        classifier: Arc<dyn FraudClassifier>,
        fraud_policy: FraudPolicy,
    ) -> Self {
        Self {
            extractor,
            detector,
            classifier,
            fraud_policy,
        }
    }
}

/// CORS for the single configured browser origin.
pub fn cors_layer(origin: &str) -> Result<CorsLayer, header::InvalidHeaderValue> {
    Ok(CorsLayer::new()
        .allow_origin(HeaderValue::from_str(origin)?)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]))
}

/// Create the API router
pub fn create_router(state: Arc<AppState>, cors: CorsLayer) -> Router {
    Router::new()
        .route("/analyze-mouse", post(handlers::analyze_mouse))
        .route("/predict-fraud", post(handlers::predict_fraud))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http().make_span_with(|req: &Request| StructuredLogger::request_span(req)))
        .layer(cors)
        .with_state(state)
}

/// Bind and serve until Ctrl+C.
pub async fn serve(addr: &str, router: Router) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "behavior-guard listening");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("behavior-guard stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl+C; running until killed");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
