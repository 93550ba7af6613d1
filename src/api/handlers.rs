//! HTTP endpoint handlers

use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use super::{ApiError, AppState};
use crate::features::Trace;
use crate::model::AnomalyAssessment;
use crate::risk::FraudVerdict;
use crate::transaction::TransactionRecord;

/// Score a pointer trace for anomalous movement.
pub async fn analyze_mouse(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<AnomalyAssessment>, ApiError> {
    let Json(body) = payload?;
    let trace = Trace::from_json(&body)?;
    let features = state.extractor.extract(&trace);
    debug!(?features, finite = features.is_finite(), "mouse features");

    let detector = Arc::clone(&state.detector);
    let assessment = tokio::task::spawn_blocking(move || detector.assess(&features)).await??;

    if assessment.is_anomaly {
        info!(
            score = assessment.anomaly_score,
            num_points = features.num_points,
            "anomalous pointer movement"
        );
    }
    Ok(Json(assessment))
}

/// Label a transaction as fraud or not.
pub async fn predict_fraud(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<FraudVerdict>, ApiError> {
    let Json(body) = payload?;
    let record = TransactionRecord::from_json(body)?;

    let classifier = Arc::clone(&state.classifier);
    let probability = tokio::task::spawn_blocking(move || classifier.probability(&record)).await??;

    let verdict = state.fraud_policy.judge(probability);
    info!(prediction = ?verdict.prediction, probability, "fraud prediction");
    Ok(Json(verdict))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub anomaly_model: bool,
    pub fraud_model: bool,
}

/// Liveness plus which model artifacts are loaded.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        anomaly_model: state.detector.is_loaded(),
        fraud_model: state.classifier.is_loaded(),
    })
}
