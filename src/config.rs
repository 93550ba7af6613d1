//! Service configuration. Loaded once at startup from a JSON file; every section is optional.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Listener and CORS
    pub server: ServerConfig,
    /// Model artifact locations
    pub models: ModelsConfig,
    /// Feature extraction parameters
    pub features: FeaturesConfig,
    /// Fraud labelling threshold
    pub fraud: FraudConfig,
    /// Logging
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: String,
    /// The single browser origin allowed to call the API
    pub cors_origin: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelsConfig {
    /// Isolation-forest ONNX export used for mouse anomaly scoring
    pub anomaly_model_path: PathBuf,
    /// Transaction fraud ONNX export
    pub fraud_model_path: PathBuf,
    /// ONNX Runtime intra-op threads per session
    pub intra_threads: usize,
}

/// What the standard deviation of a one-element sequence evaluates to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SingleSampleStd {
    /// NaN, as the sample (n - 1) estimator gives.
    #[default]
    Nan,
    Zero,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturesConfig {
    pub single_sample_std: SingleSampleStd,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FraudConfig {
    /// Probability strictly above this is labelled FRAUD
    pub threshold: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:5001".to_string(),
            cors_origin: "http://localhost:5173".to_string(),
        }
    }
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            anomaly_model_path: PathBuf::from("isolation_forest.onnx"),
            fraud_model_path: PathBuf::from("fraud_model.onnx"),
            intra_threads: 1,
        }
    }
}

impl Default for FraudConfig {
    fn default() -> Self {
        Self { threshold: 0.95 }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: true,
        }
    }
}

impl ServiceConfig {
    /// Load from JSON file if present; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply `BGUARD_ADDR` on top of the file settings.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(addr) = std::env::var("BGUARD_ADDR") {
            self.server.bind_addr = addr;
        }
        self
    }
}
