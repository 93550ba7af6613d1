//! ONNX Runtime session wrapper. Input: [1, n_features] f32, outputs copied out as owned tensors.
//! If the artifact is missing the model stays unloaded and every run fails with `NotLoaded`.

use super::ModelError;
use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Tensor;
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum OutputValues {
    Float(Vec<f32>),
    Int(Vec<i64>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelOutput {
    pub name: String,
    pub values: OutputValues,
}

pub struct OnnxModel {
    name: String,
    session: Option<Mutex<Session>>,
    input_name: String,
}

fn build_session(path: &Path, intra_threads: usize) -> ort::Result<Session> {
    Session::builder()?
        .with_optimization_level(GraphOptimizationLevel::Level3)?
        .with_intra_threads(intra_threads.max(1))?
        .commit_from_file(path)
}

impl OnnxModel {
    pub fn load(name: &str, path: &Path, intra_threads: usize) -> Result<Self, ModelError> {
        if !path.exists() {
            warn!(model = name, path = %path.display(), "ONNX model not found; predictions disabled");
            return Ok(Self::unloaded(name));
        }

        let session = build_session(path, intra_threads)?;
        let input_name = session
            .inputs
            .first()
            .map(|i| i.name.clone())
            .unwrap_or_else(|| "float_input".to_string());

        info!(model = name, path = %path.display(), input = %input_name, "ONNX model loaded");
        Ok(Self {
            name: name.to_string(),
            session: Some(Mutex::new(session)),
            input_name,
        })
    }

    pub fn unloaded(name: &str) -> Self {
        Self {
            name: name.to_string(),
            session: None,
            input_name: String::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_loaded(&self) -> bool {
        self.session.is_some()
    }

    /// Run one row through the session. Non-tensor outputs (e.g. zipmap) are skipped.
    pub fn run(&self, row: &[f32]) -> Result<Vec<ModelOutput>, ModelError> {
        let session = self
            .session
            .as_ref()
            .ok_or_else(|| ModelError::NotLoaded(self.name.clone()))?;

        let arr = Array2::from_shape_vec((1, row.len()), row.to_vec())?;
        let input = Tensor::from_array(arr)?;

        let mut session = session
            .lock()
            .map_err(|_| ModelError::Poisoned(self.name.clone()))?;
        let outputs = session.run(ort::inputs![self.input_name.as_str() => input])?;

        let mut collected = Vec::new();
        for (name, value) in outputs.iter() {
            let values = if let Ok((_, data)) = value.try_extract_tensor::<f32>() {
                OutputValues::Float(data.to_vec())
            } else if let Ok((_, data)) = value.try_extract_tensor::<i64>() {
                OutputValues::Int(data.to_vec())
            } else {
                debug!(model = %self.name, output = name, "skipping non-tensor output");
                continue;
            };
            collected.push(ModelOutput {
                name: name.to_string(),
                values,
            });
        }
        Ok(collected)
    }
}

/// First float output whose name contains `hint`, else the first float output.
pub(crate) fn float_output<'a>(outputs: &'a [ModelOutput], hint: &str) -> Option<&'a [f32]> {
    let floats = || {
        outputs.iter().filter_map(|o| match &o.values {
            OutputValues::Float(v) => Some((o.name.as_str(), v.as_slice())),
            OutputValues::Int(_) => None,
        })
    };
    floats()
        .find(|(name, _)| name.contains(hint))
        .or_else(|| floats().next())
        .map(|(_, v)| v)
}

/// First integer output whose name contains `hint`.
pub(crate) fn int_output<'a>(outputs: &'a [ModelOutput], hint: &str) -> Option<&'a [i64]> {
    outputs.iter().find_map(|o| match &o.values {
        OutputValues::Int(v) if o.name.contains(hint) => Some(v.as_slice()),
        _ => None,
    })
}
