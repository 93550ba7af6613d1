//! Pointer samples and the validated, non-empty trace built from a request body.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TraceError {
    #[error("Invalid or empty movement data")]
    NotAList,
    #[error("Invalid or empty movement data")]
    Empty,
    #[error("Sample {index} is not an object")]
    NotAnObject { index: usize },
    #[error("Missing required fields: sample {index} has no `{field}`")]
    MissingField { index: usize, field: &'static str },
    #[error("Sample {index} field `{field}` is not a number")]
    InvalidValue { index: usize, field: &'static str },
}

/// One observed pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
    pub time_ms: f64,
}

impl Sample {
    pub fn new(x: f64, y: f64, time_ms: f64) -> Self {
        Self { x, y, time_ms }
    }
}

/// Samples in capture order. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    samples: Vec<Sample>,
}

impl Trace {
    pub fn new(samples: Vec<Sample>) -> Result<Self, TraceError> {
        if samples.is_empty() {
            return Err(TraceError::Empty);
        }
        Ok(Self { samples })
    }

    /// Validate an untyped JSON body: a non-empty array of `{x, y, time_ms}` objects.
    /// Extra keys on a sample are ignored.
    pub fn from_json(body: &Value) -> Result<Self, TraceError> {
        let items = body.as_array().ok_or(TraceError::NotAList)?;
        let samples = items
            .iter()
            .enumerate()
            .map(|(index, item)| sample_at(index, item))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(samples)
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn last(&self) -> &Sample {
        // non-empty by construction
        &self.samples[self.samples.len() - 1]
    }
}

fn sample_at(index: usize, item: &Value) -> Result<Sample, TraceError> {
    let obj = item.as_object().ok_or(TraceError::NotAnObject { index })?;
    let number = |field: &'static str| match obj.get(field) {
        None | Some(Value::Null) => Err(TraceError::MissingField { index, field }),
        Some(v) => v.as_f64().ok_or(TraceError::InvalidValue { index, field }),
    };
    Ok(Sample {
        x: number("x")?,
        y: number("y")?,
        time_ms: number("time_ms")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rejects_non_list_body() {
        assert_eq!(Trace::from_json(&json!({})), Err(TraceError::NotAList));
        assert_eq!(Trace::from_json(&json!("points")), Err(TraceError::NotAList));
    }

    #[test]
    fn rejects_empty_list() {
        assert_eq!(Trace::from_json(&json!([])), Err(TraceError::Empty));
    }

    #[test]
    fn reports_first_missing_field() {
        let body = json!([{"x": 0, "y": 0, "time_ms": 0}, {"x": 1, "y": 1}]);
        assert_eq!(
            Trace::from_json(&body),
            Err(TraceError::MissingField { index: 1, field: "time_ms" })
        );
    }

    #[test]
    fn rejects_non_numeric_value() {
        let body = json!([{"x": "left", "y": 0, "time_ms": 0}]);
        assert_eq!(
            Trace::from_json(&body),
            Err(TraceError::InvalidValue { index: 0, field: "x" })
        );
    }

    #[test]
    fn accepts_integers_and_extra_keys() {
        let body = json!([{"x": 10, "y": 20.5, "time_ms": 60000, "button": "left"}]);
        let trace = Trace::from_json(&body).unwrap();
        assert_eq!(trace.samples(), &[Sample::new(10.0, 20.5, 60000.0)]);
    }
}
