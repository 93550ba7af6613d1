//! First and second derivatives of pointer position over time.

use super::Sample;

/// Per-sample velocity and acceleration sequences, same length as the trace.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Kinematics {
    pub velocity: Vec<f64>,
    pub acceleration: Vec<f64>,
}

impl Kinematics {
    /// Index 0 has no predecessor and uses dx = dy = 0, dt = 1, so its velocity
    /// and acceleration are both 0. Later indices divide by the raw time delta;
    /// a zero or negative delta is not corrected. An undefined velocity
    /// difference (NaN) counts as 0 before the division.
    pub fn from_samples(samples: &[Sample]) -> Self {
        let mut velocity: Vec<f64> = Vec::with_capacity(samples.len());
        let mut acceleration = Vec::with_capacity(samples.len());

        for (i, s) in samples.iter().enumerate() {
            let (dx, dy, dt) = match i.checked_sub(1).map(|p| &samples[p]) {
                Some(prev) => (s.x - prev.x, s.y - prev.y, s.time_ms - prev.time_ms),
                None => (0.0, 0.0, 1.0),
            };
            let v = (dx * dx + dy * dy).sqrt() / dt;
            let a = match velocity.last() {
                Some(prev_v) => {
                    let dv = v - prev_v;
                    let dv = if dv.is_nan() { 0.0 } else { dv };
                    dv / dt
                }
                None => 0.0,
            };
            velocity.push(v);
            acceleration.push(a);
        }

        Self {
            velocity,
            acceleration,
        }
    }
}

fn defined(values: &[f64]) -> impl Iterator<Item = f64> + '_ {
    values.iter().copied().filter(|v| !v.is_nan())
}

/// Arithmetic mean of the non-NaN entries; NaN when there are none.
pub fn mean(values: &[f64]) -> f64 {
    let (sum, n) = defined(values).fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    sum / n as f64
}

/// Sample standard deviation (n - 1 denominator) of the non-NaN entries;
/// NaN when fewer than two remain.
pub fn sample_std(values: &[f64]) -> f64 {
    let n = defined(values).count();
    if n < 2 {
        return f64::NAN;
    }
    let m = mean(values);
    let ss: f64 = defined(values).map(|v| (v - m).powi(2)).sum();
    (ss / (n - 1) as f64).sqrt()
}
