//! Feature extraction benchmark: pointer trace → kinematic summary.

use behavior_guard::config::FeaturesConfig;
use behavior_guard::features::{FeatureExtractor, Sample, Trace};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::json;

fn make_trace(n: usize) -> Trace {
    let samples = (0..n)
        .map(|i| {
            let t = i as f64 * 16.0;
            Sample::new((t / 7.0).sin() * 300.0 + 400.0, (t / 11.0).cos() * 200.0 + 300.0, t)
        })
        .collect();
    Trace::new(samples).unwrap()
}

fn bench_feature_extraction(c: &mut Criterion) {
    let extractor = FeatureExtractor::new(FeaturesConfig::default());

    let mut g = c.benchmark_group("extract_by_len");
    for n in [1, 16, 256, 4096] {
        let trace = make_trace(n);
        g.bench_function(format!("points_{}", n).as_str(), |b| {
            b.iter(|| black_box(extractor.extract(black_box(&trace))))
        });
    }
    g.finish();
}

fn bench_parse_and_extract(c: &mut Criterion) {
    let extractor = FeatureExtractor::new(FeaturesConfig::default());
    let body = json!((0..256)
        .map(|i| json!({"x": i * 3, "y": i * 2, "time_ms": i * 16}))
        .collect::<Vec<_>>());

    c.bench_function("parse_and_extract_256_points", |b| {
        b.iter(|| {
            let trace = Trace::from_json(black_box(&body)).unwrap();
            black_box(extractor.extract(&trace))
        })
    });
}

criterion_group!(benches, bench_feature_extraction, bench_parse_and_extract);
criterion_main!(benches);
