use criterion::{Criterion, criterion_group, criterion_main};
use line_graph_rs::api::{LineGraphConfig, build_line_graph_frame};
use line_graph_rs::compact_value;
use line_graph_rs::core::{DataPoint, Viewport, visible_window};
use std::hint::black_box;

fn sample_series(len: usize) -> Vec<DataPoint> {
    (0..len)
        .map(|i| {
            let t = i as f64;
            DataPoint::new(format!("d{i}"), 1_000.0 + (t * 0.1).sin() * 250.0)
        })
        .collect()
}

fn bench_frame_build_default_window(c: &mut Criterion) {
    let series = sample_series(10_000);
    let config = LineGraphConfig::default();
    let viewport = Viewport::new(1920.0, 1080.0);

    c.bench_function("frame_build_default_window", |b| {
        b.iter(|| build_line_graph_frame(black_box(&series), &config, viewport))
    });
}

fn bench_frame_build_wide_window(c: &mut Criterion) {
    let series = sample_series(10_000);
    let config = LineGraphConfig::default().with_max_visible_entries(1_000);
    let viewport = Viewport::new(1920.0, 1080.0);

    c.bench_function("frame_build_wide_window", |b| {
        b.iter(|| build_line_graph_frame(black_box(&series), &config, viewport))
    });
}

fn bench_window_and_compaction(c: &mut Criterion) {
    let series = sample_series(10_000);

    c.bench_function("window_and_compaction", |b| {
        b.iter(|| {
            visible_window(black_box(&series), 250)
                .iter()
                .map(|point| compact_value(point.value()))
                .count()
        })
    });
}

criterion_group!(
    benches,
    bench_frame_build_default_window,
    bench_frame_build_wide_window,
    bench_window_and_compaction
);
criterion_main!(benches);
