//! Benchmarks for the synchronous render pipeline.
//!
//! Run with: cargo bench --bench render_pipeline

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use mandelbrot_explorer::{
    ColourSchemeKind, Complex, FrameSize, ViewportState, compute_frame, escape_time,
};

fn bench_escape_time(c: &mut Criterion) {
    let mut group = c.benchmark_group("escape_time");

    group.bench_function("interior_150", |b| {
        b.iter(|| black_box(escape_time(black_box(Complex::new(-0.5, 0.0)), 150)))
    });

    group.bench_function("boundary_1000", |b| {
        let c = Complex::new(-0.743_643_887, 0.131_825_904);
        b.iter(|| black_box(escape_time(black_box(c), 1000)))
    });

    group.finish();
}

fn bench_compute_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_frame");
    group.sample_size(10);

    for &(width, height) in &[(200, 200), (500, 500), (1000, 1000)] {
        let size = FrameSize::new(width, height).unwrap();
        let viewport = ViewportState::default();

        group.bench_with_input(
            BenchmarkId::new("default_view", format!("{width}x{height}")),
            &size,
            |b, &size| b.iter(|| black_box(compute_frame(&viewport, size))),
        );
    }

    let size = FrameSize::new(500, 500).unwrap();
    for &kind in ColourSchemeKind::ALL {
        let viewport = ViewportState::new(Complex::new(-0.75, 0.1), 500, kind);

        group.bench_with_input(
            BenchmarkId::new("scheme_500_iterations", kind.id()),
            &viewport,
            |b, viewport| b.iter(|| black_box(compute_frame(viewport, size))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_escape_time, bench_compute_frame);
criterion_main!(benches);
