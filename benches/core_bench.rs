use bezier_lut_editor::{sweep_and_export, sweep_chain, CurveChain, EditorOptions, EditorSession};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use std::hint::black_box;

fn build_synthetic_chain(anchor_count: usize) -> CurveChain {
    let anchors = (0..anchor_count)
        .map(|i| {
            let x = 100.0 + (i as f32) * 120.0;
            let y = 700.0 - ((i * 37) % 300) as f32;
            Vec2::new(x, y)
        })
        .collect();

    CurveChain::new(anchors).expect("Kette erwartet")
}

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep");

    let chain = build_synthetic_chain(6);
    let x_max = chain.anchor_span_x() / 6.0;

    for &resolution in &[1_000usize, 5_000usize, 20_000usize] {
        group.bench_with_input(
            BenchmarkId::new("sweep_chain", resolution),
            &resolution,
            |b, &resolution| {
                b.iter(|| {
                    let points = sweep_chain(black_box(&chain), 0.0, x_max, resolution)
                        .expect("Sweep erwartet");
                    black_box(points.len())
                })
            },
        );
    }

    group.finish();
}

fn bench_export_filtered(c: &mut Criterion) {
    let chain = build_synthetic_chain(6);
    let x_max = chain.anchor_span_x() / 6.0;

    c.bench_function("sweep_and_export_5000", |b| {
        b.iter(|| {
            let set = sweep_and_export(black_box(&chain), 0.0, x_max, 5_000, 1.0, 0.1)
                .expect("Export erwartet");
            black_box(set.len())
        })
    });
}

fn bench_drag_fixup(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag_fixup");

    for &anchor_count in &[4usize, 16usize, 64usize] {
        group.bench_with_input(
            BenchmarkId::new("move_handle_burst", anchor_count),
            &anchor_count,
            |b, &anchor_count| {
                let mut chain = build_synthetic_chain(anchor_count);
                let handle_count = chain.handles().len();
                b.iter(|| {
                    // Burst wie ein schneller Drag: jedes Handle einmal anfassen
                    for i in 0..handle_count {
                        let target = Vec2::new((i * 13 % 700) as f32, (i * 29 % 500) as f32);
                        chain
                            .move_handle(black_box(i), target)
                            .expect("Verschieben erwartet");
                    }
                    black_box(chain.handles().len())
                })
            },
        );
    }

    group.finish();
}

fn bench_session_export_cache(c: &mut Criterion) {
    c.bench_function("session_export_cached", |b| {
        let mut session = EditorSession::new(EditorOptions::default()).expect("Session erwartet");
        session.export().expect("Export erwartet");
        b.iter(|| {
            let set = session.export().expect("Export erwartet");
            black_box(set.len())
        })
    });
}

criterion_group!(
    benches,
    bench_sweep,
    bench_export_filtered,
    bench_drag_fixup,
    bench_session_export_cache
);
criterion_main!(benches);
