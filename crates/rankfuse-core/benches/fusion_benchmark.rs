//! Fusion throughput benchmark.
//!
//! Measures `combine` for typical hybrid-search shapes: 2-4 sources with
//! heavy overlap, at several rank window sizes.
//!
//! # Usage
//!
//! ```bash
//! cargo bench --bench fusion_benchmark -- --noplot
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rankfuse_core::{
    filter_by_min_score, FusionConfig, RankFusionEngine, ScoreNormalizer, SourceDocument,
    SourceResultList,
};

const WINDOW_SIZES: [usize; 3] = [10, 100, 1000];

/// Generates `sources` lists of `window` documents drawn from a pool twice
/// the window size, so lists overlap heavily.
fn generate_sources(sources: usize, window: usize, seed: u64) -> Vec<SourceResultList> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let pool = (window * 2) as u64;

    (0..sources)
        .map(|_| {
            let mut ids: Vec<u64> = (0..pool).collect();
            ids.shuffle(&mut rng);
            ids.into_iter()
                .take(window)
                .map(|id| {
                    SourceDocument::new(id, rng.gen::<f32>() * 20.0)
                        .with_shard((id % 4) as u32)
                })
                .collect()
        })
        .collect()
}

fn bench_combine(c: &mut Criterion) {
    let mut group = c.benchmark_group("combine");
    let engine = RankFusionEngine::new();

    for &window in &WINDOW_SIZES {
        for normalizer in ScoreNormalizer::ALL {
            let sources = generate_sources(3, window, 42);
            let config = FusionConfig::new(
                window,
                vec![1.0, 0.5, 2.0],
                vec![normalizer; 3],
                0.0,
            )
            .expect("valid config");

            group.bench_with_input(
                BenchmarkId::new(normalizer.name(), window),
                &sources,
                |b, sources| {
                    b.iter(|| engine.combine(black_box(sources), black_box(&config)));
                },
            );
        }
    }

    group.finish();
}

fn bench_combine_explained(c: &mut Criterion) {
    let mut group = c.benchmark_group("combine_explained");
    let engine = RankFusionEngine::new();

    for &window in &WINDOW_SIZES {
        let sources = generate_sources(4, window, 7);
        let config = FusionConfig::new(
            window,
            vec![1.0; 4],
            vec![ScoreNormalizer::MinMax; 4],
            0.0,
        )
        .expect("valid config");

        group.bench_with_input(BenchmarkId::from_parameter(window), &sources, |b, sources| {
            b.iter(|| engine.combine_explained(black_box(sources), black_box(&config)));
        });
    }

    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let engine = RankFusionEngine::new();
    let sources = generate_sources(2, 1000, 3);
    let config = FusionConfig::new(
        1000,
        vec![1.0, 1.0],
        vec![ScoreNormalizer::MinMax; 2],
        0.5,
    )
    .expect("valid config");
    let combined = engine.combine(&sources, &config).expect("combine");

    c.bench_function("filter_by_min_score/1000", |b| {
        b.iter(|| filter_by_min_score(black_box(combined.clone()), config.min_score()));
    });
}

criterion_group!(benches, bench_combine, bench_combine_explained, bench_filter);
criterion_main!(benches);
