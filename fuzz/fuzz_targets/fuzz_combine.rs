//! Fuzz target for the fusion engine.
//!
//! Arbitrary source lists, weights and normalizers must never panic.
//! Whenever `combine` accepts its input, the output must be a dense,
//! sorted ranking of the union of all source identities.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rankfuse_core::{
    DocumentIdentity, FusionConfig, RankFusionEngine, ScoreNormalizer, SourceDocument,
    SourceResultList,
};
use std::collections::HashSet;

/// Bounds the work done per input
const MAX_SOURCES: usize = 8;
const MAX_DOCS: usize = 256;

#[derive(Debug, Arbitrary)]
struct FuzzSource {
    weight: f32,
    normalizer: u8,
    docs: Vec<(u8, u8, f32)>,
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    rank_window_size: u8,
    min_score: f32,
    sources: Vec<FuzzSource>,
}

fuzz_target!(|input: FuzzInput| {
    let sources_in: Vec<&FuzzSource> = input.sources.iter().take(MAX_SOURCES).collect();

    let weights: Vec<f32> = sources_in.iter().map(|s| s.weight).collect();
    let normalizers: Vec<ScoreNormalizer> = sources_in
        .iter()
        .map(|s| ScoreNormalizer::ALL[usize::from(s.normalizer) % ScoreNormalizer::ALL.len()])
        .collect();
    let lists: Vec<SourceResultList> = sources_in
        .iter()
        .map(|s| {
            s.docs
                .iter()
                .take(MAX_DOCS)
                .map(|&(doc, shard, score)| {
                    SourceDocument::new(u64::from(doc), score).with_shard(u32::from(shard))
                })
                .collect()
        })
        .collect();

    let Ok(config) = FusionConfig::new(
        usize::from(input.rank_window_size),
        weights,
        normalizers,
        input.min_score,
    ) else {
        return;
    };

    let engine = RankFusionEngine::new();
    let Ok(combined) = engine.combine(&lists, &config) else {
        return;
    };

    let union: HashSet<DocumentIdentity> = lists
        .iter()
        .flat_map(|list| list.iter().map(SourceDocument::identity))
        .collect();
    assert_eq!(combined.len(), union.len());

    for (i, doc) in combined.iter().enumerate() {
        assert_eq!(doc.rank, i + 1);
    }
    for pair in combined.windows(2) {
        let order = pair[0].score.total_cmp(&pair[1].score);
        assert!(order.is_ge());
        if order.is_eq() {
            assert!(pair[0].identity() < pair[1].identity());
        }
    }

    let explained = engine
        .combine_explained(&lists, &config)
        .expect("explained combine accepts what combine accepts");
    assert_eq!(explained.len(), combined.len());
    for (e, doc) in explained.iter().zip(&combined) {
        assert_eq!(e.doc.identity(), doc.identity());
        assert_eq!(e.contributions.len(), lists.len());
    }

    let fused = engine.fuse(&lists, &config).expect("fuse accepts what combine accepts");
    assert!(fused.len() <= config.rank_window_size());
});
