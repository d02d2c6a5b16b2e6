//! Fuzz target for score normalizers.
//!
//! Any finite input must normalize without panicking, keep its length and
//! identities, stay finite, and stay within [0, 1] for min-max.

#![no_main]

use libfuzzer_sys::fuzz_target;
use rankfuse_core::{ScoreNormalizer, SourceDocument};

fuzz_target!(|scores: Vec<f32>| {
    let docs: Vec<SourceDocument> = scores
        .iter()
        .filter(|s| s.is_finite())
        .enumerate()
        .map(|(i, &score)| SourceDocument::new(i as u64, score))
        .collect();

    for normalizer in ScoreNormalizer::ALL {
        let normalized = normalizer.normalize(&docs);
        assert_eq!(normalized.len(), docs.len());
        for (n, d) in normalized.iter().zip(&docs) {
            assert_eq!(n.identity(), d.identity());
        }
        if normalizer == ScoreNormalizer::MinMax {
            assert!(normalized.iter().all(|n| (0.0..=1.0).contains(&n.score)));
        }
        assert!(normalized.iter().all(|n| n.score.is_finite()));
    }
});
