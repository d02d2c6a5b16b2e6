//! Weighted linear rank fusion for `RankFuse`.
//!
//! This module merges result lists produced by independent retrieval
//! sources (lexical, vector, hybrid, ...) into a single ranked list.
//!
//! # Pipeline
//!
//! 1. **Normalize** each source with its configured [`ScoreNormalizer`](crate::ScoreNormalizer)
//! 2. **Accumulate** `weight × normalized score` per `(shard_index, doc_id)`
//! 3. **Rank** by score descending, ties by `doc_id` then `shard_index`
//! 4. **Filter** by minimum score and **truncate** to the rank window,
//!    as separate steps so ranks describe the full candidate set
//!
//! # Example
//!
//! ```rust
//! use rankfuse_core::{FusionConfig, RankFusionEngine, ScoreNormalizer, SourceDocument};
//!
//! let config = FusionConfig::builder()
//!     .rank_window_size(5)
//!     .source(1.0, ScoreNormalizer::Identity)
//!     .source(2.0, ScoreNormalizer::Identity)
//!     .build()?;
//!
//! let lexical = vec![SourceDocument::new(5, 1.0), SourceDocument::new(6, 2.0)];
//! let vector = vec![
//!     SourceDocument::new(5, 3.0),
//!     SourceDocument::new(6, 1.0),
//!     SourceDocument::new(7, 0.5),
//! ];
//!
//! let combined = RankFusionEngine::new().combine(&[lexical, vector], &config)?;
//! assert_eq!(combined[0].doc_id, 5);
//! assert_eq!(combined[0].rank, 1);
//! assert!((combined[0].score - 7.0).abs() < 1e-6);
//! # Ok::<(), rankfuse_core::Error>(())
//! ```

mod accumulator;
mod engine;
mod explain;
mod filter;
mod params;

#[cfg(test)]
mod accumulator_tests;

pub use accumulator::{Accumulated, WeightedContributionAccumulator};
pub use engine::RankFusionEngine;
pub use explain::{ScoreExplanation, SourceContribution};
pub use filter::{filter_by_min_score, truncate_to_window, Scored};
pub use params::{
    FusionConfig, FusionConfigBuilder, DEFAULT_MIN_SCORE, DEFAULT_RANK_WINDOW_SIZE,
    DEFAULT_WEIGHT,
};
