//! # `RankFuse` Core
//!
//! Weighted linear rank fusion for hybrid search.
//!
//! A search request typically runs several retrieval strategies side by
//! side (BM25, dense vectors, a hybrid query, ...). Each produces its own
//! scored candidate list on its own scale. `RankFuse` merges those lists
//! into one deterministic ranking.
//!
//! ## Features
//!
//! - **Per-source weights**: each source contributes `weight × score`
//! - **Pluggable normalization**: identity, min-max and L2 strategies
//! - **Fusion, not intersection**: a document retrieved by one source is kept
//! - **Total order**: ties broken by document id then shard, dense 1-based ranks
//! - **Two-phase post-processing**: `min_score` filtering and window
//!   truncation never renumber ranks
//! - **Explanations**: per-source breakdown of every combined score
//!
//! ## Quick Start
//!
//! ```rust
//! use rankfuse_core::{
//!     filter_by_min_score, FusionConfig, RankFusionEngine, ScoreNormalizer, SourceDocument,
//! };
//!
//! let config = FusionConfig::builder()
//!     .min_score(1.5)
//!     .source(1.0, ScoreNormalizer::Identity)
//!     .source(1.0, ScoreNormalizer::Identity)
//!     .build()?;
//!
//! let lexical = vec![SourceDocument::new(0, 1.0), SourceDocument::new(1, 0.8)];
//! let vector = vec![
//!     SourceDocument::new(0, 2.0),
//!     SourceDocument::new(1, 0.6),
//!     SourceDocument::new(2, 1.8),
//! ];
//!
//! let engine = RankFusionEngine::new();
//! let combined = engine.combine(&[lexical, vector], &config)?;
//! assert_eq!(combined.len(), 3);
//!
//! let kept = filter_by_min_score(combined, config.min_score());
//! let ids: Vec<u64> = kept.iter().map(|d| d.doc_id).collect();
//! assert_eq!(ids, vec![0, 2]);
//! # Ok::<(), rankfuse_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
// =============================================================================
// STYLISTIC LINTS - Safe to allow globally (no bug risk)
// =============================================================================
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::unused_self)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::float_cmp)]

pub mod config;
#[cfg(test)]
mod config_tests;
pub mod document;
#[cfg(test)]
mod document_tests;
pub mod error;
pub mod fusion;
pub mod normalizer;

pub use config::{ConfigError, FusionDefaults, LoggingConfig, RankFuseConfig};
pub use document::{
    CombinedRankDoc, DocumentIdentity, NormalizedDocument, SourceDocument, SourceResultList,
};
pub use error::{Error, Result};
pub use fusion::{
    filter_by_min_score, truncate_to_window, FusionConfig, FusionConfigBuilder, RankFusionEngine,
    ScoreExplanation, Scored, SourceContribution, WeightedContributionAccumulator,
};
pub use normalizer::ScoreNormalizer;
