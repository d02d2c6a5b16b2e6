//! Score normalization strategies for `RankFuse`.
//!
//! Each retrieval source scores its candidates on its own scale (BM25
//! scores are unbounded, cosine similarities live in `[-1, 1]`, ...).
//! A normalizer rescales one source's list so that weighted sums across
//! sources are meaningful.
//!
//! # Strategies
//!
//! - **Identity** (`none`): scores pass through unchanged
//! - **MinMax** (`minmax`): linear rescale into `[0, 1]`
//! - **L2Norm** (`l2_norm`): divide by the list's Euclidean norm
//!
//! # Example
//!
//! ```rust
//! use rankfuse_core::{ScoreNormalizer, SourceDocument};
//!
//! let docs = vec![SourceDocument::new(1, 2.0), SourceDocument::new(2, 4.0)];
//! let normalized = ScoreNormalizer::MinMax.normalize(&docs);
//! assert_eq!(normalized[0].score, 0.0);
//! assert_eq!(normalized[1].score, 1.0);
//! ```

mod strategy;


pub use strategy::ScoreNormalizer;
