//! Request-scoped document types flowing through a fusion.
//!
//! A [`SourceDocument`] is what a retriever hands over, a
//! [`NormalizedDocument`] is the same document after its source's
//! normalizer ran, and a [`CombinedRankDoc`] is the fused output.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Ordered result list produced by exactly one retrieval source.
pub type SourceResultList = Vec<SourceDocument>;

/// Composite key identifying "the same document" across sources.
///
/// Ordering is by `doc_id` first, then `shard_index`, which is the
/// tie-break order of the fused ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentIdentity {
    /// Shard the document lives on.
    pub shard_index: u32,
    /// Document id, unique within its shard.
    pub doc_id: u64,
}

impl DocumentIdentity {
    /// Creates an identity from its shard and document id.
    #[must_use]
    pub const fn new(shard_index: u32, doc_id: u64) -> Self {
        Self {
            shard_index,
            doc_id,
        }
    }
}

impl Ord for DocumentIdentity {
    fn cmp(&self, other: &Self) -> Ordering {
        self.doc_id
            .cmp(&other.doc_id)
            .then_with(|| self.shard_index.cmp(&other.shard_index))
    }
}

impl PartialOrd for DocumentIdentity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for DocumentIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[doc={}, shard={}]", self.doc_id, self.shard_index)
    }
}

/// A scored candidate produced by one retrieval source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SourceDocument {
    /// Document id, unique within its shard.
    pub doc_id: u64,
    /// Shard the document lives on.
    pub shard_index: u32,
    /// Raw score in the source's own scale.
    pub score: f32,
}

impl SourceDocument {
    /// Creates a document on shard 0.
    #[must_use]
    pub const fn new(doc_id: u64, score: f32) -> Self {
        Self {
            doc_id,
            shard_index: 0,
            score,
        }
    }

    /// Builder: set the shard index.
    #[must_use]
    pub const fn with_shard(mut self, shard_index: u32) -> Self {
        self.shard_index = shard_index;
        self
    }

    /// Returns the `(shard_index, doc_id)` identity.
    #[must_use]
    pub const fn identity(&self) -> DocumentIdentity {
        DocumentIdentity::new(self.shard_index, self.doc_id)
    }
}

/// A source document whose raw score was replaced by a normalized one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedDocument {
    /// Document id, unique within its shard.
    pub doc_id: u64,
    /// Shard the document lives on.
    pub shard_index: u32,
    /// Score after normalization.
    pub score: f32,
}

impl NormalizedDocument {
    /// Carries the identity of `source` over with a new score.
    #[must_use]
    pub const fn from_source(source: &SourceDocument, score: f32) -> Self {
        Self {
            doc_id: source.doc_id,
            shard_index: source.shard_index,
            score,
        }
    }

    /// Returns the `(shard_index, doc_id)` identity.
    #[must_use]
    pub const fn identity(&self) -> DocumentIdentity {
        DocumentIdentity::new(self.shard_index, self.doc_id)
    }
}

/// A document of the fused ranking.
///
/// `rank` is the 1-based position in the full combined list and is never
/// renumbered by filtering or truncation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CombinedRankDoc {
    /// Document id, unique within its shard.
    pub doc_id: u64,
    /// Shard the document lives on.
    pub shard_index: u32,
    /// Weighted sum of normalized scores.
    pub score: f32,
    /// Dense 1-based rank.
    pub rank: usize,
}

impl CombinedRankDoc {
    /// Returns the `(shard_index, doc_id)` identity.
    #[must_use]
    pub const fn identity(&self) -> DocumentIdentity {
        DocumentIdentity::new(self.shard_index, self.doc_id)
    }
}

impl fmt::Display for CombinedRankDoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} score={}",
            self.rank,
            self.identity(),
            self.score
        )
    }
}
