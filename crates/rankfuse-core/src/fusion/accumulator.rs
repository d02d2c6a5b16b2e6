//! Weighted accumulation of normalized per-source scores.

use rustc_hash::FxHashMap;

use crate::document::{DocumentIdentity, NormalizedDocument};
use crate::error::{Error, Result};

/// Accumulated state of one document across all sources added so far.
#[derive(Debug, Clone, PartialEq)]
pub struct Accumulated {
    /// Σ weight\[i\] × normalized score in source i.
    pub score: f32,
    /// Normalized score per source, `None` where the source did not
    /// retrieve the document. Empty unless breakdown tracking is enabled.
    pub normalized_scores: Vec<Option<f32>>,
    last_source: Option<usize>,
}

impl Accumulated {
    fn empty() -> Self {
        Self {
            score: 0.0,
            normalized_scores: Vec::new(),
            last_source: None,
        }
    }
}

/// Sums weighted, normalized source lists per document identity.
///
/// Sources are added in order; source `i` is the `i`-th call to
/// [`add_source`](Self::add_source). A document missing from a source
/// contributes nothing for it but is still kept: appearing in one source
/// is enough to be part of the result.
///
/// - **`FxHashMap`**: one hash lookup per document, no list-scanning merge
/// - Plain `f32` addition in source order, no clamping or rounding
#[derive(Debug, Default)]
pub struct WeightedContributionAccumulator {
    entries: FxHashMap<DocumentIdentity, Accumulated>,
    sources_added: usize,
    track_breakdown: bool,
}

impl WeightedContributionAccumulator {
    /// Creates an accumulator that only keeps totals.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an accumulator that also records every source's normalized
    /// score, for explanations.
    #[must_use]
    pub fn with_breakdown() -> Self {
        Self {
            track_breakdown: true,
            ..Self::default()
        }
    }

    /// Pre-sizes the identity map.
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.entries.reserve(capacity);
        self
    }

    /// Adds the next source's normalized list with its weight.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateDocument`] if an identity appears twice in
    /// `docs`. The accumulator must be discarded after an error.
    pub fn add_source(&mut self, weight: f32, docs: &[NormalizedDocument]) -> Result<()> {
        let source_index = self.sources_added;

        for doc in docs {
            let identity = doc.identity();
            let entry = self
                .entries
                .entry(identity)
                .or_insert_with(Accumulated::empty);

            if entry.last_source == Some(source_index) {
                return Err(Error::DuplicateDocument {
                    source_index,
                    identity,
                });
            }
            entry.last_source = Some(source_index);
            entry.score += weight * doc.score;

            if self.track_breakdown {
                entry.normalized_scores.resize(source_index, None);
                entry.normalized_scores.push(Some(doc.score));
            }
        }

        self.sources_added += 1;
        Ok(())
    }

    /// Number of sources added so far.
    #[must_use]
    pub fn sources_added(&self) -> usize {
        self.sources_added
    }

    /// Number of distinct identities seen so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no document has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Accumulated total of one identity, if any source retrieved it.
    #[must_use]
    pub fn score_of(&self, identity: &DocumentIdentity) -> Option<f32> {
        self.entries.get(identity).map(|a| a.score)
    }

    /// Consumes the accumulator, yielding every identity with its totals.
    ///
    /// With breakdown tracking, `normalized_scores` has exactly one slot
    /// per added source. Iteration order is unspecified.
    pub fn finish(self) -> impl Iterator<Item = (DocumentIdentity, Accumulated)> {
        let sources = self.sources_added;
        let track = self.track_breakdown;

        self.entries.into_iter().map(move |(identity, mut acc)| {
            if track {
                acc.normalized_scores.resize(sources, None);
            }
            (identity, acc)
        })
    }
}
