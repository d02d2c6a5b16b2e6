//! The rank fusion engine.

use crate::document::{CombinedRankDoc, DocumentIdentity, SourceResultList};
use crate::error::{Error, Result};
use crate::fusion::accumulator::{Accumulated, WeightedContributionAccumulator};
use crate::fusion::explain::{ScoreExplanation, SourceContribution};
use crate::fusion::filter::{filter_by_min_score, truncate_to_window};
use crate::fusion::params::FusionConfig;

/// Weighted linear fusion of independently scored result lists.
///
/// The engine is stateless: every call is a pure function of the source
/// lists and the configuration, so one instance can be shared by any
/// number of threads serving independent requests. It must only be called
/// once every source of the request has produced its list.
///
/// Score(d) = Σ weight\[i\] × normalizer\[i\](source\[i\])(d), where a
/// source that did not retrieve `d` contributes 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct RankFusionEngine;

impl RankFusionEngine {
    /// Creates an engine.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Fuses the source lists into one ranked list.
    ///
    /// Every document present in at least one source appears exactly once.
    /// Output is sorted by score descending, ties broken by ascending
    /// `doc_id` then ascending `shard_index`, and ranked `1..=N`. Neither
    /// `min_score` nor `rank_window_size` is applied here; see
    /// [`filter_by_min_score`] and [`truncate_to_window`].
    ///
    /// Zero sources, or only empty sources, yield an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the number of sources differs from `config.source_count()`
    /// - a raw score is NaN or infinite
    /// - a document appears twice in the same source
    pub fn combine(
        &self,
        sources: &[SourceResultList],
        config: &FusionConfig,
    ) -> Result<Vec<CombinedRankDoc>> {
        let accumulator =
            self.accumulate(sources, config, WeightedContributionAccumulator::new())?;

        Ok(rank(accumulator)
            .into_iter()
            .map(|(doc, _)| doc)
            .collect())
    }

    /// Same as [`combine`](Self::combine), with every source's contribution.
    ///
    /// Scores, ranks and order are identical to `combine`.
    ///
    /// # Errors
    ///
    /// See [`combine`](Self::combine).
    pub fn combine_explained(
        &self,
        sources: &[SourceResultList],
        config: &FusionConfig,
    ) -> Result<Vec<ScoreExplanation>> {
        let accumulator = self.accumulate(
            sources,
            config,
            WeightedContributionAccumulator::with_breakdown(),
        )?;
        let weights = config.weights();

        Ok(rank(accumulator)
            .into_iter()
            .map(|(doc, acc)| {
                let contributions = acc
                    .normalized_scores
                    .iter()
                    .zip(weights)
                    .enumerate()
                    .map(|(source_index, (normalized_score, &weight))| SourceContribution {
                        source_index,
                        normalized_score: *normalized_score,
                        weight,
                        weighted_score: normalized_score.map_or(0.0, |s| weight * s),
                    })
                    .collect();
                ScoreExplanation { doc, contributions }
            })
            .collect())
    }

    /// Combines, then filters by `config.min_score()`, then truncates to
    /// `config.rank_window_size()`.
    ///
    /// Ranks are assigned before filtering, so the result may have gaps.
    ///
    /// # Errors
    ///
    /// See [`combine`](Self::combine).
    pub fn fuse(
        &self,
        sources: &[SourceResultList],
        config: &FusionConfig,
    ) -> Result<Vec<CombinedRankDoc>> {
        let combined = self.combine(sources, config)?;
        let filtered = filter_by_min_score(combined, config.min_score());
        Ok(truncate_to_window(filtered, config.rank_window_size()))
    }

    /// Explained variant of [`fuse`](Self::fuse).
    ///
    /// # Errors
    ///
    /// See [`combine`](Self::combine).
    pub fn fuse_explained(
        &self,
        sources: &[SourceResultList],
        config: &FusionConfig,
    ) -> Result<Vec<ScoreExplanation>> {
        let combined = self.combine_explained(sources, config)?;
        let filtered = filter_by_min_score(combined, config.min_score());
        Ok(truncate_to_window(filtered, config.rank_window_size()))
    }

    fn accumulate(
        &self,
        sources: &[SourceResultList],
        config: &FusionConfig,
        accumulator: WeightedContributionAccumulator,
    ) -> Result<WeightedContributionAccumulator> {
        if sources.is_empty() {
            return Ok(accumulator);
        }
        if sources.len() != config.source_count() {
            return Err(Error::SourceCountMismatch {
                expected: config.source_count(),
                actual: sources.len(),
            });
        }

        let capacity = sources.iter().map(Vec::len).max().unwrap_or(0);
        let mut accumulator = accumulator.with_capacity(capacity);

        for (source_index, (docs, (weight, normalizer))) in
            sources.iter().zip(config.sources()).enumerate()
        {
            if let Some(bad) = docs.iter().find(|d| !d.score.is_finite()) {
                return Err(Error::NonFiniteScore {
                    source_index,
                    identity: bad.identity(),
                    score: bad.score,
                });
            }

            let normalized = normalizer.normalize(docs);
            accumulator.add_source(weight, &normalized)?;
        }

        tracing::debug!(
            sources = sources.len(),
            candidates = accumulator.len(),
            "accumulated weighted source contributions"
        );

        Ok(accumulator)
    }
}

/// Sorts accumulated documents into a total order and assigns dense ranks.
fn rank(accumulator: WeightedContributionAccumulator) -> Vec<(CombinedRankDoc, Accumulated)> {
    let mut entries: Vec<(DocumentIdentity, Accumulated)> = accumulator
        .finish()
        .map(|(identity, mut acc)| {
            // -0.0 and 0.0 must tie and fall through to the identity order
            acc.score += 0.0;
            (identity, acc)
        })
        .collect();

    entries.sort_unstable_by(|(a_id, a), (b_id, b)| {
        b.score.total_cmp(&a.score).then_with(|| a_id.cmp(b_id))
    });

    entries
        .into_iter()
        .enumerate()
        .map(|(position, (identity, acc))| {
            let doc = CombinedRankDoc {
                doc_id: identity.doc_id,
                shard_index: identity.shard_index,
                score: acc.score,
                rank: position + 1,
            };
            (doc, acc)
        })
        .collect()
}
