//! Post-processing of a combined ranking.
//!
//! Both operations run after `combine`, so ranks still describe the full
//! candidate set: survivors keep the rank they were given there.

use crate::document::CombinedRankDoc;
use crate::fusion::explain::ScoreExplanation;

/// Anything carrying a combined score.
pub trait Scored {
    /// The combined score.
    fn combined_score(&self) -> f32;
}

impl Scored for CombinedRankDoc {
    fn combined_score(&self) -> f32 {
        self.score
    }
}

impl Scored for ScoreExplanation {
    fn combined_score(&self) -> f32 {
        self.doc.score
    }
}

/// Keeps documents whose score is at least `min_score`.
///
/// Relative order is preserved and ranks are not renumbered. A NaN
/// `min_score` keeps nothing.
#[must_use]
pub fn filter_by_min_score<T: Scored>(mut combined: Vec<T>, min_score: f32) -> Vec<T> {
    let before = combined.len();
    combined.retain(|d| d.combined_score() >= min_score);
    tracing::trace!(
        min_score,
        kept = combined.len(),
        dropped = before - combined.len(),
        "applied min_score filter"
    );
    combined
}

/// Keeps the first `rank_window_size` documents, ranks untouched.
#[must_use]
pub fn truncate_to_window<T>(mut combined: Vec<T>, rank_window_size: usize) -> Vec<T> {
    combined.truncate(rank_window_size);
    combined
}
