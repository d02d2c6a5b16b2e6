//! Per-document score breakdown of a fusion.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::document::CombinedRankDoc;

/// What one source contributed to a document's combined score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SourceContribution {
    /// Position of the source in the configuration.
    pub source_index: usize,
    /// Normalized score, `None` if the source did not retrieve the document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized_score: Option<f32>,
    /// Configured weight of the source.
    pub weight: f32,
    /// `weight × normalized_score`, or 0 when missing.
    pub weighted_score: f32,
}

impl SourceContribution {
    /// Returns true if the source retrieved the document.
    #[must_use]
    pub fn is_present(&self) -> bool {
        self.normalized_score.is_some()
    }
}

/// A fused document together with the contribution of every source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreExplanation {
    /// The fused document, identical to the one `combine` returns.
    pub doc: CombinedRankDoc,
    /// One entry per source, in source order.
    pub contributions: Vec<SourceContribution>,
}

impl ScoreExplanation {
    /// Number of sources that retrieved the document.
    #[must_use]
    pub fn hit_count(&self) -> usize {
        self.contributions.iter().filter(|c| c.is_present()).count()
    }
}

impl fmt::Display for ScoreExplanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scores: Vec<String> = self
            .contributions
            .iter()
            .map(|c| c.normalized_score.unwrap_or(0.0).to_string())
            .collect();
        let weights: Vec<String> = self
            .contributions
            .iter()
            .map(|c| c.weight.to_string())
            .collect();

        write!(
            f,
            "weighted linear combination score: [{}] computed for normalized scores [{}] \
             and weights [{}] as sum of (weight[i] * score[i]) for each source",
            self.doc.score,
            scores.join(", "),
            weights.join(", ")
        )
    }
}
