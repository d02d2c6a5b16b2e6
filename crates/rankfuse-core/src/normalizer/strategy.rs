//! Normalization strategies for one source's scored list.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::document::{NormalizedDocument, SourceDocument};
use crate::error::Error;

/// Strategy for rescaling a source's raw scores onto a comparable range.
///
/// Normalizers are stateless. They never drop, add, reorder or deduplicate
/// documents: the output has the same length, identities and order as the
/// input, only scores change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreNormalizer {
    /// Scores pass through unchanged.
    ///
    /// Combining with identity normalizers reproduces raw weighted sums.
    #[default]
    #[serde(rename = "none", alias = "identity")]
    Identity,

    /// Linear rescale into `[0, 1]` using the list's own min and max.
    ///
    /// Score = (s - min) / (max - min). When every score is equal the
    /// normalized score is `1.0` for all documents. Distinct scores always
    /// keep their order, however close they are.
    #[serde(rename = "minmax")]
    MinMax,

    /// Division by the Euclidean norm of the list's scores.
    ///
    /// Score = s / sqrt(Σ s²). A list of zeros stays at `0.0`.
    #[serde(rename = "l2_norm")]
    L2Norm,
}

impl ScoreNormalizer {
    /// All available strategies.
    pub const ALL: [Self; 3] = [Self::Identity, Self::MinMax, Self::L2Norm];

    /// Normalizes one source's result list.
    ///
    /// An empty list yields an empty list.
    #[must_use]
    pub fn normalize(&self, docs: &[SourceDocument]) -> Vec<NormalizedDocument> {
        if docs.is_empty() {
            return Vec::new();
        }

        match self {
            Self::Identity => docs
                .iter()
                .map(|d| NormalizedDocument::from_source(d, d.score))
                .collect(),
            Self::MinMax => Self::normalize_min_max(docs),
            Self::L2Norm => Self::normalize_l2(docs),
        }
    }

    // Both rescales run in f64: a finite f32 list can still overflow
    // `max - min` or `Σ s²` in f32.
    #[allow(clippy::cast_possible_truncation)]
    fn normalize_min_max(docs: &[SourceDocument]) -> Vec<NormalizedDocument> {
        let (min, max) = docs
            .iter()
            .map(|d| f64::from(d.score))
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), s| {
                (lo.min(s), hi.max(s))
            });
        let range = max - min;

        docs.iter()
            .map(|d| {
                let score = if range == 0.0 {
                    1.0
                } else {
                    ((f64::from(d.score) - min) / range) as f32
                };
                NormalizedDocument::from_source(d, score)
            })
            .collect()
    }

    #[allow(clippy::cast_possible_truncation)]
    fn normalize_l2(docs: &[SourceDocument]) -> Vec<NormalizedDocument> {
        let norm = docs
            .iter()
            .map(|d| f64::from(d.score).powi(2))
            .sum::<f64>()
            .sqrt();

        docs.iter()
            .map(|d| {
                let score = if norm == 0.0 {
                    0.0
                } else {
                    (f64::from(d.score) / norm) as f32
                };
                NormalizedDocument::from_source(d, score)
            })
            .collect()
    }

    /// Returns the strategy's wire name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Identity => "none",
            Self::MinMax => "minmax",
            Self::L2Norm => "l2_norm",
        }
    }
}

impl fmt::Display for ScoreNormalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScoreNormalizer {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "identity" => Ok(Self::Identity),
            "minmax" => Ok(Self::MinMax),
            "l2_norm" => Ok(Self::L2Norm),
            other => Err(Error::UnknownNormalizer(other.to_string())),
        }
    }
}
