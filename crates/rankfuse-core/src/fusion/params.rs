//! Per-request fusion configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::normalizer::ScoreNormalizer;

/// Default number of candidates kept after fusion.
pub const DEFAULT_RANK_WINDOW_SIZE: usize = 10;

/// Default weight of a source.
pub const DEFAULT_WEIGHT: f32 = 1.0;

/// Default minimum combined score (keeps everything non-negative).
pub const DEFAULT_MIN_SCORE: f32 = 0.0;

/// Validated configuration of one fusion request.
///
/// Holds one weight and one normalizer per source, in source order. The
/// counts always agree: a mismatch is rejected when the configuration is
/// built, never when it is used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FusionConfigSpec")]
pub struct FusionConfig {
    rank_window_size: usize,
    weights: Vec<f32>,
    normalizers: Vec<ScoreNormalizer>,
    min_score: f32,
}

impl FusionConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `weights` and `normalizers` differ in length
    /// - `rank_window_size` is zero
    /// - any weight is negative or not finite
    /// - `min_score` is negative or not finite
    pub fn new(
        rank_window_size: usize,
        weights: Vec<f32>,
        normalizers: Vec<ScoreNormalizer>,
        min_score: f32,
    ) -> Result<Self> {
        if weights.len() != normalizers.len() {
            return Err(Error::ConfigMismatch {
                weights: weights.len(),
                normalizers: normalizers.len(),
            });
        }
        if rank_window_size == 0 {
            return Err(Error::InvalidRankWindowSize(rank_window_size));
        }
        if let Some((source_index, &weight)) = weights
            .iter()
            .enumerate()
            .find(|(_, w)| !w.is_finite() || **w < 0.0)
        {
            return Err(Error::InvalidWeight {
                source_index,
                weight,
            });
        }
        if !min_score.is_finite() || min_score < 0.0 {
            return Err(Error::InvalidMinScore(min_score));
        }

        Ok(Self {
            rank_window_size,
            weights,
            normalizers,
            min_score,
        })
    }

    /// Starts a builder with default window size and minimum score.
    #[must_use]
    pub fn builder() -> FusionConfigBuilder {
        FusionConfigBuilder::default()
    }

    /// Number of sources this configuration fuses.
    #[must_use]
    pub fn source_count(&self) -> usize {
        self.weights.len()
    }

    /// Maximum number of documents kept by truncation.
    #[must_use]
    pub fn rank_window_size(&self) -> usize {
        self.rank_window_size
    }

    /// Per-source weights.
    #[must_use]
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    /// Per-source normalizers.
    #[must_use]
    pub fn normalizers(&self) -> &[ScoreNormalizer] {
        &self.normalizers
    }

    /// Minimum combined score kept by filtering.
    #[must_use]
    pub fn min_score(&self) -> f32 {
        self.min_score
    }

    /// Iterates `(weight, normalizer)` pairs in source order.
    pub fn sources(&self) -> impl Iterator<Item = (f32, ScoreNormalizer)> + '_ {
        self.weights
            .iter()
            .copied()
            .zip(self.normalizers.iter().copied())
    }
}

/// Unvalidated wire shape of [`FusionConfig`].
#[derive(Debug, Clone, Deserialize)]
struct FusionConfigSpec {
    #[serde(default = "default_rank_window_size")]
    rank_window_size: usize,
    weights: Vec<f32>,
    normalizers: Vec<ScoreNormalizer>,
    #[serde(default)]
    min_score: f32,
}

fn default_rank_window_size() -> usize {
    DEFAULT_RANK_WINDOW_SIZE
}

impl TryFrom<FusionConfigSpec> for FusionConfig {
    type Error = Error;

    fn try_from(spec: FusionConfigSpec) -> Result<Self> {
        Self::new(
            spec.rank_window_size,
            spec.weights,
            spec.normalizers,
            spec.min_score,
        )
    }
}

/// Builder assembling a [`FusionConfig`] one source at a time.
#[derive(Debug, Clone)]
pub struct FusionConfigBuilder {
    rank_window_size: usize,
    weights: Vec<f32>,
    normalizers: Vec<ScoreNormalizer>,
    min_score: f32,
}

impl Default for FusionConfigBuilder {
    fn default() -> Self {
        Self {
            rank_window_size: DEFAULT_RANK_WINDOW_SIZE,
            weights: Vec::new(),
            normalizers: Vec::new(),
            min_score: DEFAULT_MIN_SCORE,
        }
    }
}

impl FusionConfigBuilder {
    /// Builder: set the rank window size.
    #[must_use]
    pub fn rank_window_size(mut self, rank_window_size: usize) -> Self {
        self.rank_window_size = rank_window_size;
        self
    }

    /// Builder: set the minimum combined score.
    #[must_use]
    pub fn min_score(mut self, min_score: f32) -> Self {
        self.min_score = min_score;
        self
    }

    /// Builder: append a source with its weight and normalizer.
    #[must_use]
    pub fn source(mut self, weight: f32, normalizer: ScoreNormalizer) -> Self {
        self.weights.push(weight);
        self.normalizers.push(normalizer);
        self
    }

    /// Validates and builds the configuration.
    ///
    /// # Errors
    ///
    /// See [`FusionConfig::new`].
    pub fn build(self) -> Result<FusionConfig> {
        FusionConfig::new(
            self.rank_window_size,
            self.weights,
            self.normalizers,
            self.min_score,
        )
    }
}
