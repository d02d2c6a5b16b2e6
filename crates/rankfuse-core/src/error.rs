//! Error types for `RankFuse`.
//!
//! Every failure of the fusion engine is a programming or configuration
//! error surfaced synchronously to the caller. Nothing is retried.

use thiserror::Error;

use crate::document::DocumentIdentity;

/// Result type alias for `RankFuse` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring or running a fusion.
///
/// Error codes follow the pattern `RANKFUSE-XXX` for easy debugging.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Weights and normalizers disagree on the number of sources (RANKFUSE-001).
    #[error("[RANKFUSE-001] Configuration mismatch: {weights} weights but {normalizers} normalizers")]
    ConfigMismatch {
        /// Number of configured weights.
        weights: usize,
        /// Number of configured normalizers.
        normalizers: usize,
    },

    /// Number of source lists differs from the configured source count (RANKFUSE-002).
    #[error("[RANKFUSE-002] Source count mismatch: configured for {expected} sources, got {actual}")]
    SourceCountMismatch {
        /// Configured number of sources.
        expected: usize,
        /// Number of source lists supplied.
        actual: usize,
    },

    /// Rank window size must be strictly positive (RANKFUSE-003).
    #[error("[RANKFUSE-003] Invalid rank window size: {0} (must be > 0)")]
    InvalidRankWindowSize(usize),

    /// Weight is negative or not finite (RANKFUSE-004).
    #[error("[RANKFUSE-004] Invalid weight {weight} for source {source_index}: weights must be finite and non-negative")]
    InvalidWeight {
        /// Position of the source in the configuration.
        source_index: usize,
        /// Rejected weight.
        weight: f32,
    },

    /// Minimum score is negative or not finite (RANKFUSE-005).
    #[error("[RANKFUSE-005] Invalid min_score {0}: must be finite and non-negative")]
    InvalidMinScore(f32),

    /// A source list carries a NaN or infinite score (RANKFUSE-006).
    #[error("[RANKFUSE-006] Non-finite score {score} for document {identity} in source {source_index}")]
    NonFiniteScore {
        /// Position of the offending source.
        source_index: usize,
        /// Document carrying the score.
        identity: DocumentIdentity,
        /// Rejected score.
        score: f32,
    },

    /// The same document appears twice in one source list (RANKFUSE-007).
    #[error("[RANKFUSE-007] Document {identity} appears more than once in source {source_index}")]
    DuplicateDocument {
        /// Position of the offending source.
        source_index: usize,
        /// Repeated document.
        identity: DocumentIdentity,
    },

    /// Normalizer name not recognised (RANKFUSE-008).
    #[error("[RANKFUSE-008] Unknown normalizer '{0}', expected one of: none, minmax, l2_norm")]
    UnknownNormalizer(String),

    /// Configuration loading or validation error (RANKFUSE-009).
    #[error("[RANKFUSE-009] Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns the error code (e.g., "RANKFUSE-001").
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::ConfigMismatch { .. } => "RANKFUSE-001",
            Self::SourceCountMismatch { .. } => "RANKFUSE-002",
            Self::InvalidRankWindowSize(_) => "RANKFUSE-003",
            Self::InvalidWeight { .. } => "RANKFUSE-004",
            Self::InvalidMinScore(_) => "RANKFUSE-005",
            Self::NonFiniteScore { .. } => "RANKFUSE-006",
            Self::DuplicateDocument { .. } => "RANKFUSE-007",
            Self::UnknownNormalizer(_) => "RANKFUSE-008",
            Self::Config(_) => "RANKFUSE-009",
        }
    }

    /// Returns true if the error comes from the request's source lists
    /// rather than from its configuration.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::SourceCountMismatch { .. }
                | Self::NonFiniteScore { .. }
                | Self::DuplicateDocument { .. }
        )
    }
}

impl From<crate::config::ConfigError> for Error {
    fn from(err: crate::config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
