//! Fusion request files.
//!
//! A request is a JSON document listing every source's scored candidates,
//! optionally with per-source weight and normalizer. Missing settings fall
//! back to the loaded [`RankFuseConfig`].

use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

use rankfuse_core::{
    FusionConfig, RankFuseConfig, ScoreNormalizer, SourceDocument, SourceResultList,
};

/// One scored candidate as written in a request file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocumentEntry {
    /// Document id.
    pub doc: u64,
    /// Shard index, 0 when omitted.
    #[serde(default)]
    pub shard: u32,
    /// Raw score.
    pub score: f32,
}

/// One retrieval source as written in a request file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceEntry {
    /// Display name, `source-<i>` when omitted.
    #[serde(default)]
    pub name: Option<String>,
    /// Weight, config default when omitted.
    #[serde(default)]
    pub weight: Option<f32>,
    /// Normalizer, config default when omitted.
    #[serde(default)]
    pub normalizer: Option<ScoreNormalizer>,
    /// Scored candidates in source order.
    #[serde(default)]
    pub documents: Vec<DocumentEntry>,
}

/// A complete fusion request.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FusionRequest {
    /// Rank window size, config default when omitted.
    #[serde(default)]
    pub rank_window_size: Option<usize>,
    /// Minimum combined score, config default when omitted.
    #[serde(default)]
    pub min_score: Option<f32>,
    /// Sources in order.
    #[serde(default)]
    pub sources: Vec<SourceEntry>,
}

/// Settings given on the command line, taking precedence over the file.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    /// Overrides `rank_window_size`.
    pub rank_window_size: Option<usize>,
    /// Overrides `min_score`.
    pub min_score: Option<f32>,
}

/// A request with every default applied and its configuration validated.
#[derive(Debug, Clone)]
pub struct ResolvedRequest {
    /// Source display names, in source order.
    pub names: Vec<String>,
    /// Source result lists, in source order.
    pub sources: Vec<SourceResultList>,
    /// Validated fusion configuration.
    pub config: FusionConfig,
}

impl ResolvedRequest {
    /// Total number of candidates across all sources.
    #[must_use]
    pub fn document_count(&self) -> usize {
        self.sources.iter().map(Vec::len).sum()
    }
}

impl FusionRequest {
    /// Reads and parses a request file.
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read request file {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Invalid request file {}", path.display()))
    }

    /// Parses a request from JSON text.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Applies defaults and overrides, then validates the configuration.
    pub fn resolve(
        self,
        defaults: &RankFuseConfig,
        overrides: Overrides,
    ) -> rankfuse_core::Result<ResolvedRequest> {
        let mut builder = defaults.fusion_builder();
        if let Some(window) = overrides.rank_window_size.or(self.rank_window_size) {
            builder = builder.rank_window_size(window);
        }
        if let Some(min_score) = overrides.min_score.or(self.min_score) {
            builder = builder.min_score(min_score);
        }

        let mut names = Vec::with_capacity(self.sources.len());
        let mut sources = Vec::with_capacity(self.sources.len());

        for (i, source) in self.sources.into_iter().enumerate() {
            builder = builder.source(
                source.weight.unwrap_or(defaults.fusion.default_weight),
                source
                    .normalizer
                    .unwrap_or(defaults.fusion.default_normalizer),
            );
            names.push(source.name.unwrap_or_else(|| format!("source-{i}")));
            sources.push(
                source
                    .documents
                    .into_iter()
                    .map(|d| SourceDocument::new(d.doc, d.score).with_shard(d.shard))
                    .collect(),
            );
        }

        Ok(ResolvedRequest {
            names,
            sources,
            config: builder.build()?,
        })
    }
}
