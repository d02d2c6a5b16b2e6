//! Tests for `WeightedContributionAccumulator`.

use super::accumulator::WeightedContributionAccumulator;
use crate::document::{DocumentIdentity, NormalizedDocument, SourceDocument};
use crate::error::Error;

fn normalized(pairs: &[(u64, f32)]) -> Vec<NormalizedDocument> {
    pairs
        .iter()
        .map(|&(id, score)| NormalizedDocument::from_source(&SourceDocument::new(id, 0.0), score))
        .collect()
}

#[test]
fn test_accumulates_weighted_scores() {
    // Arrange
    let mut acc = WeightedContributionAccumulator::new();

    // Act
    acc.add_source(1.0, &normalized(&[(5, 1.0), (6, 2.0)])).unwrap();
    acc.add_source(2.0, &normalized(&[(5, 3.0), (6, 1.0), (7, 0.5)])).unwrap();

    // Assert
    assert_eq!(acc.sources_added(), 2);
    assert_eq!(acc.len(), 3);
    assert_eq!(acc.score_of(&DocumentIdentity::new(0, 5)), Some(7.0));
    assert_eq!(acc.score_of(&DocumentIdentity::new(0, 6)), Some(4.0));
    assert_eq!(acc.score_of(&DocumentIdentity::new(0, 7)), Some(1.0));
    assert_eq!(acc.score_of(&DocumentIdentity::new(0, 8)), None);
}

#[test]
fn test_same_doc_on_different_shards_is_not_merged() {
    let mut acc = WeightedContributionAccumulator::new();
    let docs = vec![
        NormalizedDocument::from_source(&SourceDocument::new(1, 0.0).with_shard(0), 1.0),
        NormalizedDocument::from_source(&SourceDocument::new(1, 0.0).with_shard(1), 2.0),
    ];

    acc.add_source(1.0, &docs).unwrap();

    assert_eq!(acc.len(), 2);
    assert_eq!(acc.score_of(&DocumentIdentity::new(1, 1)), Some(2.0));
}

#[test]
fn test_empty_sources_leave_accumulator_empty() {
    let mut acc = WeightedContributionAccumulator::new();

    acc.add_source(1.0, &[]).unwrap();
    acc.add_source(3.0, &[]).unwrap();

    assert!(acc.is_empty());
    assert_eq!(acc.sources_added(), 2);
    assert_eq!(acc.finish().count(), 0);
}

#[test]
fn test_duplicate_in_one_source_is_rejected() {
    let mut acc = WeightedContributionAccumulator::new();
    acc.add_source(1.0, &normalized(&[(1, 1.0)])).unwrap();

    let err = acc
        .add_source(1.0, &normalized(&[(2, 1.0), (1, 0.5), (1, 0.25)]))
        .unwrap_err();

    assert_eq!(
        err,
        Error::DuplicateDocument {
            source_index: 1,
            identity: DocumentIdentity::new(0, 1),
        }
    );
}

#[test]
fn test_breakdown_has_one_slot_per_source() {
    // Arrange
    let mut acc = WeightedContributionAccumulator::with_breakdown();
    acc.add_source(1.0, &normalized(&[(1, 0.5)])).unwrap();
    acc.add_source(1.0, &normalized(&[(2, 0.25)])).unwrap();
    acc.add_source(1.0, &normalized(&[(1, 0.75)])).unwrap();

    // Act
    let mut entries: Vec<_> = acc.finish().collect();
    entries.sort_by_key(|(id, _)| *id);

    // Assert
    assert_eq!(entries[0].1.normalized_scores, vec![Some(0.5), None, Some(0.75)]);
    assert_eq!(entries[1].1.normalized_scores, vec![None, Some(0.25), None]);
}

#[test]
fn test_totals_only_mode_skips_breakdown() {
    let mut acc = WeightedContributionAccumulator::new();
    acc.add_source(1.0, &normalized(&[(1, 0.5)])).unwrap();

    let (_, entry) = acc.finish().next().unwrap();

    assert!(entry.normalized_scores.is_empty());
    assert!((entry.score - 0.5).abs() < f32::EPSILON);
}
