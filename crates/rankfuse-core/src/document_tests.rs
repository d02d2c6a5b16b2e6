//! Tests for `document` module

use super::document::*;

#[test]
fn test_source_document_defaults_to_shard_zero() {
    let doc = SourceDocument::new(5, 1.5);

    assert_eq!(doc.doc_id, 5);
    assert_eq!(doc.shard_index, 0);
    assert_eq!(doc.identity(), DocumentIdentity::new(0, 5));
}

#[test]
fn test_source_document_with_shard() {
    let doc = SourceDocument::new(5, 1.5).with_shard(3);

    assert_eq!(doc.identity(), DocumentIdentity::new(3, 5));
}

#[test]
fn test_identity_orders_by_doc_then_shard() {
    // Arrange
    let mut ids = vec![
        DocumentIdentity::new(1, 7),
        DocumentIdentity::new(0, 7),
        DocumentIdentity::new(9, 2),
    ];

    // Act
    ids.sort();

    // Assert
    assert_eq!(
        ids,
        vec![
            DocumentIdentity::new(9, 2),
            DocumentIdentity::new(0, 7),
            DocumentIdentity::new(1, 7),
        ]
    );
}

#[test]
fn test_identity_distinguishes_shards() {
    let a = SourceDocument::new(1, 0.5).with_shard(0);
    let b = SourceDocument::new(1, 0.5).with_shard(1);

    assert_ne!(a.identity(), b.identity());
}

#[test]
fn test_normalized_document_keeps_identity() {
    let source = SourceDocument::new(11, 42.0).with_shard(2);

    let normalized = NormalizedDocument::from_source(&source, 0.25);

    assert_eq!(normalized.identity(), source.identity());
    assert!((normalized.score - 0.25).abs() < f32::EPSILON);
}

#[test]
fn test_identity_display() {
    assert_eq!(
        DocumentIdentity::new(1, 42).to_string(),
        "[doc=42, shard=1]"
    );
}

#[test]
fn test_combined_rank_doc_serialization() {
    let doc = CombinedRankDoc {
        doc_id: 5,
        shard_index: 0,
        score: 7.0,
        rank: 1,
    };

    let json = serde_json::to_string(&doc).unwrap();
    let deserialized: CombinedRankDoc = serde_json::from_str(&json).unwrap();

    assert_eq!(doc, deserialized);
    assert!(json.contains("\"rank\":1"));
}
