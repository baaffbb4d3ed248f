//! Version chain behavior: monotonic allocation, derived current,
//! revert semantics, conflict mapping, and per-clone independence.

use test_fixtures::{analysis_payload, sample_dna, scores};
use voicedna_core::dna::{Dimension, Trigger, VersionDraft};
use voicedna_core::errors::{DnaError, StorageError};
use voicedna_core::IProfileStorage;
use voicedna_storage::queries::version_ops;
use voicedna_storage::ProfileStore;

fn seeded_store(clone_id: &str) -> ProfileStore {
    let store = ProfileStore::open_in_memory().unwrap();
    store
        .ingest_analysis(
            clone_id,
            &analysis_payload(),
            Some(scores(&[(Dimension::Vocabulary, 0.5), (Dimension::Tone, 0.6)])),
            "gpt-4o",
        )
        .unwrap();
    store
}

#[test]
fn first_version_is_number_one_with_initial_trigger() {
    let store = seeded_store("c1");
    let current = store.get_current("c1").unwrap().unwrap();
    assert_eq!(current.version_number, 1);
    assert_eq!(current.trigger, Trigger::InitialAnalysis);
    assert_eq!(current.model_used, "gpt-4o");
}

#[test]
fn successive_versions_increase_strictly() {
    let store = seeded_store("c1");
    for expected in 2..=5 {
        let v = store
            .ingest_analysis("c1", &analysis_payload(), None, "gpt-4o")
            .unwrap();
        assert_eq!(v.version_number, expected);
        assert_eq!(v.trigger, Trigger::Regeneration);
    }
}

#[test]
fn get_current_observes_a_just_created_version() {
    let store = seeded_store("c1");
    let created = store
        .create_version("c1", VersionDraft::manual_edit(sample_dna(), None))
        .unwrap();
    let current = store.get_current("c1").unwrap().unwrap();
    assert_eq!(current.id, created.id);
    assert_eq!(current.version_number, 2);
    assert_eq!(current.trigger, Trigger::ManualEdit);
    assert!(current.model_used.is_empty());
}

#[test]
fn list_versions_is_newest_first_and_gapless() {
    let store = seeded_store("c1");
    store
        .ingest_analysis("c1", &analysis_payload(), None, "gpt-4o")
        .unwrap();
    store
        .create_version("c1", VersionDraft::manual_edit(sample_dna(), None))
        .unwrap();

    let versions = store.list_versions("c1").unwrap();
    let numbers: Vec<i64> = versions.iter().map(|v| v.version_number).collect();
    assert_eq!(numbers, vec![3, 2, 1]);
}

#[test]
fn revert_copies_content_into_a_new_version() {
    let store = seeded_store("c1");
    let v1 = store.get_current("c1").unwrap().unwrap();
    store
        .ingest_analysis(
            "c1",
            &analysis_payload(),
            Some(scores(&[(Dimension::Vocabulary, 0.9)])),
            "claude-sonnet",
        )
        .unwrap();

    let reverted = store.revert("c1", 1).unwrap();
    assert_eq!(reverted.version_number, 3);
    assert_eq!(reverted.trigger, Trigger::Revert);
    assert!(reverted.model_used.is_empty());

    let current = store.get_current("c1").unwrap().unwrap();
    assert!(current.content_eq(&v1));
    assert!(current.version_number > v1.version_number);
}

#[test]
fn double_revert_duplicates_content_not_numbers() {
    let store = seeded_store("c1");
    store
        .ingest_analysis("c1", &analysis_payload(), None, "gpt-4o")
        .unwrap();

    let first = store.revert("c1", 1).unwrap();
    let second = store.revert("c1", 1).unwrap();
    assert!(first.content_eq(&second));
    assert_ne!(first.id, second.id);
    assert_eq!(first.version_number, 3);
    assert_eq!(second.version_number, 4);
}

#[test]
fn revert_to_missing_version_is_not_found() {
    let store = seeded_store("c1");
    let err = store.revert("c1", 99).unwrap_err();
    match err {
        DnaError::VersionNotFound {
            clone_id,
            version_number,
        } => {
            assert_eq!(clone_id, "c1");
            assert_eq!(version_number, 99);
        }
        other => panic!("expected VersionNotFound, got {other:?}"),
    }
}

#[test]
fn reads_against_unknown_clone_are_none() {
    let store = ProfileStore::open_in_memory().unwrap();
    assert!(store.get_current("nobody").unwrap().is_none());
    assert!(store.get_version("nobody", 1).unwrap().is_none());
    assert!(store.list_versions("nobody").unwrap().is_empty());
    assert!(!store.has_profile("nobody").unwrap());
}

#[test]
fn require_current_maps_absence_to_profile_not_found() {
    let store = seeded_store("c1");
    assert_eq!(store.require_current("c1").unwrap().version_number, 1);

    let err = store.require_current("nobody").unwrap_err();
    match err {
        DnaError::ProfileNotFound { clone_id } => assert_eq!(clone_id, "nobody"),
        other => panic!("expected ProfileNotFound, got {other:?}"),
    }
}

#[test]
fn clones_have_independent_chains() {
    let store = seeded_store("c1");
    store
        .ingest_analysis("c2", &analysis_payload(), None, "gpt-4o")
        .unwrap();

    let v = store
        .ingest_analysis("c1", &analysis_payload(), None, "gpt-4o")
        .unwrap();
    assert_eq!(v.version_number, 2);

    let c2 = store.get_current("c2").unwrap().unwrap();
    assert_eq!(c2.version_number, 1);
    assert_eq!(c2.trigger, Trigger::InitialAnalysis);
}

#[test]
fn duplicate_number_maps_to_version_conflict() {
    let store = seeded_store("c1");
    let current = store.get_current("c1").unwrap().unwrap();

    // Bypass the manager and re-insert the same number directly.
    let mut duplicate = current.clone();
    duplicate.id = "duplicate-row".to_string();
    let err = store
        .pool()
        .writer
        .with_conn_sync(|conn| version_ops::insert_version(conn, &duplicate))
        .unwrap_err();
    match err {
        DnaError::Storage(StorageError::VersionConflict {
            clone_id,
            version_number,
        }) => {
            assert_eq!(clone_id, "c1");
            assert_eq!(version_number, 1);
        }
        other => panic!("expected VersionConflict, got {other:?}"),
    }
}

#[test]
fn missing_dimension_payload_writes_nothing() {
    let store = ProfileStore::open_in_memory().unwrap();
    let mut payload = analysis_payload();
    payload.as_object_mut().unwrap().remove("tone");

    let err = store
        .ingest_analysis("c1", &payload, None, "gpt-4o")
        .unwrap_err();
    assert!(matches!(err, DnaError::Validation(_)));
    assert!(!store.has_profile("c1").unwrap());
}
