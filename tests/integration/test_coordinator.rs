//! End-to-end coordinator tests: creation, deduplication, listing, deletion.

use assay::{AnalysisCoordinator, AssayError, Settings, StorageError};

fn coordinator() -> AnalysisCoordinator {
    AnalysisCoordinator::from_settings(Settings::default()).unwrap()
}

#[tokio::test]
async fn test_create_read_delete_lifecycle() {
    let coordinator = coordinator();

    let record = coordinator.create("Taco cat").await.unwrap();
    assert!(record.properties.is_palindrome);
    assert_eq!(record.properties.word_count, 2);
    assert_eq!(record.properties.length, 8);

    let by_id = coordinator.get(&record.identifier).await.unwrap();
    assert_eq!(by_id.value, "Taco cat");

    let by_value = coordinator.get_by_value("Taco cat").await.unwrap();
    assert_eq!(by_value.identifier, record.identifier);

    assert!(coordinator.delete(&record.identifier).await.unwrap());
    let err = coordinator.get(&record.identifier).await.unwrap_err();
    assert!(matches!(
        err,
        AssayError::Storage(StorageError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_idempotent_creation_reports_same_identifier() {
    let coord = coordinator();

    let first = coord.create("dedup me").await.unwrap();
    let err = coord.create("dedup me").await.unwrap_err();
    assert_eq!(
        err.conflicting_identifier(),
        Some(first.identifier.as_str())
    );

    // A coordinator over a fresh store mints the identical identifier: it is
    // a function of content alone, stable across processes.
    let other = coordinator();
    let elsewhere = other.create("dedup me").await.unwrap();
    assert_eq!(elsewhere.identifier, first.identifier);
}

#[tokio::test]
async fn test_values_stored_verbatim() {
    let coordinator = coordinator();

    let record = coordinator.create("  MiXeD Case\tand spacing  ").await.unwrap();
    let fetched = coordinator.get(&record.identifier).await.unwrap();
    assert_eq!(fetched.value, "  MiXeD Case\tand spacing  ");
}

#[tokio::test]
async fn test_list_is_newest_first() {
    let coordinator = coordinator();

    coordinator.create("first").await.unwrap();
    coordinator.create("second").await.unwrap();
    coordinator.create("third").await.unwrap();

    let records = coordinator.list().await.unwrap();
    assert_eq!(records.len(), 3);
    for pair in records.windows(2) {
        assert!(pair[0].created_at >= pair[1].created_at);
    }
}

#[tokio::test]
async fn test_distinct_values_coexist() {
    let coordinator = coordinator();

    coordinator.create("hello").await.unwrap();
    coordinator.create("Hello").await.unwrap();
    coordinator.create("hello ").await.unwrap();

    assert_eq!(coordinator.stats().await.unwrap().record_count, 3);
}
