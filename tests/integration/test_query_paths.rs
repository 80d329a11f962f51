//! Both retrieval origins must agree: a compiled sentence and the equivalent
//! explicit criteria return the same records in the same order.

use assay::{AnalysisCoordinator, FilterCompiler, FilterSpec, Settings};

async fn seeded_coordinator() -> AnalysisCoordinator {
    let coordinator = AnalysisCoordinator::from_settings(Settings::default()).unwrap();
    for value in [
        "level",
        "noon",
        "racecar",
        "hello",
        "a",
        "one two three",
        "Taco cat",
        "Madam",
        "xyzzy",
    ] {
        coordinator.create(value).await.unwrap();
    }
    coordinator
}

async fn assert_paths_agree(
    coordinator: &AnalysisCoordinator,
    sentence: &str,
    explicit: FilterSpec,
) {
    let compiled = FilterCompiler::new().compile(sentence).unwrap();
    assert_eq!(compiled, explicit, "compiled spec for {sentence:?}");

    let via_sentence = coordinator.query(sentence).await.unwrap();
    let via_spec = coordinator.find(&explicit).await.unwrap();

    let ids = |records: &[assay::AnalyzedRecord]| {
        records.iter().map(|r| r.identifier.clone()).collect::<Vec<_>>()
    };
    assert_eq!(ids(&via_sentence), ids(&via_spec), "results for {sentence:?}");
}

#[tokio::test]
async fn test_single_word_sentence() {
    let coordinator = seeded_coordinator().await;
    assert_paths_agree(
        &coordinator,
        "single word strings",
        FilterSpec::new().with_word_count(1),
    )
    .await;

    let results = coordinator.query("single word strings").await.unwrap();
    assert!(results.iter().all(|r| r.properties.word_count == 1));
    assert!(results.iter().any(|r| r.value == "racecar"));
    assert!(!results.iter().any(|r| r.value == "one two three"));
    assert!(!results.iter().any(|r| r.value == "Taco cat"));
}

#[tokio::test]
async fn test_palindromes_longer_than() {
    let coordinator = seeded_coordinator().await;
    assert_paths_agree(
        &coordinator,
        "palindromic strings longer than 5",
        FilterSpec::new().with_palindrome(true).with_min_length(6),
    )
    .await;

    let results = coordinator
        .query("palindromic strings longer than 5")
        .await
        .unwrap();
    let values: Vec<&str> = results.iter().map(|r| r.value.as_str()).collect();
    assert!(values.contains(&"racecar"));
    // 8 characters once the space is counted; palindromic once it is not.
    assert!(values.contains(&"Taco cat"));
    // Palindromes, but not longer than 5 characters.
    assert!(!values.contains(&"noon"));
    assert!(!values.contains(&"Madam"));
    // Long enough, not a palindrome.
    assert!(!values.contains(&"hello"));
}

#[tokio::test]
async fn test_shorter_than_containing_letter() {
    let coordinator = seeded_coordinator().await;
    assert_paths_agree(
        &coordinator,
        "strings shorter than 10 containing the letter a",
        FilterSpec::new().with_max_length(9).with_contains_character('a'),
    )
    .await;

    let results = coordinator
        .query("strings shorter than 10 containing the letter a")
        .await
        .unwrap();
    let values: Vec<&str> = results.iter().map(|r| r.value.as_str()).collect();
    assert!(values.contains(&"racecar"));
    assert!(values.contains(&"a"));
    assert!(values.contains(&"Taco cat"));
    assert!(values.contains(&"Madam"));
    assert!(!values.contains(&"hello"));
    assert!(!values.contains(&"one two three"));
}

#[tokio::test]
async fn test_containment_matches_either_case() {
    let coordinator = seeded_coordinator().await;

    // "Madam" holds both 'M' and 'm'; the lowercase filter finds it either way.
    let results = coordinator.query("strings containing m").await.unwrap();
    assert!(results.iter().any(|r| r.value == "Madam"));
    assert!(!results.iter().any(|r| r.value == "hello"));
}

#[tokio::test]
async fn test_empty_explicit_spec_matches_everything() {
    let coordinator = seeded_coordinator().await;

    let all = coordinator.find(&FilterSpec::new()).await.unwrap();
    assert_eq!(all.len(), coordinator.stats().await.unwrap().record_count);
    assert_eq!(all.len(), coordinator.list().await.unwrap().len());
}

#[tokio::test]
async fn test_impossible_range_yields_empty_results() {
    let coordinator = seeded_coordinator().await;

    let spec = FilterSpec::new().with_min_length(10).with_max_length(2);
    assert!(coordinator.find(&spec).await.unwrap().is_empty());
}
