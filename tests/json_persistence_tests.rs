mod common;

use std::fs;

use tempfile::TempDir;

use spelling_trainer::{
    load_or_create, JsonFilePersistence, LastResult, PersistenceError, PersistenceStrategy,
    Trainer,
};

use common::{animal_pairs, seeded_rng, seeded_trainer};

fn store_in(dir: &TempDir) -> JsonFilePersistence {
    JsonFilePersistence::new(dir.path().join("spelling_trainer_data.json"))
}

#[test]
fn test_save_writes_non_empty_file() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    seeded_trainer(1).persist(&store).unwrap();

    let meta = fs::metadata(store.path()).unwrap();
    assert!(meta.len() > 0);
    assert!(!dir.path().join("spelling_trainer_data.json.tmp").exists());
}

#[test]
fn test_round_trip_preserves_state() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let mut trainer = seeded_trainer(11);
    let word = trainer.current_pair().word().to_string();
    trainer.guess_word("wrong").unwrap();
    trainer.guess_word(&word).unwrap();
    trainer.persist(&store).unwrap();

    let loaded = Trainer::load(&store, &mut seeded_rng(99)).unwrap().unwrap();
    assert_eq!(loaded.current_pair().word(), trainer.current_pair().word());
    assert_eq!(loaded.pairs(), trainer.pairs());
    assert_eq!(loaded.statistics(), trainer.statistics());
    assert_eq!(loaded.last_result(), LastResult::Correct);
}

#[test]
fn test_missing_file_is_not_an_error() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    assert!(store.load().unwrap().is_none());
    assert!(Trainer::load(&store, &mut seeded_rng(1)).unwrap().is_none());
}

#[test]
fn test_corrupt_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    fs::write(store.path(), "{\"wordPairs\": [").unwrap();

    let err = store.load().unwrap_err();
    assert!(matches!(err, PersistenceError::Malformed { .. }));
    assert!(err.is_corrupt());
}

#[test]
fn test_invalid_pair_in_file_is_corrupt() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    fs::write(
        store.path(),
        r#"{"wordPairs":[{"word":"Cat","imageUrl":"invalid-url"}],
            "statistics":{"correctGuesses":0,"incorrectGuesses":0,"totalGuesses":0}}"#,
    )
    .unwrap();

    assert!(store.load().unwrap_err().is_corrupt());
}

#[test]
fn test_empty_pair_list_in_file_is_invalid() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    fs::write(
        store.path(),
        r#"{"wordPairs":[],"currentWordPair":null,
            "statistics":{"correctGuesses":1,"incorrectGuesses":0,"totalGuesses":1},
            "lastResult":null}"#,
    )
    .unwrap();

    let err = Trainer::load(&store, &mut seeded_rng(1)).unwrap_err();
    assert!(matches!(err, PersistenceError::Invalid(_)));
}

#[test]
fn test_reads_file_without_saved_at_or_current_pair() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    fs::write(
        store.path(),
        r#"{
            "wordPairs": [
                {"word": "Cat", "imageUrl": "http://example.com/cat.jpg"},
                {"word": "Dog", "imageUrl": "http://example.com/dog.jpg"}
            ],
            "statistics": {"correctGuesses": 2, "incorrectGuesses": 1, "totalGuesses": 3},
            "lastResult": false
        }"#,
    )
    .unwrap();

    let trainer = Trainer::load(&store, &mut seeded_rng(4)).unwrap().unwrap();
    assert!(trainer.pairs().contains(trainer.current_pair()));
    assert_eq!(trainer.statistics().total_guesses(), 3);
    assert_eq!(trainer.last_result(), LastResult::Unknown);
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let store = JsonFilePersistence::new(dir.path().join("nested/deeper/data.json"));

    seeded_trainer(2).persist(&store).unwrap();
    assert!(store.load().unwrap().is_some());
}

#[test]
fn test_save_failure_is_reported() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();
    let store = JsonFilePersistence::new(blocker.join("data.json"));

    let err = seeded_trainer(3).persist(&store).unwrap_err();
    assert!(matches!(err, PersistenceError::Io { .. }));
}

#[test]
fn test_load_or_create_recovers_from_corrupt_file() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    fs::write(store.path(), "garbage").unwrap();

    let trainer = load_or_create(&store, animal_pairs(), &mut seeded_rng(8)).unwrap();
    assert_eq!(trainer.statistics().total_guesses(), 0);
    assert_eq!(trainer.pairs().len(), 3);
}

#[test]
fn test_load_or_create_resumes_saved_progress() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let mut trainer = seeded_trainer(5);
    trainer.guess_word("wrong").unwrap();
    trainer.persist(&store).unwrap();

    let resumed = load_or_create(&store, Vec::new(), &mut seeded_rng(6)).unwrap();
    assert_eq!(resumed.statistics().incorrect_guesses(), 1);
}
