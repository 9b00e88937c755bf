//! Integration tests for rosterview
//!
//! End-to-end flows through the file-backed store: first-run fixture
//! generation and persistence, reload across instances, corrupt-storage
//! recovery, and a full search/sort/page session.

use std::fs;

use rosterview::store::FileStore;
use rosterview::{Config, ListController, SortColumn, SortDirection};

fn config_for(dir: &tempfile::TempDir) -> Config {
    Config::builder().data_dir(dir.path()).build()
}

fn open(dir: &tempfile::TempDir) -> ListController<FileStore> {
    let config = config_for(dir);
    let kv = FileStore::open(&config.data_dir).unwrap();
    ListController::open(config, kv).unwrap()
}

// =============================================================================
// Persistence Lifecycle
// =============================================================================

#[test]
fn test_first_run_generates_and_persists_the_fixture() {
    let dir = tempfile::tempdir().unwrap();
    let controller = open(&dir);

    assert_eq!(controller.roster().len(), 45);
    // The fixture was written to disk at bootstrap
    let stored = fs::read_to_string(dir.path().join("users.json")).unwrap();
    assert!(stored.starts_with('['));
    assert!(stored.contains("\"registrationDate\""));
}

#[test]
fn test_second_run_loads_the_same_roster() {
    let dir = tempfile::tempdir().unwrap();

    let first = open(&dir);
    let generated = first.roster().clone();
    drop(first);

    let second = open(&dir);
    assert_eq!(second.roster(), &generated);
}

#[test]
fn test_corrupt_file_recovers_with_a_fresh_fixture() {
    let dir = tempfile::tempdir().unwrap();
    drop(open(&dir));

    fs::write(dir.path().join("users.json"), "###corrupt###").unwrap();

    let controller = open(&dir);
    assert_eq!(controller.roster().len(), 45);

    // Recovery also rewrote storage with the fresh fixture
    let stored = fs::read_to_string(dir.path().join("users.json")).unwrap();
    assert!(stored.starts_with('['));
}

#[test]
fn test_explicit_save_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let mut controller = open(&dir);
    let roster = controller.roster().clone();

    controller.save().unwrap();

    let reopened = open(&dir);
    assert_eq!(reopened.roster(), &roster);
}

// =============================================================================
// Full Session
// =============================================================================

#[test]
fn test_search_sort_page_session() {
    let dir = tempfile::tempdir().unwrap();
    let mut controller = open(&dir);

    // Startup: default sort, page 1 of 5
    let view = controller.recompute();
    assert_eq!(view.filtered_count, 45);
    assert_eq!(view.page_count, 5);
    let dates: Vec<_> = view.rows.iter().map(|r| r.registration_date).collect();
    let sorted_dates = {
        let mut d = dates.clone();
        d.sort();
        d
    };
    assert_eq!(dates, sorted_dates);

    // Sort by first name, ascending then descending
    let view = controller.sort_by(SortColumn::FirstName);
    let ascending: Vec<String> = view.rows.iter().map(|r| r.first_name.to_lowercase()).collect();
    let mut expected = ascending.clone();
    expected.sort();
    assert_eq!(ascending, expected);

    let view = controller.sort_by(SortColumn::FirstName);
    assert_eq!(view.sort.direction, SortDirection::Descending);

    // Narrow down, then walk the pages
    let view = controller.search("a");
    assert_eq!(view.current_page, 1);
    assert!(view.filtered_count <= 45);

    let last = controller.last_page();
    assert_eq!(last.current_page, last.page_count.max(1));

    // Clear restores the startup view
    let view = controller.clear();
    assert_eq!(view.filtered_count, 45);
    assert_eq!(view.current_page, 1);
    assert_eq!(view.sort.column, SortColumn::RegistrationDate);
    assert_eq!(view.sort.direction, SortDirection::Ascending);

    // The stored roster never changed during the session
    let reopened = open(&dir);
    assert_eq!(reopened.roster(), controller.roster());
}
