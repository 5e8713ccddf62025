//! Tests for the interactive shell
//!
//! These tests drive a `Session` over in-memory buffers:
//! - Menu flows for every action
//! - Confirmation and not-found lines
//! - Invalid-selector retry and non-numeric input errors
//! - End-of-input termination

use std::io::Cursor;

use bookshelf::shell::{MenuChoice, Session};
use bookshelf::{ShelfError, Store};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_store() -> (TempDir, Store) {
    let temp_dir = TempDir::new().unwrap();
    let store = Store::open_path(&temp_dir.path().join("books.json")).unwrap();
    (temp_dir, store)
}

/// Run a session over scripted input, returning the store and the transcript
fn run_shell(store: Store, input: &str) -> (Store, String) {
    let mut output = Vec::new();
    let mut session = Session::new(store, Cursor::new(input.to_string()), &mut output);
    session.run().unwrap();

    let store = session.into_store();
    (store, String::from_utf8(output).unwrap())
}

// =============================================================================
// Menu Choice Tests
// =============================================================================

#[test]
fn test_menu_choice_parse() {
    assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Add));
    assert_eq!(MenuChoice::parse(" 4 "), Some(MenuChoice::Display));
    assert_eq!(MenuChoice::parse("6"), Some(MenuChoice::Exit));
    assert_eq!(MenuChoice::parse("7"), None);
    assert_eq!(MenuChoice::parse("add"), None);
    assert_eq!(MenuChoice::parse(""), None);
}

#[test]
fn test_menu_selectors_round_trip() {
    for choice in MenuChoice::ALL {
        assert_eq!(MenuChoice::parse(choice.selector()), Some(choice));
    }
}

// =============================================================================
// Session Flow Tests
// =============================================================================

#[test]
fn test_add_flow() {
    let (_temp, store) = setup_temp_store();

    let (store, transcript) = run_shell(store, "1\nDune\nFrank Herbert\n1965\n6\n");

    assert!(transcript.contains("Book 'Dune' added with id 1"));
    assert_eq!(store.len(), 1);
    assert_eq!(store.find_by_id(1).unwrap().author, "Frank Herbert");
}

#[test]
fn test_remove_flow() {
    let (_temp, mut store) = setup_temp_store();
    store.add("Dune", "Frank Herbert", 1965).unwrap();

    let (store, transcript) = run_shell(store, "2\n1\n6\n");

    assert!(transcript.contains("Book with id 1 removed"));
    assert!(store.is_empty());
}

#[test]
fn test_remove_not_found() {
    let (_temp, store) = setup_temp_store();

    let (_store, transcript) = run_shell(store, "2\n42\n6\n");

    assert!(transcript.contains("Book with id 42 not found"));
}

#[test]
fn test_search_flow_by_title() {
    let (_temp, mut store) = setup_temp_store();
    store.add("Dune", "Frank Herbert", 1965).unwrap();
    store.add("Foundation", "Isaac Asimov", 1951).unwrap();

    let (_store, transcript) = run_shell(store, "3\ntitle\ndune\n6\n");

    assert!(transcript.contains("id: 1, title: Dune, author: Frank Herbert, year: 1965, status: available"));
    assert!(!transcript.contains("Foundation,"));
}

#[test]
fn test_search_flow_no_matches() {
    let (_temp, store) = setup_temp_store();

    let (_store, transcript) = run_shell(store, "3\nauthor\ngibson\n6\n");

    assert!(transcript.contains("No books found."));
}

#[test]
fn test_search_flow_unknown_criterion() {
    let (_temp, store) = setup_temp_store();

    let (_store, transcript) = run_shell(store, "3\nisbn\n6\n");

    assert!(transcript.contains("Unknown search criterion."));
}

#[test]
fn test_display_flow_empty_store() {
    let (_temp, store) = setup_temp_store();

    let (_store, transcript) = run_shell(store, "4\n6\n");

    assert!(transcript.contains("No books in the library."));
}

#[test]
fn test_display_flow_lists_records() {
    let (_temp, mut store) = setup_temp_store();
    store.add("Dune", "Frank Herbert", 1965).unwrap();
    store.add("Foundation", "Isaac Asimov", 1951).unwrap();

    let (_store, transcript) = run_shell(store, "4\n6\n");

    assert!(transcript.contains("id: 1, title: Dune"));
    assert!(transcript.contains("id: 2, title: Foundation"));
    assert!(!transcript.contains("No books in the library."));
}

#[test]
fn test_change_status_flow() {
    let (_temp, mut store) = setup_temp_store();
    store.add("Dune", "Frank Herbert", 1965).unwrap();

    let (store, transcript) = run_shell(store, "5\n1\nchecked out\n6\n");

    assert!(transcript.contains("Status of book 1 changed to 'checked out'"));
    assert_eq!(store.find_by_id(1).unwrap().status, "checked out");
}

#[test]
fn test_change_status_not_found() {
    let (_temp, store) = setup_temp_store();

    let (_store, transcript) = run_shell(store, "5\n42\navailable\n6\n");

    assert!(transcript.contains("Book with id 42 not found"));
}

#[test]
fn test_invalid_selector_prompts_again() {
    let (_temp, store) = setup_temp_store();

    let (_store, transcript) = run_shell(store, "9\n6\n");

    assert!(transcript.contains("Invalid choice. Please select again."));
    assert!(transcript.contains("Exiting."));
}

#[test]
fn test_exit_prints_farewell() {
    let (_temp, store) = setup_temp_store();

    let (_store, transcript) = run_shell(store, "6\n");

    assert!(transcript.contains("Exiting."));
}

#[test]
fn test_end_of_input_ends_session() {
    let (_temp, store) = setup_temp_store();

    // No exit choice; the session ends cleanly when input runs out
    let (_store, transcript) = run_shell(store, "4\n");

    assert!(transcript.contains("No books in the library."));
}

#[test]
fn test_menu_lists_all_choices() {
    let (_temp, store) = setup_temp_store();

    let (_store, transcript) = run_shell(store, "6\n");

    assert!(transcript.contains("1. Add a book"));
    assert!(transcript.contains("2. Remove a book"));
    assert!(transcript.contains("3. Find a book"));
    assert!(transcript.contains("4. Show all books"));
    assert!(transcript.contains("5. Change a book's status"));
    assert!(transcript.contains("6. Exit"));
}

// =============================================================================
// Input Error Tests
// =============================================================================

#[test]
fn test_non_numeric_year_is_an_input_error() {
    let (_temp, store) = setup_temp_store();

    let mut output = Vec::new();
    let mut session = Session::new(
        store,
        Cursor::new("1\nDune\nFrank Herbert\nnineteen sixty-five\n".to_string()),
        &mut output,
    );

    let err = session.run().unwrap_err();
    assert!(matches!(err, ShelfError::InvalidInput(_)));
    assert!(err.to_string().contains("year"));
}

#[test]
fn test_non_numeric_id_is_an_input_error() {
    let (_temp, store) = setup_temp_store();

    let mut output = Vec::new();
    let mut session = Session::new(store, Cursor::new("2\nabc\n".to_string()), &mut output);

    let err = session.run().unwrap_err();
    assert!(matches!(err, ShelfError::InvalidInput(_)));
    assert!(err.to_string().contains("id"));
}
