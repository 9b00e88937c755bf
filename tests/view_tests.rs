//! View State Tests
//!
//! Tests verify:
//! - The 40-character search-entry boundary (typing, pasting, clearing)
//! - The inline error indicator lifecycle
//! - View-state startup defaults

use rosterview::{SearchInput, SortColumn, SortDirection, ViewState};

// =============================================================================
// Search Input Boundary Tests
// =============================================================================

#[test]
fn test_typing_up_to_the_cap_is_accepted() {
    let mut input = SearchInput::new();
    for _ in 0..40 {
        assert!(input.push('a'));
    }
    assert_eq!(input.text().len(), 40);
    assert!(!input.over_limit());
}

#[test]
fn test_forty_first_character_is_rejected() {
    let mut input = SearchInput::new();
    for _ in 0..40 {
        input.push('a');
    }

    assert!(!input.push('b'));
    // Field content stays at 40 and the indicator shows
    assert_eq!(input.text().chars().count(), 40);
    assert!(!input.text().contains('b'));
    assert!(input.over_limit());
}

#[test]
fn test_backspace_clears_the_indicator() {
    let mut input = SearchInput::new();
    for _ in 0..40 {
        input.push('a');
    }
    input.push('b');
    assert!(input.over_limit());

    input.backspace();
    assert!(!input.over_limit());
    assert_eq!(input.text().chars().count(), 39);
}

#[test]
fn test_paste_truncates_to_the_cap() {
    let mut input = SearchInput::new();
    input.paste(&"x".repeat(60));

    assert_eq!(input.text().chars().count(), 40);
    assert!(input.over_limit());
}

#[test]
fn test_paste_within_the_cap_keeps_indicator_clear() {
    let mut input = SearchInput::new();
    input.paste("smith");
    assert_eq!(input.text(), "smith");
    assert!(!input.over_limit());
}

#[test]
fn test_paste_appends_to_existing_text() {
    let mut input = SearchInput::new();
    input.paste(&"a".repeat(35));
    input.paste("bbbbbbbbbb");

    assert_eq!(input.text().chars().count(), 40);
    assert!(input.text().ends_with("bbbbb"));
    assert!(input.over_limit());
}

#[test]
fn test_cap_counts_characters_not_bytes() {
    let mut input = SearchInput::new();
    input.paste(&"é".repeat(45));
    assert_eq!(input.text().chars().count(), 40);
}

#[test]
fn test_set_replaces_previous_content() {
    let mut input = SearchInput::new();
    input.set("first");
    input.set("second");
    assert_eq!(input.text(), "second");
}

#[test]
fn test_clear_empties_text_and_indicator() {
    let mut input = SearchInput::new();
    input.paste(&"x".repeat(60));
    input.clear();

    assert_eq!(input.text(), "");
    assert!(!input.over_limit());
}

// =============================================================================
// View State Defaults Tests
// =============================================================================

#[test]
fn test_startup_state() {
    let state = ViewState::new(10);
    assert_eq!(state.search.text(), "");
    assert_eq!(state.sort.column, SortColumn::RegistrationDate);
    assert_eq!(state.sort.direction, SortDirection::Ascending);
    assert_eq!(state.page_size, 10);
    assert_eq!(state.current_page, 1);
}

#[test]
fn test_zero_page_size_falls_back_to_one() {
    let state = ViewState::new(0);
    assert_eq!(state.page_size, 1);
}
