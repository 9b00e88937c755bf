//! View state and the search-input boundary
//!
//! `ViewState` is the derived-query tuple: search term, sort spec, page size
//! and current page. It is never persisted. `SearchInput` guards the 40-char
//! entry boundary so over-long text never reaches the query engine.

use crate::config::SEARCH_MAX_CHARS;
use crate::query::SortSpec;

/// Search text entry, capped at [`SEARCH_MAX_CHARS`] characters
///
/// Input beyond the cap is rejected at entry time; pasted text is truncated
/// before it reaches the query engine. `over_limit` drives the inline error
/// indicator and clears once input is accepted again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchInput {
    text: String,
    over_limit: bool,
}

impl SearchInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the inline "too long" indicator should show
    pub fn over_limit(&self) -> bool {
        self.over_limit
    }

    /// Type one character; returns false when the field is full
    pub fn push(&mut self, ch: char) -> bool {
        if self.text.chars().count() >= SEARCH_MAX_CHARS {
            self.over_limit = true;
            return false;
        }
        self.text.push(ch);
        self.over_limit = false;
        true
    }

    /// Remove the last character, clearing the indicator
    pub fn backspace(&mut self) {
        self.text.pop();
        self.over_limit = false;
    }

    /// Paste text, truncating anything past the cap
    pub fn paste(&mut self, pasted: &str) {
        for ch in pasted.chars() {
            if self.text.chars().count() >= SEARCH_MAX_CHARS {
                self.over_limit = true;
                return;
            }
            self.text.push(ch);
        }
        self.over_limit = false;
    }

    /// Replace the whole field, truncating past the cap
    pub fn set(&mut self, text: &str) {
        self.text.clear();
        self.over_limit = false;
        self.paste(text);
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.over_limit = false;
    }
}

/// The derived query parameters controlling what subset is visible
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub search: SearchInput,
    pub sort: SortSpec,
    pub page_size: usize,
    pub current_page: usize,
}

impl ViewState {
    /// Startup state: empty search, default sort, page 1
    pub fn new(page_size: usize) -> Self {
        Self {
            search: SearchInput::new(),
            sort: SortSpec::default(),
            page_size: page_size.max(1),
            current_page: 1,
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(10)
    }
}
