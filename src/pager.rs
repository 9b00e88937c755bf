//! Pager
//!
//! Pure pagination arithmetic: page count, the visible window, navigation and
//! control enablement. Page numbers are 1-based throughout.

use crate::record::UserRecord;

/// Number of pages needed for `total_items` at `page_size` rows per page
///
/// Zero items means zero pages. `page_size` must be non-zero; callers enforce
/// that at the view-state boundary.
pub fn page_count(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size)
}

/// The slice of `records` visible on `page_number`
///
/// Half-open window `[(page_number - 1) * page_size, page_number * page_size)`
/// clipped to the sequence bounds; empty past the last page.
pub fn page(records: &[UserRecord], page_number: usize, page_size: usize) -> &[UserRecord] {
    if page_number == 0 {
        return &[];
    }
    let start = (page_number - 1).saturating_mul(page_size);
    if start >= records.len() {
        return &[];
    }
    let end = (start + page_size).min(records.len());
    &records[start..end]
}

/// Resolve a navigation request
///
/// Targets outside `[1, page_count]` are rejected: the current page is kept
/// unchanged, silently.
pub fn navigate(current_page: usize, target: usize, page_count: usize) -> usize {
    if target < 1 || target > page_count {
        current_page
    } else {
        target
    }
}

/// Enablement of the four navigation controls
///
/// Derived purely from `(current_page, page_count)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavControls {
    pub first_enabled: bool,
    pub previous_enabled: bool,
    pub next_enabled: bool,
    pub last_enabled: bool,
}

impl NavControls {
    pub fn for_page(current_page: usize, page_count: usize) -> Self {
        let backward = current_page > 1;
        let forward = page_count > 0 && current_page < page_count;
        Self {
            first_enabled: backward,
            previous_enabled: backward,
            next_enabled: forward,
            last_enabled: forward,
        }
    }
}
