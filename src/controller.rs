//! List controller
//!
//! The coordinator that owns the roster and view state and funnels every
//! action through one recompute pipeline.
//!
//! ## Responsibilities
//! - Bootstrap: load the roster, fall back to the fixture on empty storage
//! - Translate actions (search, sort, page size, navigation) into state
//! - Enforce the invariants in one place: current page stays in bounds,
//!   the active sort is re-applied after every filter change
//! - Hand the presentation adapter a fresh `DerivedView` after each action

use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;
use crate::pager::{self, NavControls};
use crate::query::{self, SortColumn, SortDirection, SortSpec};
use crate::record::{Roster, UserRecord};
use crate::store::{fixture, KeyValueStore, RecordStore};
use crate::view::ViewState;

/// Callback invoked when a row's "view" action fires
pub type ViewRequestHandler = Box<dyn FnMut(u64)>;

/// Everything a presentation adapter needs after a recompute
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedView {
    /// Rows visible on the current page, in display order
    pub rows: Vec<UserRecord>,

    /// Size of the whole filtered set ("Found users: N")
    pub filtered_count: usize,

    pub current_page: usize,

    pub page_count: usize,

    /// Active sort, for per-column indicators
    pub sort: SortSpec,

    pub controls: NavControls,
}

/// Owner of the roster, the view state and the persistence boundary
pub struct ListController<S: KeyValueStore> {
    kv: S,
    store: RecordStore,
    roster: Roster,
    state: ViewState,
    /// Term the current page position was computed against
    applied_term: String,
    on_view_requested: Option<ViewRequestHandler>,
}

impl<S: KeyValueStore> ListController<S> {
    /// Bootstrap a controller
    ///
    /// Loads the roster from storage; when nothing usable is stored, generates
    /// the fixture and persists it immediately.
    pub fn open(config: Config, mut kv: S) -> Result<Self> {
        let store = RecordStore::new(config.storage_key.clone());

        let mut roster = store.load(&kv)?;
        if roster.is_empty() {
            info!(count = config.fixture_count, "storage empty, generating fixture roster");
            roster = fixture::generate(config.fixture_count);
            store.save(&mut kv, &roster)?;
        } else {
            info!(count = roster.len(), "roster loaded from storage");
        }

        Ok(Self {
            kv,
            store,
            roster,
            state: ViewState::new(config.default_page_size),
            applied_term: String::new(),
            on_view_requested: None,
        })
    }

    // =========================================================================
    // Actions
    // =========================================================================

    /// Submit a search term
    ///
    /// The term passes through the entry boundary (truncated at the cap), the
    /// current sort is kept, and the page resets to 1.
    pub fn search(&mut self, term: &str) -> DerivedView {
        self.state.search.set(term);
        self.state.current_page = 1;
        self.recompute()
    }

    /// Clear the search: empty term, default sort, page 1
    pub fn clear(&mut self) -> DerivedView {
        self.state.search.clear();
        self.state.sort = SortSpec::default();
        self.state.current_page = 1;
        self.recompute()
    }

    /// Activate a sort column: toggles direction on the active column,
    /// starts ascending on a new one. Resets to page 1.
    pub fn sort_by(&mut self, column: SortColumn) -> DerivedView {
        self.state.sort.activate(column);
        self.state.current_page = 1;
        self.recompute()
    }

    /// Set the sort outright, independent of the current toggle state
    ///
    /// For adapters that carry an explicit direction (a CLI flag, a restored
    /// session) rather than header clicks. Resets to page 1.
    pub fn set_sort(&mut self, column: SortColumn, direction: SortDirection) -> DerivedView {
        self.state.sort = SortSpec { column, direction };
        self.state.current_page = 1;
        self.recompute()
    }

    /// Activate a sort column by adapter-facing name
    ///
    /// Unknown or unsortable names (the row-index pseudo-column included) are
    /// silently ignored.
    pub fn sort_by_name(&mut self, name: &str) -> DerivedView {
        match SortColumn::parse(name) {
            Some(column) => self.sort_by(column),
            None => self.recompute(),
        }
    }

    /// Change the page size, resetting to page 1; zero is ignored
    pub fn set_page_size(&mut self, page_size: usize) -> DerivedView {
        if page_size > 0 {
            self.state.page_size = page_size;
            self.state.current_page = 1;
        }
        self.recompute()
    }

    /// Go to a specific page; out-of-range targets are no-ops
    pub fn go_to_page(&mut self, target: usize) -> DerivedView {
        let filtered = self.filtered_len();
        let pages = pager::page_count(filtered, self.state.page_size);
        self.state.current_page = pager::navigate(self.state.current_page, target, pages);
        self.recompute()
    }

    pub fn first_page(&mut self) -> DerivedView {
        self.go_to_page(1)
    }

    pub fn previous_page(&mut self) -> DerivedView {
        self.go_to_page(self.state.current_page.saturating_sub(1))
    }

    pub fn next_page(&mut self) -> DerivedView {
        self.go_to_page(self.state.current_page + 1)
    }

    pub fn last_page(&mut self) -> DerivedView {
        let pages = pager::page_count(self.filtered_len(), self.state.page_size);
        self.go_to_page(pages)
    }

    // =========================================================================
    // View-details hook
    // =========================================================================

    /// Install the external handler for row "view" requests
    pub fn set_view_handler(&mut self, handler: ViewRequestHandler) {
        self.on_view_requested = Some(handler);
    }

    /// Fire the "view" action for a row; a no-op when no handler is installed
    pub fn request_view(&mut self, id: u64) {
        if let Some(handler) = self.on_view_requested.as_mut() {
            handler(id);
        }
    }

    // =========================================================================
    // Derivation
    // =========================================================================

    /// Derive the visible window from the current state
    ///
    /// The single place where filter, sort and pagination compose, and where
    /// the page invariants are enforced: a changed search term resets to the
    /// first page (keystroke-level hosts mutate the term through
    /// [`Self::search_input`] and only call this), and the current page is
    /// clamped into bounds. The roster itself is never touched.
    pub fn recompute(&mut self) -> DerivedView {
        if self.state.search.text() != self.applied_term {
            self.applied_term = self.state.search.text().to_string();
            self.state.current_page = 1;
        }

        let filtered = query::filter(self.roster.records(), self.state.search.text());
        let sorted = query::sort(&filtered, self.state.sort);

        let page_count = pager::page_count(sorted.len(), self.state.page_size);
        if page_count == 0 {
            self.state.current_page = 1;
        } else if self.state.current_page > page_count {
            self.state.current_page = page_count;
        }

        let rows = pager::page(&sorted, self.state.current_page, self.state.page_size).to_vec();

        debug!(
            filtered = sorted.len(),
            page = self.state.current_page,
            pages = page_count,
            sort = %self.state.sort.column.as_str(),
            "view recomputed"
        );

        DerivedView {
            rows,
            filtered_count: sorted.len(),
            current_page: self.state.current_page,
            page_count,
            sort: self.state.sort,
            controls: NavControls::for_page(self.state.current_page, page_count),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Mutable access to the search-entry boundary, for keystroke-level hosts
    pub fn search_input(&mut self) -> &mut crate::view::SearchInput {
        &mut self.state.search
    }

    /// Persist the current roster
    pub fn save(&mut self) -> Result<()> {
        self.store.save(&mut self.kv, &self.roster)
    }

    fn filtered_len(&self) -> usize {
        query::filter(self.roster.records(), self.state.search.text()).len()
    }
}
