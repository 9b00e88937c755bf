//! # rosterview
//!
//! An embeddable user-listing core:
//! - In-memory roster of user records, persisted to key-value storage
//! - Free-text search across name and email fields
//! - Stable column sorting with toggleable direction
//! - Pagination with navigation-control derivation
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  Presentation Adapter                        │
//! │            (CLI table / any external renderer)               │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ actions          ▲ DerivedView
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                   ListController                             │
//! │          (ViewState + single recompute pipeline)             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┼────────────┐
//!          │            │            │
//!          ▼            ▼            ▼
//!   ┌─────────────┐ ┌────────┐ ┌─────────────┐
//!   │ Query Engine│ │ Pager  │ │ RecordStore │
//!   │(filter/sort)│ │(slice) │ │ (load/save) │
//!   └─────────────┘ └────────┘ └──────┬──────┘
//!                                     │
//!                                     ▼
//!                             ┌─────────────┐
//!                             │KeyValueStore│
//!                             │ (file/mem)  │
//!                             └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod store;
pub mod query;
pub mod pager;
pub mod view;
pub mod controller;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, RosterError};
pub use config::Config;
pub use record::{Roster, UserRecord};
pub use query::{SortColumn, SortDirection, SortSpec};
pub use view::{SearchInput, ViewState};
pub use controller::{DerivedView, ListController};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of rosterview
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
