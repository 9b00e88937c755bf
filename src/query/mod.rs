//! Query Engine
//!
//! Pure derivation of a filtered, sorted view from the roster. Nothing here
//! mutates input; results are new sequences. Filter and sort commute, so the
//! controller may apply them in either order.

mod filter;
mod sort;

pub use filter::filter;
pub use sort::{sort, SortColumn, SortDirection, SortSpec};
