//! Record Store
//!
//! Persistence for the roster:
//! - `KeyValueStore`: the opaque key-value collaborator (file- or memory-backed)
//! - `RecordStore`: load/save of the whole roster as one JSON array
//! - `fixture`: sample-data generation when storage holds nothing

mod keyvalue;
mod roster;

pub mod fixture;

pub use keyvalue::{FileStore, KeyValueStore, MemoryStore};
pub use roster::RecordStore;
