//! Roster persistence
//!
//! Loads and saves the whole roster as one JSON array under a fixed key.
//! Loading fails soft: absent, unparseable or duplicate-id content all come
//! back as an empty roster, never as an error.

use tracing::warn;

use super::KeyValueStore;
use crate::error::Result;
use crate::record::{Roster, UserRecord};

/// Load/save boundary between the roster and the key-value collaborator
pub struct RecordStore {
    storage_key: String,
}

impl RecordStore {
    pub fn new(storage_key: impl Into<String>) -> Self {
        Self {
            storage_key: storage_key.into(),
        }
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Read the roster from storage
    ///
    /// Malformed stored content is treated as "no data": the corrupt value is
    /// logged and an empty roster returned. Only the collaborator's own I/O
    /// failures surface as errors.
    pub fn load<S: KeyValueStore>(&self, kv: &S) -> Result<Roster> {
        let Some(raw) = kv.get(&self.storage_key)? else {
            return Ok(Roster::new());
        };

        let records: Vec<UserRecord> = match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                warn!(key = %self.storage_key, error = %e, "stored roster unparseable, treating as empty");
                return Ok(Roster::new());
            }
        };

        match Roster::from_records(records) {
            Some(roster) => Ok(roster),
            None => {
                warn!(key = %self.storage_key, "stored roster has duplicate ids, treating as empty");
                Ok(Roster::new())
            }
        }
    }

    /// Write the complete roster to storage
    ///
    /// Errors surface to the caller; in-memory state is untouched on failure.
    pub fn save<S: KeyValueStore>(&self, kv: &mut S, roster: &Roster) -> Result<()> {
        let raw = serde_json::to_string(roster.records())?;
        kv.set(&self.storage_key, &raw)
    }
}
