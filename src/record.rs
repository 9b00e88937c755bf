//! User record and roster definitions
//!
//! The roster is the complete, ordered set of user records. Records are
//! immutable after creation; the whole roster is replaced on storage load.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A single user record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Unique, stable identifier assigned at creation, never reused
    pub id: u64,

    pub first_name: String,

    pub last_name: String,

    pub email: String,

    /// Registration instant, stored as RFC 3339
    #[serde(with = "time::serde::rfc3339")]
    pub registration_date: OffsetDateTime,
}

/// The complete ordered set of user records
///
/// Invariant: `id` values are unique across the roster at all times.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    records: Vec<UserRecord>,
}

impl Roster {
    /// Create an empty roster
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from records, rejecting duplicate ids
    ///
    /// Returns `None` when two records share an id; callers treat that the
    /// same way as unparseable stored content.
    pub fn from_records(records: Vec<UserRecord>) -> Option<Self> {
        let mut seen = std::collections::HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return None;
            }
        }
        Some(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in roster order
    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, UserRecord> {
        self.records.iter()
    }

    /// Look up a record by id
    pub fn get(&self, id: u64) -> Option<&UserRecord> {
        self.records.iter().find(|r| r.id == id)
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a UserRecord;
    type IntoIter = std::slice::Iter<'a, UserRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
