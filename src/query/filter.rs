//! Free-text filtering
//!
//! Case-insensitive substring match across first name, last name and email.

use crate::record::UserRecord;

/// Filter records by a free-text search term
///
/// The term is trimmed first; an empty term returns every record in input
/// order. Otherwise a record matches when the lower-cased term is a substring
/// of its first name, last name OR email, regardless of stored casing.
pub fn filter(records: &[UserRecord], term: &str) -> Vec<UserRecord> {
    let term = term.trim();
    if term.is_empty() {
        return records.to_vec();
    }

    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|r| {
            r.first_name.to_lowercase().contains(&needle)
                || r.last_name.to_lowercase().contains(&needle)
                || r.email.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
