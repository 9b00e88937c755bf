//! Column sorting
//!
//! Stable, comparator-based ordering. Text columns compare case-insensitively,
//! the registration date chronologically. Direction flips comparison polarity
//! only; ties always keep their relative input order.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::record::UserRecord;

/// Sortable columns
///
/// The display-only row index is not a column here; requests to sort by it
/// never construct a `SortColumn` and are dropped by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortColumn {
    FirstName,
    LastName,
    Email,
    RegistrationDate,
}

impl SortColumn {
    /// Parse a column name as used by presentation adapters
    ///
    /// Returns `None` for anything that is not a sortable column, including
    /// the row-index pseudo-column.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "firstName" => Some(Self::FirstName),
            "lastName" => Some(Self::LastName),
            "email" => Some(Self::Email),
            "registrationDate" => Some(Self::RegistrationDate),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::RegistrationDate => "registrationDate",
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// A (column, direction) pair governing ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    /// Startup ordering: registration date, ascending
    fn default() -> Self {
        Self {
            column: SortColumn::RegistrationDate,
            direction: SortDirection::Ascending,
        }
    }
}

impl SortSpec {
    /// Apply a sort-header activation
    ///
    /// Activating the already-active column toggles direction; activating a
    /// new column always starts ascending.
    pub fn activate(&mut self, column: SortColumn) {
        if self.column == column {
            self.direction = self.direction.toggled();
        } else {
            self.column = column;
            self.direction = SortDirection::Ascending;
        }
    }
}

/// Return a new ordering of `records` per `spec`
///
/// The sort is stable: equal keys preserve relative input order in both
/// directions.
pub fn sort(records: &[UserRecord], spec: SortSpec) -> Vec<UserRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = compare(a, b, spec.column);
        match spec.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    sorted
}

fn compare(a: &UserRecord, b: &UserRecord, column: SortColumn) -> Ordering {
    match column {
        SortColumn::FirstName => text_cmp(&a.first_name, &b.first_name),
        SortColumn::LastName => text_cmp(&a.last_name, &b.last_name),
        SortColumn::Email => text_cmp(&a.email, &b.email),
        SortColumn::RegistrationDate => a.registration_date.cmp(&b.registration_date),
    }
}

fn text_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
