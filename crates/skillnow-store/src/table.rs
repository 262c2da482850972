//! Table identities and the record <-> row mapping.

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StoreError;

/// One CSV-backed collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Users,
    Projects,
    Assignments,
}

impl Table {
    /// Every table, in lock acquisition order.
    pub const ALL: [Self; 3] = [Self::Users, Self::Projects, Self::Assignments];

    /// File name inside the data directory.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Users => "users.csv",
            Self::Projects => "projects.csv",
            Self::Assignments => "project_assignments.csv",
        }
    }

    /// Header row written on every save. Loads match columns by name, so a
    /// file with the same columns in another order still reads correctly.
    #[must_use]
    pub const fn headers(self) -> &'static [&'static str] {
        match self {
            Self::Users => &["id", "name", "email", "skills", "experience", "prefecture"],
            Self::Projects => &[
                "id",
                "title",
                "description",
                "required_skills",
                "location",
                "duration",
                "status",
            ],
            Self::Assignments => &["id", "project_id", "user_id", "assigned_date", "status"],
        }
    }

    /// Singular record name used in error messages.
    #[must_use]
    pub const fn entity_name(self) -> &'static str {
        match self {
            Self::Users => "User",
            Self::Projects => "Project",
            Self::Assignments => "Assignment",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// A typed record persisted as one row of one table.
///
/// `Row` is the flat CSV shape; its serde field order must match
/// [`Table::headers`].
pub trait Record: Sized + Clone + Send + Sync + 'static {
    const TABLE: Table;

    type Row: Serialize + DeserializeOwned;

    fn id(&self) -> u64;

    fn to_row(&self) -> Self::Row;

    fn from_row(row: Self::Row) -> Self;
}

/// Whole-table persistence.
///
/// Implementations rewrite the full table on `save`; callers serialize
/// writers themselves (see [`crate::SkillNowService::with_table_lock`]).
pub trait TableStore: Send + Sync {
    /// Load every row of `R`'s table in storage order.
    ///
    /// # Errors
    ///
    /// Fails on storage errors other than an absent table, which loads as
    /// an empty list.
    fn load<R: Record>(&self) -> Result<Vec<R>, StoreError>;

    /// Replace `R`'s table with `records`, in the given order.
    ///
    /// # Errors
    ///
    /// Fails if the table cannot be fully written; the previous contents are
    /// left in place in that case.
    fn save<R: Record>(&self, records: &[R]) -> Result<(), StoreError>;
}

/// Id for the next record: one past the current maximum, or 1 when empty.
///
/// Gaps left by deletions below the maximum are never filled.
///
/// # Errors
///
/// `StoreError::IdsExhausted` if the table already holds `u64::MAX`.
pub fn next_id<R: Record>(records: &[R]) -> Result<u64, StoreError> {
    match records.iter().map(Record::id).max() {
        None => Ok(1),
        Some(max) => max
            .checked_add(1)
            .ok_or(StoreError::IdsExhausted { table: R::TABLE }),
    }
}
