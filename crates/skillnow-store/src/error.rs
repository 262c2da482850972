//! Store error types.

use std::path::PathBuf;

use skillnow_core::errors::CoreError;
use thiserror::Error;

use crate::table::Table;

/// Errors from table operations.
///
/// A missing table file is never an error; it loads as an empty table.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Lookup or key-presence failure shared with the rest of the system.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The `(project_id, user_id)` pair is already assigned.
    #[error("User {user_id} is already assigned to project {project_id}")]
    DuplicateAssignment { project_id: u64, user_id: u64 },

    /// Reading or writing a table file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV layer failed on something other than a single bad row.
    #[error("CSV error on {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The largest stored id is `u64::MAX`; no id is left to hand out.
    #[error("No ids left in {table}")]
    IdsExhausted { table: Table },

    /// A blocking storage task panicked or was cancelled.
    #[error("Storage task failed: {0}")]
    Blocking(#[from] tokio::task::JoinError),

    /// The rewritten table could not replace the old file.
    #[error("Failed to replace {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }

    /// Whether the error means the requested record does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Core(CoreError::NotFound { .. }))
    }

    /// Whether the error was caused by the caller's input.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Core(CoreError::Validation(_)) | Self::DuplicateAssignment { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification() {
        assert!(StoreError::from(CoreError::not_found("User", 1)).is_not_found());
        assert!(StoreError::from(CoreError::Validation("x".into())).is_validation());
        let dup = StoreError::DuplicateAssignment {
            project_id: 7,
            user_id: 3,
        };
        assert!(dup.is_validation());
        assert!(!dup.is_not_found());
        let io = StoreError::io("data/users.csv", std::io::Error::other("disk full"));
        assert!(!io.is_validation());
        assert!(!io.is_not_found());
        assert!(io.to_string().contains("data/users.csv"));
    }
}
