//! CSV table storage in a single data directory.
//!
//! Loads are tolerant: an absent file is an empty table and a malformed row is
//! logged and skipped. Saves are all-or-nothing: rows are written to a
//! temporary file next to the table, synced, then renamed over it.

use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use skillnow_core::entities::{Assignment, Project, User};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::error::StoreError;
use crate::table::{Record, Table, TableStore};

/// [`TableStore`] over `users.csv`, `projects.csv` and
/// `project_assignments.csv` in one directory.
#[derive(Debug, Clone)]
pub struct CsvStore {
    data_dir: PathBuf,
}

impl CsvStore {
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Full path of a table's file.
    #[must_use]
    pub fn path_for(&self, table: Table) -> PathBuf {
        self.data_dir.join(table.file_name())
    }

    /// Create the data directory and a header-only file for every missing
    /// table. Existing files are left untouched.
    ///
    /// Returns the tables that were created.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the directory or a file cannot be created.
    pub fn ensure_tables(&self) -> Result<Vec<Table>, StoreError> {
        fs::create_dir_all(&self.data_dir).map_err(|e| StoreError::io(&self.data_dir, e))?;

        let mut created = Vec::new();
        for table in Table::ALL {
            let path = self.path_for(table);
            if path.exists() {
                continue;
            }
            match table {
                Table::Users => self.save::<User>(&[])?,
                Table::Projects => self.save::<Project>(&[])?,
                Table::Assignments => self.save::<Assignment>(&[])?,
            }
            info!(table = %table, path = %path.display(), "created empty table");
            created.push(table);
        }
        Ok(created)
    }
}

impl TableStore for CsvStore {
    fn load<R: Record>(&self) -> Result<Vec<R>, StoreError> {
        let path = self.path_for(R::TABLE);
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(table = %R::TABLE, "table file absent, treating as empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(StoreError::io(path, e)),
        };

        let records = read_records::<R, _>(&path, file)?;
        debug!(table = %R::TABLE, rows = records.len(), "loaded table");
        Ok(records)
    }

    fn save<R: Record>(&self, records: &[R]) -> Result<(), StoreError> {
        let path = self.path_for(R::TABLE);
        fs::create_dir_all(&self.data_dir).map_err(|e| StoreError::io(&self.data_dir, e))?;

        let mut staged =
            NamedTempFile::new_in(&self.data_dir).map_err(|e| StoreError::io(&self.data_dir, e))?;
        write_records(&path, records, staged.as_file_mut())?;
        staged
            .as_file()
            .sync_all()
            .map_err(|e| StoreError::io(staged.path(), e))?;
        staged.persist(&path).map_err(|e| StoreError::Persist {
            path: path.clone(),
            source: e.error,
        })?;

        debug!(table = %R::TABLE, rows = records.len(), "saved table");
        Ok(())
    }
}

/// Parse a table, skipping rows that do not fit the record shape.
///
/// Only failures of the underlying reader abort the load.
pub(crate) fn read_records<R: Record, T: Read>(
    path: &Path,
    input: T,
) -> Result<Vec<R>, StoreError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(input);
    let headers = reader
        .headers()
        .map_err(|e| StoreError::csv(path, e))?
        .clone();

    let mut records = Vec::new();
    for result in reader.records() {
        let row = match result {
            Ok(row) => row,
            Err(e) if matches!(e.kind(), csv::ErrorKind::Io(_)) => {
                return Err(StoreError::csv(path, e));
            }
            Err(e) => {
                warn!(table = %R::TABLE, error = %e, "skipping malformed row");
                continue;
            }
        };
        match row.deserialize::<R::Row>(Some(&headers)) {
            Ok(parsed) => records.push(R::from_row(parsed)),
            Err(e) => {
                let line = row.position().map_or(0, csv::Position::line);
                warn!(table = %R::TABLE, line, error = %e, "skipping malformed row");
            }
        }
    }
    Ok(records)
}

/// Write the header row followed by every record, in order.
pub(crate) fn write_records<R: Record, W: Write>(
    path: &Path,
    records: &[R],
    output: W,
) -> Result<(), StoreError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(output);
    writer
        .write_record(R::TABLE.headers())
        .map_err(|e| StoreError::csv(path, e))?;
    for record in records {
        writer
            .serialize(record.to_row())
            .map_err(|e| StoreError::csv(path, e))?;
    }
    writer.flush().map_err(|e| StoreError::io(path, e))
}
