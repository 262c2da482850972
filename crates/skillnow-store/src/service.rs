//! Service layer serializing access to the tables.
//!
//! `SkillNowService` wraps a [`TableStore`] and a lock per table. All repo
//! methods are implemented as `impl SkillNowService` blocks in [`crate::repos`].
//!
//! Every write follows this protocol:
//! 1. Take the table's write lock
//! 2. Load the whole table
//! 3. Mutate the in-memory rows
//! 4. Save the whole table (skipped if step 3 failed)
//! 5. Release the lock

use std::sync::Arc;

use skillnow_core::errors::CoreError;

use crate::csv_store::CsvStore;
use crate::error::StoreError;
use crate::lock::TableLocks;
use crate::table::{Record, TableStore, next_id};

/// Orchestrates table reads and writes under per-table locks.
///
/// Nothing is cached between calls: each operation sees the table as it is
/// on storage at that moment. File work runs on tokio's blocking pool while
/// the async table guard is held.
#[derive(Debug)]
pub struct SkillNowService<S = CsvStore> {
    store: Arc<S>,
    locks: TableLocks,
}

impl<S: TableStore + 'static> SkillNowService<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
            locks: TableLocks::default(),
        }
    }

    /// Access the underlying table store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    pub(crate) const fn locks(&self) -> &TableLocks {
        &self.locks
    }

    /// Run `work` against the store on the blocking pool.
    ///
    /// Callers take the table guards they need before awaiting this.
    pub(crate) async fn on_store<T, F>(&self, work: F) -> Result<T, StoreError>
    where
        T: Send + 'static,
        F: FnOnce(&S) -> Result<T, StoreError> + Send + 'static,
    {
        let store = Arc::clone(&self.store);
        tokio::task::spawn_blocking(move || work(&store)).await?
    }

    /// Load a whole table under its read lock.
    ///
    /// # Errors
    ///
    /// Propagates storage failures from [`TableStore::load`].
    pub async fn read_table<R: Record>(&self) -> Result<Vec<R>, StoreError> {
        let _guard = self.locks.read(R::TABLE).await;
        self.on_store(|store| store.load()).await
    }

    /// Run `mutate` on the loaded table and save the result, holding the
    /// table's write lock throughout.
    ///
    /// If `mutate` fails, nothing is written and its error is returned.
    ///
    /// # Errors
    ///
    /// Returns the error from `mutate`, or a storage failure from load/save.
    pub async fn with_table_lock<R, T, F>(&self, mutate: F) -> Result<T, StoreError>
    where
        R: Record,
        T: Send + 'static,
        F: FnOnce(&mut Vec<R>) -> Result<T, StoreError> + Send + 'static,
    {
        let _guard = self.locks.write(R::TABLE).await;
        self.on_store(move |store| {
            let mut records = store.load::<R>()?;
            let outcome = mutate(&mut records)?;
            store.save(&records)?;
            Ok(outcome)
        })
        .await
    }

    /// Find one record by id.
    ///
    /// # Errors
    ///
    /// `CoreError::NotFound` if no row has that id.
    pub async fn get_record<R: Record>(&self, id: u64) -> Result<R, StoreError> {
        self.read_table::<R>()
            .await?
            .into_iter()
            .find(|record| record.id() == id)
            .ok_or_else(|| CoreError::not_found(R::TABLE.entity_name(), id).into())
    }

    /// Append a record built from the next free id.
    ///
    /// # Errors
    ///
    /// `StoreError::IdsExhausted` if no id is left, or a storage failure.
    pub async fn insert_record<R, F>(&self, build: F) -> Result<R, StoreError>
    where
        R: Record,
        F: FnOnce(u64) -> R + Send + 'static,
    {
        self.with_table_lock(move |records: &mut Vec<R>| {
            let record = build(next_id(records)?);
            records.push(record.clone());
            Ok(record)
        })
        .await
    }

    /// Apply `change` to the record with `id` and return the updated record.
    ///
    /// # Errors
    ///
    /// `CoreError::NotFound` if no row has that id, or a storage failure.
    pub async fn update_record<R, F>(&self, id: u64, change: F) -> Result<R, StoreError>
    where
        R: Record,
        F: FnOnce(&mut R) + Send + 'static,
    {
        self.with_table_lock(move |records: &mut Vec<R>| {
            let record = records
                .iter_mut()
                .find(|record| record.id() == id)
                .ok_or_else(|| CoreError::not_found(R::TABLE.entity_name(), id))?;
            change(record);
            Ok(record.clone())
        })
        .await
    }

    /// Remove the first record matching `predicate` and return it.
    ///
    /// `id` is only used for the not-found message.
    ///
    /// # Errors
    ///
    /// `CoreError::NotFound` if nothing matches, or a storage failure.
    pub async fn remove_record_where<R, P>(&self, id: u64, predicate: P) -> Result<R, StoreError>
    where
        R: Record,
        P: Fn(&R) -> bool + Send + 'static,
    {
        self.with_table_lock(move |records: &mut Vec<R>| {
            let index = records
                .iter()
                .position(|record| predicate(record))
                .ok_or_else(|| CoreError::not_found(R::TABLE.entity_name(), id))?;
            Ok(records.remove(index))
        })
        .await
    }

    /// Remove the record with `id` and return it.
    ///
    /// # Errors
    ///
    /// `CoreError::NotFound` if no row has that id, or a storage failure.
    pub async fn delete_record<R: Record>(&self, id: u64) -> Result<R, StoreError> {
        self.remove_record_where(id, move |record: &R| record.id() == id)
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pretty_assertions::assert_eq;
    use skillnow_core::entities::User;

    use super::*;
    use crate::test_support::{temp_service, user};

    #[tokio::test]
    async fn failed_mutation_writes_nothing() {
        let (_dir, svc) = temp_service();
        svc.insert_record(|id| user(id, &["Rust"])).await.unwrap();
        let path = svc.store().path_for(crate::Table::Users);
        let before = std::fs::read(&path).unwrap();

        let result = svc
            .with_table_lock(|users: &mut Vec<User>| {
                users.clear();
                Err::<(), _>(CoreError::Validation("nope".into()).into())
            })
            .await;

        assert!(result.unwrap_err().is_validation());
        assert_eq!(std::fs::read(&path).unwrap(), before);
    }

    #[tokio::test]
    async fn concurrent_inserts_do_not_lose_updates() {
        let (_dir, svc) = temp_service();
        let svc = Arc::new(svc);

        let mut handles = Vec::new();
        for _ in 0..16 {
            let svc = Arc::clone(&svc);
            handles.push(tokio::spawn(async move {
                svc.insert_record(|id| user(id, &[])).await.unwrap().id
            }));
        }
        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();

        assert_eq!(ids, (1..=16).collect::<Vec<u64>>());
        let users: Vec<User> = svc.read_table().await.unwrap();
        assert_eq!(users.len(), 16);
    }

    #[tokio::test]
    async fn get_missing_record_is_not_found() {
        let (_dir, svc) = temp_service();
        let err = svc.get_record::<User>(9).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "User not found: 9");
    }

    /// Records which thread each load/save ran on.
    struct ThreadRecordingStore {
        inner: CsvStore,
        threads: std::sync::Mutex<Vec<std::thread::ThreadId>>,
    }

    impl ThreadRecordingStore {
        fn note(&self) {
            self.threads
                .lock()
                .unwrap()
                .push(std::thread::current().id());
        }
    }

    impl TableStore for ThreadRecordingStore {
        fn load<R: Record>(&self) -> Result<Vec<R>, StoreError> {
            self.note();
            self.inner.load()
        }

        fn save<R: Record>(&self, records: &[R]) -> Result<(), StoreError> {
            self.note();
            self.inner.save(records)
        }
    }

    #[tokio::test]
    async fn file_work_runs_off_the_runtime_thread() {
        let dir = tempfile::tempdir().unwrap();
        let svc = SkillNowService::new(ThreadRecordingStore {
            inner: CsvStore::new(dir.path()),
            threads: std::sync::Mutex::default(),
        });

        svc.insert_record(|id| user(id, &[])).await.unwrap();
        let users: Vec<User> = svc.read_table().await.unwrap();
        assert_eq!(users.len(), 1);

        let runtime_thread = std::thread::current().id();
        let threads = svc.store().threads.lock().unwrap().clone();
        assert_eq!(threads.len(), 3);
        assert!(threads.iter().all(|id| *id != runtime_thread));
    }
}
