use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::table::Table;

/// One reader/writer lock per table.
///
/// Writers hold the write half across the whole load/mutate/save cycle.
/// Callers that need several tables lock them in [`Table::ALL`] order.
#[derive(Debug, Default)]
pub(crate) struct TableLocks {
    users: RwLock<()>,
    projects: RwLock<()>,
    assignments: RwLock<()>,
}

impl TableLocks {
    const fn get(&self, table: Table) -> &RwLock<()> {
        match table {
            Table::Users => &self.users,
            Table::Projects => &self.projects,
            Table::Assignments => &self.assignments,
        }
    }

    pub(crate) async fn read(&self, table: Table) -> RwLockReadGuard<'_, ()> {
        self.get(table).read().await
    }

    pub(crate) async fn write(&self, table: Table) -> RwLockWriteGuard<'_, ()> {
        self.get(table).write().await
    }
}
