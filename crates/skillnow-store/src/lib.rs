//! # skillnow-store
//!
//! Flat-file persistence for SkillNow: users, projects and project
//! assignments, one CSV table each.
//!
//! Every operation reloads the whole table, works on it in memory and, for
//! writes, rewrites the whole file. The pieces:
//! - [`codec`]: the list-in-a-cell encoding used by `skills` and
//!   `required_skills`
//! - [`table`]: table identities, header layouts and the [`Record`] mapping
//! - [`csv_store`]: the [`TableStore`] implementation over a data directory
//! - [`service`]: per-table locking around load/mutate/save
//! - [`join`]: attaching users or projects to assignments
//! - [`repos`]: the operations exposed to the HTTP layer

pub mod codec;
pub mod csv_store;
pub mod error;
pub mod join;
mod lock;
pub mod repos;
pub mod rows;
pub mod service;
pub mod table;
pub mod updates;

#[cfg(test)]
mod test_support;

pub use csv_store::CsvStore;
pub use error::StoreError;
pub use service::SkillNowService;
pub use table::{Record, Table, TableStore, next_id};
