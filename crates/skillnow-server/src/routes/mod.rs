//! Route handlers, one module per resource.

pub mod assignments;
pub mod health;
pub mod projects;
pub mod users;
