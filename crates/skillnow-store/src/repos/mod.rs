//! Repository modules implementing the operations behind each endpoint.
//!
//! Each module adds methods to `SkillNowService` via `impl` blocks.

pub mod assignment;
pub mod project;
pub mod user;
