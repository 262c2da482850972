//! Record structs for the three SkillNow tables.
//!
//! Each record maps to one CSV table in the data directory. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema`; the JSON shape is the HTTP
//! contract, while the CSV shape is owned by `skillnow-store`.

mod assignment;
mod project;
mod user;

pub use assignment::{Assignment, DEFAULT_ASSIGNMENT_STATUS};
pub use project::{DEFAULT_PROJECT_STATUS, Project};
pub use user::User;
