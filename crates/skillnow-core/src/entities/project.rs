use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Status given to a project created without an explicit one ("recruiting").
pub const DEFAULT_PROJECT_STATUS: &str = "募集中";

/// A project that engineers can be assigned to.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Project {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub required_skills: Vec<String>,
    pub location: String,
    pub duration: String,
    /// Free text; the set of states is open.
    pub status: String,
}
