use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A registered engineer who can be assigned to projects.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    /// Ordered skill tokens, e.g. `["Rust", "React"]`.
    pub skills: Vec<String>,
    pub experience: String,
    pub prefecture: String,
}
