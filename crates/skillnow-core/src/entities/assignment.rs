use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Status given to a freshly created assignment.
pub const DEFAULT_ASSIGNMENT_STATUS: &str = "active";

/// Links one user to one project.
///
/// `project_id` and `user_id` are not checked against the other tables on
/// write. A `(project_id, user_id)` pair is unique across the table.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Assignment {
    pub id: u64,
    pub project_id: u64,
    pub user_id: u64,
    /// Serialized as `YYYY-MM-DD`.
    pub assigned_date: NaiveDate,
    pub status: String,
}

impl Assignment {
    /// Whether this assignment links the given project and user.
    #[must_use]
    pub const fn links(&self, project_id: u64, user_id: u64) -> bool {
        self.project_id == project_id && self.user_id == user_id
    }
}
