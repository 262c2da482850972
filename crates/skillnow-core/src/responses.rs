//! Response types returned as JSON by the SkillNow HTTP API.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Assignment, Project, User};

/// An assignment with its user attached, from `GET /api/projects/:id/assignments`.
///
/// `user` is omitted when `user_id` matches no row in `users.csv`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AssignmentWithUser {
    #[serde(flatten)]
    pub assignment: Assignment,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// An assignment with its project attached, from `GET /api/users/:id/assignments`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AssignmentWithProject {
    #[serde(flatten)]
    pub assignment: Assignment,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<Project>,
}

/// Response from `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct WelcomeResponse {
    pub message: String,
    pub status: String,
}

impl Default for WelcomeResponse {
    fn default() -> Self {
        Self {
            message: "Welcome to SkillNow API".to_string(),
            status: "running".to_string(),
        }
    }
}

/// Response from `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
}

/// Body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}
