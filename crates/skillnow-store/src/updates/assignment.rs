//! Assignment creation payload.

use chrono::NaiveDate;
use serde::Deserialize;

/// Body of `POST /api/projects/:id/assignments`.
///
/// `user_id` is optional at the type level so that its absence is reported
/// as a validation error by the repo rather than as a parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewAssignment {
    #[serde(default)]
    pub user_id: Option<u64>,
    /// Defaults to today (UTC).
    #[serde(default)]
    pub assigned_date: Option<NaiveDate>,
    /// Defaults to `active`.
    #[serde(default)]
    pub status: Option<String>,
}

impl NewAssignment {
    #[must_use]
    pub fn for_user(user_id: u64) -> Self {
        Self {
            user_id: Some(user_id),
            ..Self::default()
        }
    }
}
