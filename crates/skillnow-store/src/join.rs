//! Join resolver: attaches the related user or project to assignments.
//!
//! Filtering keeps storage order. A foreign key with no matching row leaves
//! the relation empty; that is not an error.

use skillnow_core::entities::{Assignment, Project, User};
use skillnow_core::responses::{AssignmentWithProject, AssignmentWithUser};

use crate::table::Record;

/// First record with the given id. Ids are unique, so first is only.
#[must_use]
pub fn find_by_id<R: Record>(records: &[R], id: u64) -> Option<&R> {
    records.iter().find(|record| record.id() == id)
}

/// Assignments of `project_id`, each with its user attached.
#[must_use]
pub fn assignments_for_project(
    assignments: Vec<Assignment>,
    project_id: u64,
    users: &[User],
) -> Vec<AssignmentWithUser> {
    assignments
        .into_iter()
        .filter(|a| a.project_id == project_id)
        .map(|assignment| AssignmentWithUser {
            user: find_by_id(users, assignment.user_id).cloned(),
            assignment,
        })
        .collect()
}

/// Assignments of `user_id`, each with its project attached.
#[must_use]
pub fn assignments_for_user(
    assignments: Vec<Assignment>,
    user_id: u64,
    projects: &[Project],
) -> Vec<AssignmentWithProject> {
    assignments
        .into_iter()
        .filter(|a| a.user_id == user_id)
        .map(|assignment| AssignmentWithProject {
            project: find_by_id(projects, assignment.project_id).cloned(),
            assignment,
        })
        .collect()
}
