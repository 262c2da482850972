//! Assignment repository: create, delete, and joined listings.

use chrono::Utc;
use skillnow_core::entities::{Assignment, DEFAULT_ASSIGNMENT_STATUS, Project, User};
use skillnow_core::errors::CoreError;
use skillnow_core::responses::{AssignmentWithProject, AssignmentWithUser};
use tracing::info;

use crate::error::StoreError;
use crate::join;
use crate::service::SkillNowService;
use crate::table::{Table, TableStore, next_id};
use crate::updates::assignment::NewAssignment;

impl<S: TableStore + 'static> SkillNowService<S> {
    /// Assign a user to `project_id`.
    ///
    /// Neither id is checked against the users or projects tables.
    ///
    /// # Errors
    ///
    /// `CoreError::Validation` if `user_id` is missing,
    /// `StoreError::DuplicateAssignment` if the pair already exists in any
    /// status, or a storage failure.
    pub async fn create_assignment(
        &self,
        project_id: u64,
        new: NewAssignment,
    ) -> Result<Assignment, StoreError> {
        let user_id = new
            .user_id
            .ok_or_else(|| CoreError::Validation("user_id is required".into()))?;

        let assignment = self
            .with_table_lock(move |assignments: &mut Vec<Assignment>| {
                if assignments.iter().any(|a| a.links(project_id, user_id)) {
                    return Err(StoreError::DuplicateAssignment {
                        project_id,
                        user_id,
                    });
                }
                let assignment = Assignment {
                    id: next_id(assignments)?,
                    project_id,
                    user_id,
                    assigned_date: new
                        .assigned_date
                        .unwrap_or_else(|| Utc::now().date_naive()),
                    status: new
                        .status
                        .unwrap_or_else(|| DEFAULT_ASSIGNMENT_STATUS.to_string()),
                };
                assignments.push(assignment.clone());
                Ok(assignment)
            })
            .await?;

        info!(
            assignment_id = assignment.id,
            project_id, user_id, "created assignment"
        );
        Ok(assignment)
    }

    /// Remove assignment `assignment_id`, which must belong to `project_id`.
    ///
    /// # Errors
    ///
    /// `CoreError::NotFound` if no assignment of that project has the id, or
    /// a storage failure.
    pub async fn delete_assignment(
        &self,
        project_id: u64,
        assignment_id: u64,
    ) -> Result<Assignment, StoreError> {
        let removed = self
            .remove_record_where(assignment_id, move |a: &Assignment| {
                a.id == assignment_id && a.project_id == project_id
            })
            .await?;
        info!(assignment_id, project_id, "deleted assignment");
        Ok(removed)
    }

    /// Assignments of a project with their users attached, in file order.
    ///
    /// # Errors
    ///
    /// Propagates storage failures from either table.
    pub async fn assignments_for_project(
        &self,
        project_id: u64,
    ) -> Result<Vec<AssignmentWithUser>, StoreError> {
        let _users = self.locks().read(Table::Users).await;
        let _assignments = self.locks().read(Table::Assignments).await;
        self.on_store(move |store| {
            let assignments: Vec<Assignment> = store.load()?;
            let users: Vec<User> = store.load()?;
            Ok(join::assignments_for_project(assignments, project_id, &users))
        })
        .await
    }

    /// Assignments of a user with their projects attached, in file order.
    ///
    /// # Errors
    ///
    /// Propagates storage failures from either table.
    pub async fn assignments_for_user(
        &self,
        user_id: u64,
    ) -> Result<Vec<AssignmentWithProject>, StoreError> {
        let _projects = self.locks().read(Table::Projects).await;
        let _assignments = self.locks().read(Table::Assignments).await;
        self.on_store(move |store| {
            let assignments: Vec<Assignment> = store.load()?;
            let projects: Vec<Project> = store.load()?;
            Ok(join::assignments_for_user(assignments, user_id, &projects))
        })
        .await
    }
}
