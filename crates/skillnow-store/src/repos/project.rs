//! Project repository: CRUD.

use skillnow_core::entities::Project;
use tracing::info;

use crate::error::StoreError;
use crate::service::SkillNowService;
use crate::table::TableStore;
use crate::updates::project::{NewProject, ProjectUpdate};

impl<S: TableStore + 'static> SkillNowService<S> {
    /// Every project, in storage order.
    ///
    /// # Errors
    ///
    /// Propagates storage failures.
    pub async fn list_projects(&self) -> Result<Vec<Project>, StoreError> {
        self.read_table().await
    }

    /// # Errors
    ///
    /// `CoreError::NotFound` if no project has `id`, or a storage failure.
    pub async fn get_project(&self, id: u64) -> Result<Project, StoreError> {
        self.get_record(id).await
    }

    /// Append a project under the next free id.
    ///
    /// # Errors
    ///
    /// `StoreError::IdsExhausted` if no id is left, or a storage failure.
    pub async fn create_project(&self, new: NewProject) -> Result<Project, StoreError> {
        let project = self.insert_record(move |id| new.into_project(id)).await?;
        info!(project_id = project.id, "created project");
        Ok(project)
    }

    /// # Errors
    ///
    /// `CoreError::NotFound` if no project has `id`, or a storage failure.
    pub async fn update_project(
        &self,
        id: u64,
        update: ProjectUpdate,
    ) -> Result<Project, StoreError> {
        let project = self
            .update_record(id, move |project: &mut Project| update.apply(project))
            .await?;
        info!(project_id = id, "updated project");
        Ok(project)
    }

    /// Delete a project. Its assignments are left in place.
    ///
    /// # Errors
    ///
    /// `CoreError::NotFound` if no project has `id`, or a storage failure.
    pub async fn delete_project(&self, id: u64) -> Result<Project, StoreError> {
        let project = self.delete_record(id).await?;
        info!(project_id = id, "deleted project");
        Ok(project)
    }
}
