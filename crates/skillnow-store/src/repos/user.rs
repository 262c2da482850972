//! User repository: list, get, register, update.

use skillnow_core::entities::User;
use tracing::info;

use crate::error::StoreError;
use crate::service::SkillNowService;
use crate::table::TableStore;
use crate::updates::user::{NewUser, UserUpdate};

impl<S: TableStore + 'static> SkillNowService<S> {
    /// # Errors
    ///
    /// Propagates storage failures.
    pub async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        self.read_table().await
    }

    /// # Errors
    ///
    /// `CoreError::NotFound` if no user has `id`, or a storage failure.
    pub async fn get_user(&self, id: u64) -> Result<User, StoreError> {
        self.get_record(id).await
    }

    /// Register a user under the next free id.
    ///
    /// # Errors
    ///
    /// `StoreError::IdsExhausted` if no id is left, or a storage failure.
    pub async fn create_user(&self, new: NewUser) -> Result<User, StoreError> {
        let user = self.insert_record(move |id| new.into_user(id)).await?;
        info!(user_id = user.id, "registered user");
        Ok(user)
    }

    /// Apply the fields set in `update`; the id never changes.
    ///
    /// # Errors
    ///
    /// `CoreError::NotFound` if no user has `id`, or a storage failure.
    pub async fn update_user(&self, id: u64, update: UserUpdate) -> Result<User, StoreError> {
        let user = self
            .update_record(id, move |user: &mut User| update.apply(user))
            .await?;
        info!(user_id = id, "updated user");
        Ok(user)
    }
}
