//! User registration payload and update builder.

use serde::{Deserialize, Serialize};
use skillnow_core::entities::User;

use super::{list_field, optional_list_field};

/// Body of `POST /api/register`. `name` and `email` must be present.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    #[serde(default, deserialize_with = "list_field")]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub prefecture: String,
}

impl NewUser {
    #[must_use]
    pub fn into_user(self, id: u64) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            skills: self.skills,
            experience: self.experience,
            prefecture: self.prefecture,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(
        default,
        deserialize_with = "optional_list_field",
        skip_serializing_if = "Option::is_none"
    )]
    pub skills: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefecture: Option<String>,
}

impl UserUpdate {
    /// Overwrite the fields that are set.
    pub fn apply(self, user: &mut User) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(skills) = self.skills {
            user.skills = skills;
        }
        if let Some(experience) = self.experience {
            user.experience = experience;
        }
        if let Some(prefecture) = self.prefecture {
            user.prefecture = prefecture;
        }
    }
}

pub struct UserUpdateBuilder(UserUpdate);

impl UserUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(UserUpdate::default())
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.0.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.0.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn skills<S: AsRef<str>>(mut self, skills: &[S]) -> Self {
        self.0.skills = Some(crate::codec::normalize_list(skills));
        self
    }

    #[must_use]
    pub fn experience(mut self, experience: impl Into<String>) -> Self {
        self.0.experience = Some(experience.into());
        self
    }

    #[must_use]
    pub fn prefecture(mut self, prefecture: impl Into<String>) -> Self {
        self.0.prefecture = Some(prefecture.into());
        self
    }

    #[must_use]
    pub fn build(self) -> UserUpdate {
        self.0
    }
}

impl Default for UserUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
