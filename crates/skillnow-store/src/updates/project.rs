//! Project creation payload and update builder.

use serde::{Deserialize, Serialize};
use skillnow_core::entities::{DEFAULT_PROJECT_STATUS, Project};

use super::{list_field, optional_list_field};

fn default_status() -> String {
    DEFAULT_PROJECT_STATUS.to_string()
}

/// Body of `POST /api/projects`. Only `title` must be present.
#[derive(Debug, Clone, Deserialize)]
pub struct NewProject {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "list_field")]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default = "default_status")]
    pub status: String,
}

impl NewProject {
    #[must_use]
    pub fn into_project(self, id: u64) -> Project {
        Project {
            id,
            title: self.title,
            description: self.description,
            required_skills: self.required_skills,
            location: self.location,
            duration: self.duration,
            status: self.status,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "optional_list_field",
        skip_serializing_if = "Option::is_none"
    )]
    pub required_skills: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl ProjectUpdate {
    /// Overwrite the fields that are set.
    pub fn apply(self, project: &mut Project) {
        if let Some(title) = self.title {
            project.title = title;
        }
        if let Some(description) = self.description {
            project.description = description;
        }
        if let Some(required_skills) = self.required_skills {
            project.required_skills = required_skills;
        }
        if let Some(location) = self.location {
            project.location = location;
        }
        if let Some(duration) = self.duration {
            project.duration = duration;
        }
        if let Some(status) = self.status {
            project.status = status;
        }
    }
}

pub struct ProjectUpdateBuilder(ProjectUpdate);

impl ProjectUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(ProjectUpdate::default())
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.0.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn required_skills<S: AsRef<str>>(mut self, skills: &[S]) -> Self {
        self.0.required_skills = Some(crate::codec::normalize_list(skills));
        self
    }

    #[must_use]
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.0.location = Some(location.into());
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: impl Into<String>) -> Self {
        self.0.duration = Some(duration.into());
        self
    }

    #[must_use]
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.0.status = Some(status.into());
        self
    }

    #[must_use]
    pub fn build(self) -> ProjectUpdate {
        self.0
    }
}

impl Default for ProjectUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
