//! Flat CSV shapes of the core records.
//!
//! Text columns default to empty when a file lacks them. `id` and the
//! assignment foreign keys are required; a row where they do not parse is
//! skipped on load.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use skillnow_core::entities::{Assignment, Project, User};

use crate::codec::{decode_list, encode_list};
use crate::table::{Record, Table};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRow {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub prefecture: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectRow {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required_skills: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssignmentRow {
    pub id: u64,
    pub project_id: u64,
    pub user_id: u64,
    pub assigned_date: NaiveDate,
    #[serde(default)]
    pub status: String,
}

impl Record for User {
    const TABLE: Table = Table::Users;

    type Row = UserRow;

    fn id(&self) -> u64 {
        self.id
    }

    fn to_row(&self) -> UserRow {
        UserRow {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            skills: encode_list(&self.skills),
            experience: self.experience.clone(),
            prefecture: self.prefecture.clone(),
        }
    }

    fn from_row(row: UserRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            skills: decode_list(&row.skills),
            experience: row.experience,
            prefecture: row.prefecture,
        }
    }
}

impl Record for Project {
    const TABLE: Table = Table::Projects;

    type Row = ProjectRow;

    fn id(&self) -> u64 {
        self.id
    }

    fn to_row(&self) -> ProjectRow {
        ProjectRow {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            required_skills: encode_list(&self.required_skills),
            location: self.location.clone(),
            duration: self.duration.clone(),
            status: self.status.clone(),
        }
    }

    fn from_row(row: ProjectRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            required_skills: decode_list(&row.required_skills),
            location: row.location,
            duration: row.duration,
            status: row.status,
        }
    }
}

impl Record for Assignment {
    const TABLE: Table = Table::Assignments;

    type Row = AssignmentRow;

    fn id(&self) -> u64 {
        self.id
    }

    fn to_row(&self) -> AssignmentRow {
        AssignmentRow {
            id: self.id,
            project_id: self.project_id,
            user_id: self.user_id,
            assigned_date: self.assigned_date,
            status: self.status.clone(),
        }
    }

    fn from_row(row: AssignmentRow) -> Self {
        Self {
            id: row.id,
            project_id: row.project_id,
            user_id: row.user_id,
            assigned_date: row.assigned_date,
            status: row.status,
        }
    }
}
