//! Shared fixtures for unit tests.

use chrono::NaiveDate;
use skillnow_core::entities::{Assignment, Project, User};
use tempfile::TempDir;

use crate::csv_store::CsvStore;
use crate::service::SkillNowService;

/// Service over a fresh temporary data directory. Keep the `TempDir` alive.
pub(crate) fn temp_service() -> (TempDir, SkillNowService) {
    let dir = tempfile::tempdir().unwrap();
    let svc = SkillNowService::new(CsvStore::new(dir.path()));
    (dir, svc)
}

pub(crate) fn user(id: u64, skills: &[&str]) -> User {
    User {
        id,
        name: format!("user{id}"),
        email: format!("user{id}@example.com"),
        skills: skills.iter().map(ToString::to_string).collect(),
        experience: "3年".into(),
        prefecture: "東京都".into(),
    }
}

pub(crate) fn project(id: u64, required_skills: &[&str]) -> Project {
    Project {
        id,
        title: format!("project{id}"),
        description: "説明".into(),
        required_skills: required_skills.iter().map(ToString::to_string).collect(),
        location: "リモート".into(),
        duration: "3ヶ月".into(),
        status: "募集中".into(),
    }
}

pub(crate) fn assignment(id: u64, project_id: u64, user_id: u64) -> Assignment {
    Assignment {
        id,
        project_id,
        user_id,
        assigned_date: NaiveDate::from_ymd_opt(2024, 3, 20).unwrap(),
        status: "active".into(),
    }
}
