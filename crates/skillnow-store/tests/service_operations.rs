//! End-to-end repo operations over a temporary data directory.

use std::fs;

use pretty_assertions::assert_eq;
use skillnow_core::entities::{Assignment, Project};
use skillnow_store::updates::assignment::NewAssignment;
use skillnow_store::updates::project::NewProject;
use skillnow_store::updates::user::NewUser;
use skillnow_store::{CsvStore, SkillNowService, StoreError, Table};
use tempfile::TempDir;

fn test_service() -> (TempDir, SkillNowService) {
    let dir = tempfile::tempdir().unwrap();
    let store = CsvStore::new(dir.path());
    store.ensure_tables().unwrap();
    (dir, SkillNowService::new(store))
}

fn new_project(title: &str) -> NewProject {
    serde_json::from_value(serde_json::json!({
        "title": title,
        "required_skills": "React,TypeScript"
    }))
    .unwrap()
}

#[tokio::test]
async fn created_id_is_one_past_max() {
    let (dir, svc) = test_service();
    fs::write(
        dir.path().join("projects.csv"),
        "id,title,description,required_skills,location,duration,status\n\
         4,a,,,,,募集中\n\
         9,b,,,,,募集中\n\
         2,c,,,,,募集中\n",
    )
    .unwrap();

    let created = svc.create_project(new_project("d")).await.unwrap();
    assert_eq!(created.id, 10);
    assert_eq!(created.required_skills, vec!["React", "TypeScript"]);

    let listed: Vec<u64> = svc
        .list_projects()
        .await
        .unwrap()
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(listed, vec![4, 9, 2, 10]);
}

#[tokio::test]
async fn first_record_gets_id_one() {
    let (_dir, svc) = test_service();
    assert_eq!(svc.create_project(new_project("a")).await.unwrap().id, 1);
}

#[tokio::test]
async fn delete_removes_exactly_one_id() {
    let (_dir, svc) = test_service();
    for title in ["a", "b", "c"] {
        svc.create_project(new_project(title)).await.unwrap();
    }

    svc.delete_project(2).await.unwrap();

    let remaining: Vec<Project> = svc.list_projects().await.unwrap();
    let ids: Vec<u64> = remaining.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[tokio::test]
async fn deleting_missing_id_leaves_storage_untouched() {
    let (_dir, svc) = test_service();
    svc.create_project(new_project("a")).await.unwrap();
    let path = svc.store().path_for(Table::Projects);
    let before = fs::read(&path).unwrap();

    let err = svc.delete_project(42).await.unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(fs::read(&path).unwrap(), before);
}

#[tokio::test]
async fn duplicate_assignment_is_rejected_without_append() {
    let (_dir, svc) = test_service();
    svc.create_assignment(7, NewAssignment::for_user(3))
        .await
        .unwrap();
    let path = svc.store().path_for(Table::Assignments);
    let before = fs::read(&path).unwrap();

    let err = svc
        .create_assignment(7, NewAssignment::for_user(3))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        StoreError::DuplicateAssignment {
            project_id: 7,
            user_id: 3
        }
    ));
    assert!(err.is_validation());
    assert_eq!(fs::read(&path).unwrap(), before);
}

#[tokio::test]
async fn duplicate_check_ignores_status() {
    let (dir, svc) = test_service();
    fs::write(
        dir.path().join("project_assignments.csv"),
        "id,project_id,user_id,assigned_date,status\n1,7,3,2024-01-05,completed\n",
    )
    .unwrap();

    let err = svc
        .create_assignment(7, NewAssignment::for_user(3))
        .await
        .unwrap_err();
    assert!(err.is_validation());

    let other_user = svc
        .create_assignment(7, NewAssignment::for_user(4))
        .await
        .unwrap();
    assert_eq!(other_user.id, 2);
}

#[tokio::test]
async fn project_assignments_embed_users_in_file_order() {
    let (dir, svc) = test_service();
    fs::write(
        dir.path().join("users.csv"),
        "id,name,email,skills,experience,prefecture\n\
         3,山田太郎,taro@example.com,\"Python,Django\",5年,東京都\n\
         5,佐藤花子,hanako@example.com,React,3年,大阪府\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("project_assignments.csv"),
        "id,project_id,user_id,assigned_date,status\n\
         1,7,5,2024-03-20,active\n\
         2,8,3,2024-03-20,active\n\
         3,7,3,2024-03-21,active\n",
    )
    .unwrap();

    let joined = svc.assignments_for_project(7).await.unwrap();

    assert_eq!(joined.len(), 2);
    assert_eq!(joined[0].assignment.id, 1);
    assert_eq!(joined[0].user.as_ref().unwrap().name, "佐藤花子");
    assert_eq!(joined[1].assignment.id, 3);
    let taro = joined[1].user.as_ref().unwrap();
    assert_eq!(taro.id, 3);
    assert_eq!(taro.skills, vec!["Python", "Django"]);
}

#[tokio::test]
async fn user_assignments_embed_projects() {
    let (_dir, svc) = test_service();
    let project = svc.create_project(new_project("案件")).await.unwrap();
    svc.create_assignment(project.id, NewAssignment::for_user(3))
        .await
        .unwrap();
    svc.create_assignment(99, NewAssignment::for_user(3))
        .await
        .unwrap();

    let joined = svc.assignments_for_user(3).await.unwrap();

    assert_eq!(joined.len(), 2);
    assert_eq!(joined[0].project.as_ref().unwrap(), &project);
    assert!(joined[1].project.is_none());
    let stored: Vec<Assignment> = svc.read_table().await.unwrap();
    assert_eq!(stored.len(), 2);
}

#[tokio::test]
async fn create_after_max_id_fails_without_writing() {
    let (dir, svc) = test_service();
    let path = dir.path().join("projects.csv");
    fs::write(
        &path,
        "id,title,description,required_skills,location,duration,status
         18446744073709551615,last,,,,,募集中
",
    )
    .unwrap();
    let before = fs::read(&path).unwrap();

    let err = svc.create_project(new_project("next")).await.unwrap_err();

    assert!(matches!(err, StoreError::IdsExhausted { table: Table::Projects }));
    assert_eq!(fs::read(&path).unwrap(), before);
}

#[tokio::test]
async fn unreadable_table_fails_the_write() {
    let (dir, svc) = test_service();
    let path = dir.path().join("users.csv");
    fs::remove_file(&path).unwrap();
    fs::create_dir(&path).unwrap();

    let new_user: NewUser = serde_json::from_value(serde_json::json!({
        "name": "山田太郎",
        "email": "taro@example.com"
    }))
    .unwrap();
    let err = svc.create_user(new_user).await.unwrap_err();

    assert!(!err.is_validation());
    assert!(!err.is_not_found());
    assert!(err.to_string().contains("users.csv"), "{err}");
    assert!(path.is_dir());
    let leftovers: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(leftovers.len(), 3);
}
