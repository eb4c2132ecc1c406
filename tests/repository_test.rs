//! Repository behavior against an in-memory SQLite database.
//!
//! Run with: `cargo test --test repository_test`
mod common;

use sea_orm::ConnectionTrait;

use common::*;
use portfolio_cms::db::repository;
use portfolio_cms::db::{profile as profile_db, skills as skills_db};
use portfolio_cms::models::experiences::Experience;
use portfolio_cms::models::profile::Profile;
use portfolio_cms::models::projects::{Project, ProjectRequest};
use portfolio_cms::models::publications::Publication;
use portfolio_cms::models::skills::Skill;
use portfolio_cms::services::normalize;

#[tokio::test]
async fn insert_then_get_round_trips() {
    let db = setup_test_db().await;

    let created: Experience =
        repository::insert(&db, normalize::experience(experience_request("Intern", "internship")))
            .await
            .unwrap();
    assert!(created.id > 0);
    assert_eq!(created.color, "pink");

    let fetched: Experience = repository::get_by_id(&db, created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn missing_id_is_record_not_found() {
    let db = setup_test_db().await;
    let err = repository::get_by_id::<Skill>(&db, 999).await.unwrap_err();
    assert!(matches!(err, sea_orm::DbErr::RecordNotFound(msg) if msg == "skill not found"));
}

#[tokio::test]
async fn delete_is_idempotent() {
    let db = setup_test_db().await;
    let skill: Skill = repository::insert(&db, normalize::skill(skill_request("Languages", "Rust", "advanced")))
        .await
        .unwrap();

    assert_eq!(repository::delete::<Skill>(&db, skill.id).await.unwrap(), 1);
    assert_eq!(repository::delete::<Skill>(&db, skill.id).await.unwrap(), 0);
    assert!(repository::get_by_id::<Skill>(&db, skill.id).await.is_err());
}

#[tokio::test]
async fn update_replaces_fields_and_keeps_created_at() {
    let db = setup_test_db().await;
    let original: Experience =
        repository::insert(&db, normalize::experience(experience_request("Dev", "work")))
            .await
            .unwrap();

    let mut changed = experience_request("Lead Dev", "competition");
    changed.description = "Led the team".to_string();
    let updated: Experience = repository::update(&db, original.id, normalize::experience(changed))
        .await
        .unwrap()
        .expect("row exists");

    assert_eq!(updated.id, original.id);
    assert_eq!(updated.title, "Lead Dev");
    assert_eq!(updated.kind, "competition");
    assert_eq!(updated.color, "purple");
    assert_eq!(updated.description, "Led the team");
    assert_eq!(updated.created_at, original.created_at);
}

#[tokio::test]
async fn update_of_unknown_id_is_none() {
    let db = setup_test_db().await;
    let result = repository::update::<Publication>(
        &db,
        4242,
        normalize::publication(publication_request("Ghost", 2020)),
    )
    .await
    .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn experiences_list_newest_first() {
    let db = setup_test_db().await;
    for title in ["first", "second", "third"] {
        repository::insert::<Experience>(&db, normalize::experience(experience_request(title, "work")))
            .await
            .unwrap();
    }

    let titles: Vec<String> = repository::get_all::<Experience>(&db)
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.title)
        .collect();
    assert_eq!(titles, ["third", "second", "first"]);
}

#[tokio::test]
async fn skills_list_by_category_then_name() {
    let db = setup_test_db().await;
    for (category, name) in [("Tools", "Git"), ("Languages", "Rust"), ("Languages", "Go"), ("Tools", "Docker")] {
        repository::insert::<Skill>(&db, normalize::skill(skill_request(category, name, "")))
            .await
            .unwrap();
    }

    let listed: Vec<(String, String)> = repository::get_all::<Skill>(&db)
        .await
        .unwrap()
        .into_iter()
        .map(|s| (s.category, s.name))
        .collect();
    assert_eq!(
        listed,
        [
            ("Languages".to_string(), "Go".to_string()),
            ("Languages".to_string(), "Rust".to_string()),
            ("Tools".to_string(), "Docker".to_string()),
            ("Tools".to_string(), "Git".to_string()),
        ]
    );

    let tools: Vec<String> = skills_db::get_by_category(&db, "Tools")
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(tools, ["Docker", "Git"]);
}

#[tokio::test]
async fn publications_list_by_year_desc() {
    let db = setup_test_db().await;
    for (title, year) in [("old", 2015), ("new", 2024), ("mid", 2019)] {
        repository::insert::<Publication>(&db, normalize::publication(publication_request(title, year)))
            .await
            .unwrap();
    }

    let years: Vec<i32> = repository::get_all::<Publication>(&db)
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.year)
        .collect();
    assert_eq!(years, [2024, 2019, 2015]);
}

#[tokio::test]
async fn null_columns_read_back_as_defaults() {
    let db = setup_test_db().await;
    db.execute_unprepared(
        "INSERT INTO skills (category, name, level, color) VALUES ('Languages', 'C', NULL, NULL)",
    )
    .await
    .unwrap();
    db.execute_unprepared(
        "INSERT INTO publications (title, created_at) VALUES ('Untitled', '2024-01-01T00:00:00+00:00')",
    )
    .await
    .unwrap();
    db.execute_unprepared(
        "INSERT INTO projects (title, created_at) VALUES ('Bare', '2024-01-01T00:00:00+00:00')",
    )
    .await
    .unwrap();

    let skill = &repository::get_all::<Skill>(&db).await.unwrap()[0];
    assert_eq!(skill.level, "intermediate");
    assert_eq!(skill.color, "gray");

    let publication = &repository::get_all::<Publication>(&db).await.unwrap()[0];
    assert_eq!(publication.year, 0);
    assert_eq!(publication.color, "red");
    assert_eq!(publication.journal, "");

    let project = &repository::get_all::<Project>(&db).await.unwrap()[0];
    assert_eq!(project.color, "cyan");
    assert_eq!(project.profile_id, 0);
}

#[tokio::test]
async fn project_keeps_profile_link() {
    let db = setup_test_db().await;
    let profile: Profile = repository::insert(&db, normalize::profile(profile_request("John Doe")))
        .await
        .unwrap();

    let project: Project = repository::insert(
        &db,
        normalize::project(ProjectRequest {
            title: "CMS".to_string(),
            tech_stack: "Rust, SeaORM".to_string(),
            profile_id: profile.id,
            ..Default::default()
        }),
    )
    .await
    .unwrap();

    assert_eq!(project.profile_id, profile.id);
    assert_eq!(project.technologies(), ["Rust", "SeaORM"]);
}

#[tokio::test]
async fn first_profile_is_authoritative() {
    let db = setup_test_db().await;
    assert!(profile_db::get_profile(&db).await.unwrap().is_none());

    let first: Profile = repository::insert(&db, normalize::profile(profile_request("First")))
        .await
        .unwrap();
    repository::insert::<Profile>(&db, normalize::profile(profile_request("Second")))
        .await
        .unwrap();

    let current = profile_db::get_profile(&db).await.unwrap().unwrap();
    assert_eq!(current.id, first.id);
    assert_eq!(current.name, "First");
}
