#![allow(dead_code)]

use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

use portfolio_cms::models::experiences::ExperienceRequest;
use portfolio_cms::models::profile::ProfileRequest;
use portfolio_cms::models::publications::PublicationRequest;
use portfolio_cms::models::skills::SkillRequest;

pub const TEST_SECRET: &str = "integration-test-secret";

/// Fresh in-memory SQLite database with the full schema.
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to test database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    db
}

pub fn profile_request(name: &str) -> ProfileRequest {
    ProfileRequest {
        name: name.to_string(),
        title: "Software Engineer".to_string(),
        email: "john@example.com".to_string(),
        ..Default::default()
    }
}

pub fn experience_request(title: &str, kind: &str) -> ExperienceRequest {
    ExperienceRequest {
        title: title.to_string(),
        organization: "Acme".to_string(),
        period: "2023 - 2024".to_string(),
        kind: kind.to_string(),
        ..Default::default()
    }
}

pub fn skill_request(category: &str, name: &str, level: &str) -> SkillRequest {
    SkillRequest {
        category: category.to_string(),
        name: name.to_string(),
        level: level.to_string(),
        color: String::new(),
    }
}

pub fn publication_request(title: &str, year: i32) -> PublicationRequest {
    PublicationRequest {
        title: title.to_string(),
        authors: "J. Doe".to_string(),
        year,
        ..Default::default()
    }
}
