use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM entity for the `profile` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "profile")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub title: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub photo_url: Option<String>,
    pub email: String,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub cv_url: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::projects::Entity")]
    Projects,
}

impl Related<super::projects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Projects.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// The portfolio owner's profile as served to the site and API.
///
/// `Default` is the empty profile the public page falls back to when no row
/// exists yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: i32,
    pub name: String,
    pub title: String,
    pub description: String,
    pub photo_url: String,
    pub email: String,
    pub linkedin_url: String,
    pub github_url: String,
    pub cv_url: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Model> for Profile {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            title: m.title.unwrap_or_default(),
            description: m.description.unwrap_or_default(),
            photo_url: m.photo_url.unwrap_or_default(),
            email: m.email,
            linkedin_url: m.linkedin_url.unwrap_or_default(),
            github_url: m.github_url.unwrap_or_default(),
            cv_url: m.cv_url.unwrap_or_default(),
            created_at: Some(m.created_at),
            updated_at: Some(m.updated_at),
        }
    }
}

// ── DTOs ──

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileRequest {
    pub name: String,
    pub title: String,
    pub description: String,
    pub photo_url: String,
    pub email: String,
    pub linkedin_url: String,
    pub github_url: String,
    pub cv_url: String,
}
