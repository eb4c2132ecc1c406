use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM entity for the `publications` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "publications")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub authors: Option<String>,
    pub journal: Option<String>,
    pub year: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub publication_url: Option<String>,
    pub color: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Publication {
    pub id: i32,
    pub title: String,
    pub authors: String,
    pub journal: String,
    pub year: i32,
    pub description: String,
    pub image_url: String,
    pub publication_url: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
}

impl From<Model> for Publication {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            authors: m.authors.unwrap_or_default(),
            journal: m.journal.unwrap_or_default(),
            year: m.year.unwrap_or_default(),
            description: m.description.unwrap_or_default(),
            image_url: m.image_url.unwrap_or_default(),
            publication_url: m.publication_url.unwrap_or_default(),
            color: m.color.unwrap_or_else(|| "red".to_string()),
            created_at: m.created_at,
        }
    }
}

// ── DTOs ──

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublicationRequest {
    pub title: String,
    pub authors: String,
    pub journal: String,
    pub year: i32,
    pub description: String,
    pub image_url: String,
    pub publication_url: String,
    pub color: String,
}
