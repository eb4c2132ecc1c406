use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Experience kinds accepted by validation, in display order.
pub const EXPERIENCE_TYPES: [&str; 4] = ["work", "internship", "campus", "competition"];

/// SeaORM entity for the `experiences` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "experiences")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub organization: String,
    pub period: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_name = "type")]
    pub kind: String,
    pub color: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Work, internship, campus or competition entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: i32,
    pub title: String,
    pub organization: String,
    pub period: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
}

impl From<Model> for Experience {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            organization: m.organization,
            period: m.period.unwrap_or_default(),
            description: m.description.unwrap_or_default(),
            kind: m.kind,
            color: m.color.unwrap_or_else(|| "cyan".to_string()),
            created_at: m.created_at,
        }
    }
}

// ── DTOs ──

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceRequest {
    pub title: String,
    pub organization: String,
    pub period: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub color: String,
}
