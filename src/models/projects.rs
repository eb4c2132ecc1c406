use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM entity for the `projects` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub project_url: Option<String>,
    pub github_url: Option<String>,
    pub tech_stack: Option<String>,
    pub color: Option<String>,
    pub profile_id: Option<i32>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::profile::Entity",
        from = "Column::ProfileId",
        to = "super::profile::Column::Id"
    )]
    Profile,
}

impl Related<super::profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Profile.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub project_url: String,
    pub github_url: String,
    pub tech_stack: String,
    pub color: String,
    pub profile_id: i32,
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Comma-separated `tech_stack` as trimmed, non-empty entries.
    pub fn technologies(&self) -> Vec<&str> {
        self.tech_stack
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }
}

impl From<Model> for Project {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            description: m.description.unwrap_or_default(),
            image_url: m.image_url.unwrap_or_default(),
            project_url: m.project_url.unwrap_or_default(),
            github_url: m.github_url.unwrap_or_default(),
            tech_stack: m.tech_stack.unwrap_or_default(),
            color: m.color.unwrap_or_else(|| "cyan".to_string()),
            profile_id: m.profile_id.unwrap_or_default(),
            created_at: m.created_at,
        }
    }
}

// ── DTOs ──

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectRequest {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub project_url: String,
    pub github_url: String,
    pub tech_stack: String,
    pub color: String,
    /// Owning profile. `0` means "unassigned".
    pub profile_id: i32,
}
