use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Skill levels accepted by validation. An empty level is also allowed.
pub const SKILL_LEVELS: [&str; 3] = ["beginner", "intermediate", "advanced"];

/// SeaORM entity for the `skills` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "skills")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub category: String,
    pub name: String,
    pub level: Option<String>,
    pub color: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: i32,
    pub category: String,
    pub name: String,
    pub level: String,
    pub color: String,
}

impl From<Model> for Skill {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            category: m.category,
            name: m.name,
            level: m.level.unwrap_or_else(|| "intermediate".to_string()),
            color: m.color.unwrap_or_else(|| "gray".to_string()),
        }
    }
}

// ── DTOs ──

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillRequest {
    pub category: String,
    pub name: String,
    pub level: String,
    pub color: String,
}
