use sea_orm::entity::prelude::DateTimeUtc;
use sea_orm::*;

use super::repository::{Record, key};
use crate::models::skills::{self, Skill, SkillRequest};

impl Record for Skill {
    type Entity = skills::Entity;
    type Key = skills::PrimaryKey;
    type Row = skills::Model;
    type Active = skills::ActiveModel;
    type Input = SkillRequest;

    const KIND: &'static str = "skill";

    fn ordered(select: Select<skills::Entity>) -> Select<skills::Entity> {
        select
            .order_by_asc(skills::Column::Category)
            .order_by_asc(skills::Column::Name)
    }

    fn active(input: SkillRequest, id: Option<i32>, _now: DateTimeUtc) -> skills::ActiveModel {
        skills::ActiveModel {
            id: key(id),
            category: Set(input.category),
            name: Set(input.name),
            level: Set(Some(input.level)),
            color: Set(Some(input.color)),
        }
    }
}

/// Skills of one category, alphabetically.
pub async fn get_by_category(db: &DatabaseConnection, category: &str) -> Result<Vec<Skill>, DbErr> {
    let rows = skills::Entity::find()
        .filter(skills::Column::Category.eq(category))
        .order_by_asc(skills::Column::Name)
        .all(db)
        .await?;
    Ok(rows.into_iter().map(Skill::from).collect())
}
