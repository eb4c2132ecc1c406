use sea_orm::entity::prelude::DateTimeUtc;
use sea_orm::*;

use super::repository::{Record, created, key};
use crate::models::experiences::{self, Experience, ExperienceRequest};

impl Record for Experience {
    type Entity = experiences::Entity;
    type Key = experiences::PrimaryKey;
    type Row = experiences::Model;
    type Active = experiences::ActiveModel;
    type Input = ExperienceRequest;

    const KIND: &'static str = "experience";

    fn ordered(select: Select<experiences::Entity>) -> Select<experiences::Entity> {
        select
            .order_by_desc(experiences::Column::CreatedAt)
            .order_by_desc(experiences::Column::Id)
    }

    fn active(
        input: ExperienceRequest,
        id: Option<i32>,
        now: DateTimeUtc,
    ) -> experiences::ActiveModel {
        experiences::ActiveModel {
            id: key(id),
            title: Set(input.title),
            organization: Set(input.organization),
            period: Set(Some(input.period)),
            description: Set(Some(input.description)),
            kind: Set(input.kind),
            color: Set(Some(input.color)),
            created_at: created(id, now),
        }
    }
}
