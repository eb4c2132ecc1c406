use sea_orm::entity::prelude::DateTimeUtc;
use sea_orm::*;

use super::repository::{Record, created, key};
use crate::models::projects::{self, Project, ProjectRequest};

impl Record for Project {
    type Entity = projects::Entity;
    type Key = projects::PrimaryKey;
    type Row = projects::Model;
    type Active = projects::ActiveModel;
    type Input = ProjectRequest;

    const KIND: &'static str = "project";

    fn ordered(select: Select<projects::Entity>) -> Select<projects::Entity> {
        select
            .order_by_desc(projects::Column::CreatedAt)
            .order_by_desc(projects::Column::Id)
    }

    fn active(input: ProjectRequest, id: Option<i32>, now: DateTimeUtc) -> projects::ActiveModel {
        projects::ActiveModel {
            id: key(id),
            title: Set(input.title),
            description: Set(Some(input.description)),
            image_url: Set(Some(input.image_url)),
            project_url: Set(Some(input.project_url)),
            github_url: Set(Some(input.github_url)),
            tech_stack: Set(Some(input.tech_stack)),
            color: Set(Some(input.color)),
            // 0 = unassigned; stored as NULL so the foreign key stays satisfied.
            profile_id: Set((input.profile_id > 0).then_some(input.profile_id)),
            created_at: created(id, now),
        }
    }
}
