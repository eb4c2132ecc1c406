use sea_orm::entity::prelude::DateTimeUtc;
use sea_orm::*;

use super::repository::{Record, created, key};
use crate::models::profile::{self, Profile, ProfileRequest};

impl Record for Profile {
    type Entity = profile::Entity;
    type Key = profile::PrimaryKey;
    type Row = profile::Model;
    type Active = profile::ActiveModel;
    type Input = ProfileRequest;

    const KIND: &'static str = "profile";

    fn ordered(select: Select<profile::Entity>) -> Select<profile::Entity> {
        select.order_by_asc(profile::Column::Id)
    }

    fn active(input: ProfileRequest, id: Option<i32>, now: DateTimeUtc) -> profile::ActiveModel {
        profile::ActiveModel {
            id: key(id),
            name: Set(input.name),
            title: Set(Some(input.title)),
            description: Set(Some(input.description)),
            photo_url: Set(Some(input.photo_url)),
            email: Set(input.email),
            linkedin_url: Set(Some(input.linkedin_url)),
            github_url: Set(Some(input.github_url)),
            cv_url: Set(Some(input.cv_url)),
            created_at: created(id, now),
            updated_at: Set(now),
        }
    }
}

/// The site shows a single profile: the one with the lowest id.
pub async fn get_profile(db: &DatabaseConnection) -> Result<Option<Profile>, DbErr> {
    let row = profile::Entity::find()
        .order_by_asc(profile::Column::Id)
        .one(db)
        .await?;
    Ok(row.map(Profile::from))
}
