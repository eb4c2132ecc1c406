use sea_orm::entity::prelude::DateTimeUtc;
use sea_orm::*;

use super::repository::{Record, created, key};
use crate::models::publications::{self, Publication, PublicationRequest};

impl Record for Publication {
    type Entity = publications::Entity;
    type Key = publications::PrimaryKey;
    type Row = publications::Model;
    type Active = publications::ActiveModel;
    type Input = PublicationRequest;

    const KIND: &'static str = "publication";

    fn ordered(select: Select<publications::Entity>) -> Select<publications::Entity> {
        select
            .order_by_desc(publications::Column::Year)
            .order_by_desc(publications::Column::CreatedAt)
            .order_by_desc(publications::Column::Id)
    }

    fn active(
        input: PublicationRequest,
        id: Option<i32>,
        now: DateTimeUtc,
    ) -> publications::ActiveModel {
        publications::ActiveModel {
            id: key(id),
            title: Set(input.title),
            authors: Set(Some(input.authors)),
            journal: Set(Some(input.journal)),
            year: Set(Some(input.year)),
            description: Set(Some(input.description)),
            image_url: Set(Some(input.image_url)),
            publication_url: Set(Some(input.publication_url)),
            color: Set(Some(input.color)),
            created_at: created(id, now),
        }
    }
}
