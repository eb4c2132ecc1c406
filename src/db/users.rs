use chrono::Utc;
use sea_orm::*;

use crate::models::users::{self, NewUser};

pub async fn find_by_email(
    db: &DatabaseConnection,
    email: &str,
) -> Result<Option<users::Model>, DbErr> {
    users::Entity::find()
        .filter(users::Column::Email.eq(email))
        .one(db)
        .await
}

pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<users::Model>, DbErr> {
    users::Entity::find_by_id(id).one(db).await
}

/// Insert a user whose password has already been hashed.
pub async fn insert_user(db: &DatabaseConnection, input: NewUser) -> Result<users::Model, DbErr> {
    let now = Utc::now();
    let new_user = users::ActiveModel {
        id: NotSet,
        email: Set(input.email),
        password_hash: Set(input.password_hash),
        name: Set(input.name),
        role: Set(input.role),
        created_at: Set(now),
        updated_at: Set(now),
    };

    new_user.insert(db).await
}

/// Change a user's email and display name.
pub async fn update_user(
    db: &DatabaseConnection,
    id: i32,
    email: String,
    name: String,
) -> Result<users::Model, DbErr> {
    let user = users::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("user not found".to_string()))?;

    let mut active: users::ActiveModel = user.into();
    active.email = Set(email);
    active.name = Set(name);
    active.updated_at = Set(Utc::now());

    active.update(db).await
}
