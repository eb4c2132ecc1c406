//! Generic CRUD over any content kind.
//!
//! Each kind implements [`Record`] once; the free functions below then give
//! it list, lookup, insert, update and delete with identical semantics.

use chrono::Utc;
use sea_orm::entity::prelude::DateTimeUtc;
use sea_orm::*;

/// Storage capabilities of one content kind.
pub trait Record: Sized {
    type Entity: EntityTrait<Model = Self::Row, PrimaryKey = Self::Key>;
    type Key: PrimaryKeyTrait<ValueType = i32>;
    type Row: ModelTrait<Entity = Self::Entity> + FromQueryResult + IntoActiveModel<Self::Active> + Into<Self>;
    type Active: ActiveModelTrait<Entity = Self::Entity> + ActiveModelBehavior + Send;
    /// Normalized input accepted by insert and update.
    type Input;

    /// Human name used in "not found" messages.
    const KIND: &'static str;

    /// Apply this kind's listing order.
    fn ordered(select: Select<Self::Entity>) -> Select<Self::Entity>;

    /// Build the active row. `id` is `None` on insert and `Some` on update.
    fn active(input: Self::Input, id: Option<i32>, now: DateTimeUtc) -> Self::Active;
}

/// Primary key value for [`Record::active`].
pub fn key(id: Option<i32>) -> ActiveValue<i32> {
    id.map_or(NotSet, Unchanged)
}

/// `created_at` is written once, on insert.
pub fn created(id: Option<i32>, now: DateTimeUtc) -> ActiveValue<DateTimeUtc> {
    if id.is_some() { NotSet } else { Set(now) }
}

pub async fn get_all<R: Record>(db: &DatabaseConnection) -> Result<Vec<R>, DbErr> {
    let rows = R::ordered(R::Entity::find()).all(db).await?;
    Ok(rows.into_iter().map(Into::into).collect())
}

/// Fetch one record, or `DbErr::RecordNotFound` naming the kind.
pub async fn get_by_id<R: Record>(db: &DatabaseConnection, id: i32) -> Result<R, DbErr> {
    R::Entity::find_by_id(id)
        .one(db)
        .await?
        .map(Into::into)
        .ok_or_else(|| DbErr::RecordNotFound(format!("{} not found", R::KIND)))
}

pub async fn insert<R: Record>(db: &DatabaseConnection, input: R::Input) -> Result<R, DbErr> {
    let row = R::active(input, None, Utc::now()).insert(db).await?;
    Ok(row.into())
}

/// Replace every mutable field of row `id`. `Ok(None)` when no row matched.
pub async fn update<R: Record>(
    db: &DatabaseConnection,
    id: i32,
    input: R::Input,
) -> Result<Option<R>, DbErr> {
    match R::active(input, Some(id), Utc::now()).update(db).await {
        Ok(row) => Ok(Some(row.into())),
        Err(DbErr::RecordNotUpdated) => Ok(None),
        Err(DbErr::RecordNotFound(_)) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Delete row `id`. Deleting a missing row is not an error; returns rows affected.
pub async fn delete<R: Record>(db: &DatabaseConnection, id: i32) -> Result<u64, DbErr> {
    let result = R::Entity::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected)
}
