//! Validate → normalize → persist, shared by every content kind.

use sea_orm::{DatabaseConnection, DbErr};

use crate::db::repository::{self, Record};
use crate::db::{profile as profile_db, skills as skills_db};
use crate::errors::{AppError, AppResult};
use crate::models::experiences::Experience;
use crate::models::profile::Profile;
use crate::models::projects::Project;
use crate::models::publications::Publication;
use crate::models::skills::Skill;
use crate::services::normalize;
use crate::services::validation::{self, ValidationError};

/// A content kind that can be edited through the API and admin panel.
pub trait Editable: Record {
    fn validate(input: &Self::Input) -> Result<(), ValidationError>;
    fn normalize(input: Self::Input) -> Self::Input;
}

impl Editable for Profile {
    fn validate(input: &Self::Input) -> Result<(), ValidationError> {
        validation::validate_profile(input)
    }
    fn normalize(input: Self::Input) -> Self::Input {
        normalize::profile(input)
    }
}

impl Editable for Experience {
    fn validate(input: &Self::Input) -> Result<(), ValidationError> {
        validation::validate_experience(input)
    }
    fn normalize(input: Self::Input) -> Self::Input {
        normalize::experience(input)
    }
}

impl Editable for Skill {
    fn validate(input: &Self::Input) -> Result<(), ValidationError> {
        validation::validate_skill(input)
    }
    fn normalize(input: Self::Input) -> Self::Input {
        normalize::skill(input)
    }
}

impl Editable for Project {
    fn validate(input: &Self::Input) -> Result<(), ValidationError> {
        validation::validate_project(input)
    }
    fn normalize(input: Self::Input) -> Self::Input {
        normalize::project(input)
    }
}

impl Editable for Publication {
    fn validate(input: &Self::Input) -> Result<(), ValidationError> {
        validation::validate_publication(input)
    }
    fn normalize(input: Self::Input) -> Self::Input {
        normalize::publication(input)
    }
}

/// Log a storage fault on its way up. Lookups that simply miss are not logged.
fn storage(kind: &'static str, op: &'static str) -> impl FnOnce(DbErr) -> AppError {
    move |e| {
        if !matches!(e, DbErr::RecordNotFound(_)) {
            tracing::error!(kind, op, error = %e, "storage error");
        }
        AppError::from(e)
    }
}

pub async fn list<R: Editable>(db: &DatabaseConnection) -> AppResult<Vec<R>> {
    repository::get_all::<R>(db)
        .await
        .map_err(storage(R::KIND, "list"))
}

pub async fn get<R: Editable>(db: &DatabaseConnection, id: i32) -> AppResult<R> {
    validation::validate_id(id)?;
    repository::get_by_id::<R>(db, id)
        .await
        .map_err(storage(R::KIND, "get"))
}

pub async fn create<R: Editable>(db: &DatabaseConnection, input: R::Input) -> AppResult<R> {
    R::validate(&input)?;
    let record = repository::insert::<R>(db, R::normalize(input))
        .await
        .map_err(storage(R::KIND, "create"))?;
    tracing::info!(kind = R::KIND, "created");
    Ok(record)
}

/// Replace record `id`. An unknown id is `AppError::NotFound`.
pub async fn update<R: Editable>(
    db: &DatabaseConnection,
    id: i32,
    input: R::Input,
) -> AppResult<R> {
    validation::validate_id(id)?;
    R::validate(&input)?;
    repository::update::<R>(db, id, R::normalize(input))
        .await
        .map_err(storage(R::KIND, "update"))?
        .ok_or_else(|| AppError::not_found(R::KIND))
}

/// Remove record `id`. Removing something already gone succeeds.
pub async fn delete<R: Editable>(db: &DatabaseConnection, id: i32) -> AppResult<()> {
    validation::validate_id(id)?;
    let affected = repository::delete::<R>(db, id)
        .await
        .map_err(storage(R::KIND, "delete"))?;
    tracing::info!(kind = R::KIND, id, affected, "deleted");
    Ok(())
}

/// The site profile, or `NotFound` when none has been created yet.
pub async fn get_profile(db: &DatabaseConnection) -> AppResult<Profile> {
    profile_db::get_profile(db)
        .await
        .map_err(storage(Profile::KIND, "get"))?
        .ok_or_else(|| AppError::not_found(Profile::KIND))
}

pub async fn skills_by_category(db: &DatabaseConnection, category: &str) -> AppResult<Vec<Skill>> {
    validation::validate_category(category)?;
    skills_db::get_by_category(db, category.trim())
        .await
        .map_err(storage(Skill::KIND, "list"))
}
