use actix_web::web;
use sea_orm::DatabaseConnection;

use crate::auth::password::{hash_password, verify_password};
use crate::db::users as users_db;
use crate::errors::{AppError, AppResult};
use crate::models::users::{self, LoginRequest, NewUser, RegisterRequest, Role};
use crate::services::validation;

pub const INVALID_CREDENTIALS: &str = "invalid email or password";

/// Check credentials. Unknown email and wrong password are indistinguishable.
pub async fn login(db: &DatabaseConnection, req: LoginRequest) -> AppResult<users::Model> {
    validation::validate_login(&req)?;
    let email = req.email.trim().to_string();

    let user = users_db::find_by_email(db, &email).await.map_err(|e| {
        tracing::error!(error = %e, "user lookup failed");
        AppError::from(e)
    })?;

    let Some(user) = user else {
        tracing::warn!(email = %email, "login with unknown email");
        return Err(AppError::Auth(INVALID_CREDENTIALS.to_string()));
    };

    let password = req.password;
    let hash = user.password_hash.clone();
    let matches = web::block(move || verify_password(&password, &hash)).await?;
    if !matches {
        tracing::warn!(user_id = user.id, "login with wrong password");
        return Err(AppError::Auth(INVALID_CREDENTIALS.to_string()));
    }

    tracing::info!(user_id = user.id, "user logged in");
    Ok(user)
}

/// Create an admin account.
pub async fn register(db: &DatabaseConnection, req: RegisterRequest) -> AppResult<users::Model> {
    validation::validate_register(&req)?;
    let email = req.email.trim().to_string();

    if users_db::find_by_email(db, &email).await?.is_some() {
        return Err(AppError::Auth("email already registered".to_string()));
    }

    let password = req.password;
    let password_hash = web::block(move || hash_password(&password))
        .await?
        .map_err(|e| AppError::Internal(format!("failed to hash password: {e}")))?;

    let user = users_db::insert_user(
        db,
        NewUser {
            email,
            password_hash,
            name: req.name.trim().to_string(),
            role: Role::Admin,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, "user registered");
    Ok(user)
}

pub async fn get_user(db: &DatabaseConnection, id: i32) -> AppResult<users::Model> {
    validation::validate_id(id)?;
    users_db::find_by_id(db, id)
        .await?
        .ok_or_else(|| AppError::not_found("user"))
}
