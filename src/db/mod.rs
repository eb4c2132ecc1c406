pub mod experiences;
pub mod profile;
pub mod projects;
pub mod publications;
pub mod repository;
pub mod skills;
pub mod users;

use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

use crate::config::DbConfig;

/// Open the SeaORM connection pool and make sure the server answers.
pub async fn connect(config: &DbConfig) -> Result<DatabaseConnection, DbErr> {
    let mut opts = ConnectOptions::new(config.url());
    opts.max_connections(config.max_connections)
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(false);

    let db = Database::connect(opts).await?;
    db.ping().await?;
    tracing::info!(host = %config.host, database = %config.name, "Connected to database");
    Ok(db)
}

pub async fn health_check(db: &DatabaseConnection) -> Result<(), DbErr> {
    db.ping().await
}

pub async fn close(db: DatabaseConnection) -> Result<(), DbErr> {
    db.close().await
}
