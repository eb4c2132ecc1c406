//! Create an admin account.
//!
//! Usage: `create_admin <email> <password> [name]`, or set `ADMIN_EMAIL`,
//! `ADMIN_PASSWORD` and `ADMIN_NAME`.

use dotenv::dotenv;
use portfolio_cms::config::DbConfig;
use portfolio_cms::db;
use portfolio_cms::models::users::RegisterRequest;
use portfolio_cms::services::auth;
use std::env;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> ExitCode {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let mut args = env::args().skip(1);
    let arg_or_env = |arg: Option<String>, key: &str| {
        arg.or_else(|| env::var(key).ok()).unwrap_or_default()
    };
    let email = arg_or_env(args.next(), "ADMIN_EMAIL");
    let password = arg_or_env(args.next(), "ADMIN_PASSWORD");
    let mut name = arg_or_env(args.next(), "ADMIN_NAME");
    if name.trim().is_empty() {
        name = "Admin".to_string();
    }
    let req = RegisterRequest {
        email,
        password,
        name,
    };

    let db = match db::connect(&DbConfig::from_env()).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!(error = %e, "failed to connect to database");
            return ExitCode::FAILURE;
        }
    };

    let result = auth::register(&db, req).await;
    if let Err(e) = db::close(db).await {
        tracing::warn!(error = %e, "failed to close database pool");
    }

    match result {
        Ok(user) => {
            println!("created admin #{} <{}>", user.id, user.email);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e.public_message());
            ExitCode::FAILURE
        }
    }
}
