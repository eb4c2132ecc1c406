use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;

use crate::auth::middleware::ApiSession;
use crate::db;
use crate::errors::AppResult;
use crate::handlers::resource::Resource;
use crate::handlers::response::{self, ApiResponse};
use crate::models::contact::ContactRequest;
use crate::services::{contact, content, portfolio};

/// GET /api/v1/portfolio — everything the public page shows.
pub async fn get_portfolio(db: web::Data<DatabaseConnection>) -> HttpResponse {
    let data = portfolio::get_portfolio_data(db.get_ref()).await;
    response::ok("Portfolio data retrieved successfully", data)
}

/// GET /api/v1/profile
pub async fn get_profile(db: web::Data<DatabaseConnection>) -> AppResult<HttpResponse> {
    let profile = content::get_profile(db.get_ref()).await?;
    Ok(response::ok("Profile retrieved successfully", profile))
}

/// GET /api/v1/{kind}
pub async fn list<R: Resource>(db: web::Data<DatabaseConnection>) -> AppResult<HttpResponse> {
    let items = content::list::<R>(db.get_ref()).await?;
    Ok(response::ok(
        &format!("{} retrieved successfully", R::PLURAL),
        items,
    ))
}

/// GET /api/v1/{kind}/{id}
pub async fn get<R: Resource>(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let item = content::get::<R>(db.get_ref(), path.into_inner()).await?;
    Ok(response::ok(
        &format!("{} retrieved successfully", R::LABEL),
        item,
    ))
}

/// POST /api/v1/{kind} (requires a session)
pub async fn create<R: Resource>(
    _session: ApiSession,
    db: web::Data<DatabaseConnection>,
    body: web::Json<R::Input>,
) -> AppResult<HttpResponse> {
    let item = content::create::<R>(db.get_ref(), body.into_inner()).await?;
    Ok(response::created(
        &format!("{} created successfully", R::LABEL),
        item,
    ))
}

/// PUT /api/v1/{kind}/{id} (requires a session)
pub async fn update<R: Resource>(
    _session: ApiSession,
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
    body: web::Json<R::Input>,
) -> AppResult<HttpResponse> {
    let item = content::update::<R>(db.get_ref(), path.into_inner(), body.into_inner()).await?;
    Ok(response::ok(
        &format!("{} updated successfully", R::LABEL),
        item,
    ))
}

/// DELETE /api/v1/{kind}/{id} (requires a session)
pub async fn delete<R: Resource>(
    _session: ApiSession,
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    content::delete::<R>(db.get_ref(), path.into_inner()).await?;
    Ok(response::ok_empty(&format!("{} deleted successfully", R::LABEL)))
}

/// GET /api/v1/skills/category/{category}
pub async fn skills_by_category(
    db: web::Data<DatabaseConnection>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let skills = content::skills_by_category(db.get_ref(), &path.into_inner()).await?;
    Ok(response::ok("Skills retrieved successfully", skills))
}

/// POST /api/v1/contact
pub async fn submit_contact(body: web::Json<ContactRequest>) -> AppResult<HttpResponse> {
    contact::submit(&body)?;
    Ok(response::ok_empty("Contact submitted successfully"))
}

/// GET /api/v1/health
pub async fn health(db: web::Data<DatabaseConnection>) -> HttpResponse {
    match db::health_check(db.get_ref()).await {
        Ok(()) => response::ok_empty("healthy"),
        Err(e) => {
            tracing::error!(error = %e, "health check failed");
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::failure("database unavailable", None))
        }
    }
}

/// Turns JSON body errors into the standard envelope.
pub fn json_error(err: actix_web::error::JsonPayloadError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    let detail = err.to_string();
    let body = ApiResponse::<()>::failure("Invalid request body", Some(serde_json::json!(detail)));
    actix_web::error::InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
}

