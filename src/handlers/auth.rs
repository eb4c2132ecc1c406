use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, web};
use sea_orm::DatabaseConnection;
use tera::{Context, Tera};

use crate::auth::middleware::{ApiSession, session_user};
use crate::auth::session::{SessionKeys, removal_cookie};
use crate::errors::{AppError, AppResult};
use crate::handlers::response::{self, see_other};
use crate::models::users::{LoginRequest, UserResponse};
use crate::services::auth;
use crate::views;

// ── JSON ──

/// POST /api/v1/auth/login — verify credentials and set the session cookie.
pub async fn api_login(
    db: web::Data<DatabaseConnection>,
    keys: web::Data<SessionKeys>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let user = auth::login(db.get_ref(), body.into_inner()).await?;
    let cookie = keys
        .cookie(user.id)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let mut res = response::ok("Login successful", UserResponse::from(user));
    res.add_cookie(&cookie)
        .map_err(|e| AppError::Internal(e.to_string()))?;
    Ok(res)
}

/// POST /api/v1/auth/logout
pub async fn api_logout() -> AppResult<HttpResponse> {
    let mut res = response::ok_empty("Logout successful");
    res.add_cookie(&removal_cookie())
        .map_err(|e| AppError::Internal(e.to_string()))?;
    Ok(res)
}

/// GET /api/v1/auth/me — the user behind the current session.
pub async fn me(
    session: ApiSession,
    db: web::Data<DatabaseConnection>,
) -> AppResult<HttpResponse> {
    let user = auth::get_user(db.get_ref(), session.user_id).await?;
    Ok(response::ok(
        "User retrieved successfully",
        UserResponse::from(user),
    ))
}

// ── HTML ──

/// GET /login — already logged in users go straight to the dashboard.
pub async fn login_page(req: HttpRequest, tera: web::Data<Tera>) -> HttpResponse {
    if session_user(&req).is_some() {
        return see_other("/admin/dashboard");
    }
    views::render(&tera, "login.html", &Context::new())
}

/// POST /login
pub async fn login(
    db: web::Data<DatabaseConnection>,
    keys: web::Data<SessionKeys>,
    tera: web::Data<Tera>,
    form: web::Form<LoginRequest>,
) -> HttpResponse {
    let form = form.into_inner();
    let email = form.email.clone();

    let user = match auth::login(db.get_ref(), form).await {
        Ok(user) => user,
        Err(e) => {
            let mut ctx = Context::new();
            ctx.insert("error", &e.public_message());
            ctx.insert("email", &email);
            return views::render(&tera, "login.html", &ctx);
        }
    };

    match keys.cookie(user.id) {
        Ok(cookie) => HttpResponse::SeeOther()
            .insert_header((header::LOCATION, "/admin/dashboard"))
            .cookie(cookie)
            .finish(),
        Err(e) => {
            tracing::error!(error = %e, "failed to issue session");
            HttpResponse::InternalServerError().body("Internal Server Error")
        }
    }
}

/// GET /logout — confirmation page.
pub async fn logout_page(tera: web::Data<Tera>) -> HttpResponse {
    views::render(&tera, "logout.html", &Context::new())
}

/// POST /logout
pub async fn logout() -> HttpResponse {
    tracing::info!("user logged out");
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/login"))
        .cookie(removal_cookie())
        .finish()
}

/// GET /page401
pub async fn page401(tera: web::Data<Tera>) -> HttpResponse {
    views::render_with_status(
        &tera,
        "page401.html",
        &Context::new(),
        actix_web::http::StatusCode::UNAUTHORIZED,
    )
}
