use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;
use tera::{Context, Tera};

use crate::services::portfolio;
use crate::views;

/// GET / — the public portfolio page.
pub async fn index(db: web::Data<DatabaseConnection>, tera: web::Data<Tera>) -> HttpResponse {
    let data = portfolio::get_portfolio_data(db.get_ref()).await;

    let mut ctx = Context::new();
    ctx.insert("profile", &data.profile);
    ctx.insert("experiences", &data.experiences);
    ctx.insert("skills", &data.skills);
    ctx.insert("projects", &data.projects);
    ctx.insert("publications", &data.publications);
    ctx.insert("degraded", &data.degraded);
    views::render(&tera, "index.html", &ctx)
}
