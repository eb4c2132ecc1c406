//! The session-protected admin panel.
//!
//! Every kind gets the same five pages (list, new, edit, save, delete),
//! driven by its [`Resource`] implementation. The profile has its own
//! single-form page.

use actix_web::{HttpRequest, HttpResponse, web};
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use sea_orm::DatabaseConnection;
use tera::{Context, Tera};

use crate::auth::middleware::AdminSession;
use crate::errors::{AppError, AppResult};
use crate::handlers::forms::{self, FormFields};
use crate::handlers::resource::Resource;
use crate::handlers::response::see_other;
use crate::models::FlashQuery;
use crate::models::profile::{Profile, ProfileRequest};
use crate::services::{content, portfolio};
use crate::uploads::FileStore;
use crate::views;

fn flash(ctx: &mut Context, query: &FlashQuery) {
    if let Some(success) = &query.success {
        ctx.insert("success", success);
    }
    if let Some(error) = &query.error {
        ctx.insert("error", error);
    }
}

/// GET /admin/dashboard
pub async fn dashboard(
    _session: AdminSession,
    db: web::Data<DatabaseConnection>,
    tera: web::Data<Tera>,
    query: web::Query<FlashQuery>,
) -> HttpResponse {
    let data = portfolio::get_portfolio_data(db.get_ref()).await;

    let mut ctx = Context::new();
    ctx.insert("stats", &portfolio::dashboard_stats(&data));
    ctx.insert("profile", &data.profile);
    flash(&mut ctx, &query);
    views::render(&tera, "admin/dashboard.html", &ctx)
}

/// GET /admin/{kind}
pub async fn list<R: Resource>(
    _session: AdminSession,
    db: web::Data<DatabaseConnection>,
    tera: web::Data<Tera>,
    query: web::Query<FlashQuery>,
) -> HttpResponse {
    let mut ctx = Context::new();
    match content::list::<R>(db.get_ref()).await {
        Ok(items) => R::list_context(items, &mut ctx),
        Err(e) => {
            R::list_context(Vec::new(), &mut ctx);
            ctx.insert("error", &e.public_message());
        }
    }
    flash(&mut ctx, &query);
    views::render(&tera, &format!("admin/{}_list.html", R::SLUG), &ctx)
}

fn render_form<R: Resource>(
    tera: &Tera,
    id: i32,
    item: &impl serde::Serialize,
    error: Option<&str>,
) -> HttpResponse {
    let mut ctx = Context::new();
    ctx.insert("id", &id);
    ctx.insert("item", item);
    if let Some(error) = error {
        ctx.insert("error", error);
    }
    R::form_context(&mut ctx);
    views::render(tera, &format!("admin/{}_form.html", R::SLUG), &ctx)
}

/// GET /admin/{kind}/new
pub async fn new<R: Resource>(_session: AdminSession, tera: web::Data<Tera>) -> HttpResponse {
    render_form::<R>(&tera, 0, &<R::Input>::default(), None)
}

/// GET /admin/{kind}/{id}/edit
pub async fn edit<R: Resource>(
    _session: AdminSession,
    db: web::Data<DatabaseConnection>,
    tera: web::Data<Tera>,
    path: web::Path<i32>,
) -> HttpResponse {
    let id = path.into_inner();
    match content::get::<R>(db.get_ref(), id).await {
        Ok(item) => render_form::<R>(&tera, id, &item, None),
        Err(e) => {
            tracing::warn!(kind = R::SLUG, id, error = %e, "edit of unavailable record");
            see_other(&format!("/admin/{}", R::SLUG))
        }
    }
}

/// Store a newly chosen image into the input's image slot.
///
/// Returns the URL the input pointed at before, so it can be removed once the
/// record is saved.
async fn attach_image<R: Resource>(
    store: &FileStore,
    form: &FormFields,
    field: &str,
    input: &mut R::Input,
) -> AppResult<Option<String>> {
    let (Some(dir), Some(file)) = (R::IMAGE_DIR, form.file(field)) else {
        return Ok(None);
    };
    let url = store.store(dir, &file.filename, &file.bytes).await?;
    Ok(R::image_slot(input).map(|slot| std::mem::replace(slot, url)))
}

/// Validate, persist and clean up replaced images.
async fn persist<R: Resource>(
    db: &DatabaseConnection,
    store: &FileStore,
    form: &FormFields,
    field: &str,
    input: &mut R::Input,
) -> AppResult<()> {
    let id = form.int("id");
    let replaced = attach_image::<R>(store, form, field, input).await?;

    let saved = if id > 0 {
        content::update::<R>(db, id, input.clone()).await.map(|_| ())
    } else {
        content::create::<R>(db, input.clone()).await.map(|_| ())
    };

    // Drop whichever file is no longer referenced.
    let stale = match (&saved, replaced) {
        (Ok(()), Some(old)) => Some(old),
        (Err(_), Some(old)) => R::image_slot(input).map(|slot| std::mem::replace(slot, old)),
        (_, None) => None,
    };
    if let Some(url) = stale.filter(|u| !u.is_empty()) {
        if let Err(e) = store.remove(&url).await {
            tracing::warn!(url = %url, error = %e, "failed to remove image");
        }
    }
    saved
}

/// POST /admin/{kind}/save
pub async fn save<R: Resource>(
    _session: AdminSession,
    req: HttpRequest,
    body: web::Bytes,
    db: web::Data<DatabaseConnection>,
    tera: web::Data<Tera>,
    store: web::Data<FileStore>,
) -> HttpResponse {
    let form = match forms::parse_multipart(&req, body).await {
        Ok(form) => form,
        Err(e) => return render_form::<R>(&tera, 0, &<R::Input>::default(), Some(&e.public_message())),
    };
    let id = form.int("id");
    let mut input = R::from_form(&form);

    match persist::<R>(db.get_ref(), &store, &form, "image", &mut input).await {
        Ok(()) => see_other(&format!("/admin/{}?success=saved", R::SLUG)),
        Err(e) => {
            log_failure(R::SLUG, &e);
            render_form::<R>(&tera, id, &input, Some(&e.public_message()))
        }
    }
}

/// POST /admin/{kind}/{id}/delete
pub async fn delete<R: Resource>(
    _session: AdminSession,
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> HttpResponse {
    match content::delete::<R>(db.get_ref(), path.into_inner()).await {
        Ok(()) => see_other(&format!("/admin/{}?success=deleted", R::SLUG)),
        Err(e) => {
            log_failure(R::SLUG, &e);
            let message = utf8_percent_encode(&e.public_message(), NON_ALPHANUMERIC).to_string();
            see_other(&format!("/admin/{}?error={message}", R::SLUG))
        }
    }
}

fn log_failure(kind: &str, e: &AppError) {
    match e {
        AppError::Database(_) | AppError::Internal(_) => {
            tracing::error!(kind, error = %e, "admin write failed")
        }
        _ => tracing::debug!(kind, error = %e, "admin write rejected"),
    }
}

// ── Profile ──

/// GET /admin/profile
pub async fn profile_form(
    _session: AdminSession,
    db: web::Data<DatabaseConnection>,
    tera: web::Data<Tera>,
    query: web::Query<FlashQuery>,
) -> HttpResponse {
    let mut ctx = Context::new();
    match content::get_profile(db.get_ref()).await {
        Ok(profile) => {
            ctx.insert("id", &profile.id);
            ctx.insert("item", &profile);
        }
        Err(e) => {
            if !matches!(e, AppError::NotFound(_)) {
                ctx.insert("error", &e.public_message());
            }
            ctx.insert("id", &0);
            ctx.insert("item", &ProfileRequest::default());
        }
    }
    flash(&mut ctx, &query);
    views::render(&tera, "admin/profile_form.html", &ctx)
}

/// POST /admin/profile
pub async fn profile_save(
    _session: AdminSession,
    req: HttpRequest,
    body: web::Bytes,
    db: web::Data<DatabaseConnection>,
    tera: web::Data<Tera>,
    store: web::Data<FileStore>,
) -> HttpResponse {
    let render = |id: i32, item: &ProfileRequest, error: &str| {
        let mut ctx = Context::new();
        ctx.insert("id", &id);
        ctx.insert("item", item);
        ctx.insert("error", error);
        views::render(&tera, "admin/profile_form.html", &ctx)
    };

    let form = match forms::parse_multipart(&req, body).await {
        Ok(form) => form,
        Err(e) => return render(0, &ProfileRequest::default(), &e.public_message()),
    };
    let id = form.int("id");
    let mut input = Profile::from_form(&form);

    match persist::<Profile>(db.get_ref(), &store, &form, "photo", &mut input).await {
        Ok(()) => see_other("/admin/profile?success=saved"),
        Err(e) => {
            log_failure(Profile::SLUG, &e);
            render(id, &input, &e.public_message())
        }
    }
}
