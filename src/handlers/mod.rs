pub mod admin;
pub mod api;
pub mod auth;
pub mod forms;
pub mod resource;
pub mod response;
pub mod site;

use actix_web::web;

use crate::models::experiences::Experience;
use crate::models::profile::Profile;
use crate::models::projects::Project;
use crate::models::publications::Publication;
use crate::models::skills::Skill;
use resource::Resource;

/// JSON API, mounted under `/api/v1`.
pub fn init_api_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(api::json_error));

    cfg.route("/portfolio", web::get().to(api::get_portfolio))
        .route("/health", web::get().to(api::health))
        .route("/contact", web::post().to(api::submit_contact));

    // ── Auth ──
    cfg.service(
        web::scope("/auth")
            .route("/login", web::post().to(auth::api_login))
            .route("/logout", web::post().to(auth::api_logout))
            .route("/me", web::get().to(auth::me)),
    );

    // ── Profile (single record; no list or delete) ──
    cfg.service(
        web::resource("/profile")
            .route(web::get().to(api::get_profile))
            .route(web::post().to(api::create::<Profile>)),
    );
    cfg.service(
        web::resource("/profile/{id}")
            .route(web::get().to(api::get::<Profile>))
            .route(web::put().to(api::update::<Profile>)),
    );

    cfg.service(
        web::resource("/skills/category/{category}")
            .route(web::get().to(api::skills_by_category)),
    );

    api_crud::<Experience>(cfg);
    api_crud::<Skill>(cfg);
    api_crud::<Project>(cfg);
    api_crud::<Publication>(cfg);
}

fn api_crud<R: Resource>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(format!("/{}", R::SLUG))
            .route(web::get().to(api::list::<R>))
            .route(web::post().to(api::create::<R>)),
    );
    cfg.service(
        web::resource(format!("/{}/{{id}}", R::SLUG))
            .route(web::get().to(api::get::<R>))
            .route(web::put().to(api::update::<R>))
            .route(web::delete().to(api::delete::<R>)),
    );
}

/// Public site, login pages and the admin panel.
pub fn init_site_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(site::index))
        .route("/login", web::get().to(auth::login_page))
        .route("/login", web::post().to(auth::login))
        .route("/logout", web::get().to(auth::logout_page))
        .route("/logout", web::post().to(auth::logout))
        .route("/page401", web::get().to(auth::page401));

    cfg.service(
        web::scope("/admin")
            .app_data(web::PayloadConfig::new(forms::MAX_FORM_BYTES))
            .route("/dashboard", web::get().to(admin::dashboard))
            .route("/profile", web::get().to(admin::profile_form))
            .route("/profile", web::post().to(admin::profile_save))
            .configure(admin_crud::<Experience>)
            .configure(admin_crud::<Skill>)
            .configure(admin_crud::<Project>)
            .configure(admin_crud::<Publication>),
    );
}

fn admin_crud<R: Resource>(cfg: &mut web::ServiceConfig) {
    let base = format!("/{}", R::SLUG);
    cfg.route(&base, web::get().to(admin::list::<R>))
        .route(&format!("{base}/new"), web::get().to(admin::new::<R>))
        .route(&format!("{base}/save"), web::post().to(admin::save::<R>))
        .route(&format!("{base}/{{id}}/edit"), web::get().to(admin::edit::<R>))
        .route(&format!("{base}/{{id}}/delete"), web::post().to(admin::delete::<R>));
}
