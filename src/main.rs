use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, web};
use dotenv::dotenv;
use portfolio_cms::auth::session::SessionKeys;
use portfolio_cms::config::AppConfig;
use portfolio_cms::uploads::FileStore;
use portfolio_cms::{db, handlers, views};
use std::io;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let config = AppConfig::from_env().map_err(io::Error::other)?;

    let db = db::connect(&config.db).await.map_err(io::Error::other)?;
    let db_data = web::Data::new(db.clone());

    let tera = views::build().map_err(io::Error::other)?;
    let tera_data = web::Data::new(tera);

    let keys_data = web::Data::new(SessionKeys::new(&config.session_secret));
    let store_data = web::Data::new(FileStore::new(&config.upload_root));
    let public_dir = config.upload_root.clone();

    let bind_addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Server running at http://{bind_addr}");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(db_data.clone())
            .app_data(tera_data.clone())
            .app_data(keys_data.clone())
            .app_data(store_data.clone())
            .service(web::scope("/api/v1").configure(handlers::init_api_routes))
            .service(Files::new("/public", &public_dir))
            .configure(handlers::init_site_routes)
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    tracing::info!("Shutting down");
    db::close(db).await.map_err(io::Error::other)
}
