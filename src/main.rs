mod config;
mod db;
mod error;
mod middleware;
mod models;
mod routes;
mod services;
mod utils;

use actix_web::{middleware::Logger, web, App, HttpServer};
use tracing_subscriber::EnvFilter;

use crate::config::Settings;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).compact().init();

    let settings = Settings::from_env().map_err(std::io::Error::other)?;

    tracing::info!("Connecting to database...");
    let db = db::establish_connection(&settings.database_url)
        .await
        .map_err(std::io::Error::other)?;
    db::ensure_schema(&db).await.map_err(std::io::Error::other)?;
    tracing::info!("Database connected");

    let bind = (settings.host.clone(), settings.port);
    tracing::info!("Starting server on http://{}:{}", bind.0, bind.1);

    let db = web::Data::new(db);
    let settings = web::Data::new(settings);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(db.clone())
            .app_data(settings.clone())
            .configure(routes::configure_routes)
    })
        .bind(bind)?
        .run()
        .await
}
