pub mod auth;
pub mod catalog;
pub mod favorites;
pub mod health;
pub mod users;

use actix_web::web;

use crate::error::ApiError;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config())
        .service(health::health_check)
        .configure(catalog::people_routes)
        .configure(catalog::planets_routes)
        .configure(users::users_routes)
        .configure(auth::auth_routes)
        .configure(favorites::favorite_routes);
}

// Corps JSON invalide ou absent => 400 {"error": ...} au lieu de la réponse texte d'Actix
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        ApiError::bad_request(format!("Invalid JSON body: {}", err)).into()
    })
}

// /people/abc => 400
fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        ApiError::bad_request(format!("Invalid path parameter: {}", err)).into()
    })
}
