use actix_web::{post, web, HttpResponse};
use sea_orm::DatabaseConnection;

use crate::config::Settings;
use crate::error::ApiError;
use crate::models::dto::{LoginRequest, SignupRequest};
use crate::services::user_service::UserService;

/// POST /signup - Créer un compte (PUBLIC)
#[post("/signup")]
pub async fn signup(
    body: web::Json<SignupRequest>,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ApiError> {
    let user = UserService::signup(db.get_ref(), body.into_inner()).await?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "message": "User created successfully",
        "user": user
    })))
}

/// POST /login - Se connecter (PUBLIC)
#[post("/login")]
pub async fn login(
    body: web::Json<LoginRequest>,
    db: web::Data<DatabaseConnection>,
    settings: web::Data<Settings>,
) -> Result<HttpResponse, ApiError> {
    let response = UserService::login(db.get_ref(), settings.get_ref(), body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

pub fn auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(signup).service(login);
}
