use actix_web::{get, web, HttpResponse};
use sea_orm::DatabaseConnection;

use crate::config::Settings;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::services::ensure_not_empty;
use crate::services::favorite_service::FavoriteService;
use crate::services::user_service::UserService;

/// GET /users - Tous les utilisateurs (sans mot de passe)
#[get("")]
pub async fn list_users(
    db: web::Data<DatabaseConnection>,
    settings: web::Data<Settings>,
) -> Result<HttpResponse, ApiError> {
    let users = UserService::list_users(db.get_ref()).await?;
    let users = ensure_not_empty(users, settings.empty_list_not_found, || {
        ApiError::not_found("No users found")
    })?;

    Ok(HttpResponse::Ok().json(users))
}

/// GET /users/favorites - Favoris de l'utilisateur du token (PROTÉGÉE)
#[get("/favorites")]
pub async fn list_favorites(
    auth_user: AuthUser,
    db: web::Data<DatabaseConnection>,
    settings: web::Data<Settings>,
) -> Result<HttpResponse, ApiError> {
    tracing::debug!(user_id = auth_user.user_id, email = %auth_user.email, "Listing favorites");

    let favorites = FavoriteService::list_for_user(db.get_ref(), auth_user.user_id).await?;
    let favorites = ensure_not_empty(favorites, settings.empty_list_not_found, || {
        ApiError::Empty("No favorites found for this user.".to_string())
    })?;

    Ok(HttpResponse::Ok().json(favorites))
}

pub fn users_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .service(list_users)
            .service(list_favorites)
    );
}
