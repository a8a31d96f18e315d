use actix_web::{delete, post, web, HttpResponse};
use sea_orm::DatabaseConnection;

use crate::error::ApiError;
use crate::models::dto::FavoriteRequest;
use crate::models::favorite::FavoriteTarget;
use crate::services::favorite_service::FavoriteService;

/// POST /favorite/planet/{planet_id} - body: {"user_id": ...}
#[post("/planet/{planet_id}")]
pub async fn add_favorite_planet(
    path: web::Path<i32>,
    body: web::Json<FavoriteRequest>,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ApiError> {
    add(db.get_ref(), &body, FavoriteTarget::Planet(path.into_inner())).await
}

/// POST /favorite/people/{people_id} - body: {"user_id": ...}
#[post("/people/{people_id}")]
pub async fn add_favorite_people(
    path: web::Path<i32>,
    body: web::Json<FavoriteRequest>,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ApiError> {
    add(db.get_ref(), &body, FavoriteTarget::Character(path.into_inner())).await
}

/// DELETE /favorite/planet/{planet_id} - body: {"user_id": ...}
#[delete("/planet/{planet_id}")]
pub async fn delete_favorite_planet(
    path: web::Path<i32>,
    body: web::Json<FavoriteRequest>,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ApiError> {
    remove(db.get_ref(), &body, FavoriteTarget::Planet(path.into_inner())).await
}

/// DELETE /favorite/people/{people_id} - body: {"user_id": ...}
#[delete("/people/{people_id}")]
pub async fn delete_favorite_people(
    path: web::Path<i32>,
    body: web::Json<FavoriteRequest>,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ApiError> {
    remove(db.get_ref(), &body, FavoriteTarget::Character(path.into_inner())).await
}

async fn add(
    db: &DatabaseConnection,
    body: &FavoriteRequest,
    target: FavoriteTarget,
) -> Result<HttpResponse, ApiError> {
    let user_id = user_id_from(body)?;
    let (created, view) = FavoriteService::add(db, user_id, target).await?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "message": "Favorite added successfully",
        "favorite_id": created.id,
        "user_id": created.user_id,
        "favorite": view
    })))
}

async fn remove(
    db: &DatabaseConnection,
    body: &FavoriteRequest,
    target: FavoriteTarget,
) -> Result<HttpResponse, ApiError> {
    let user_id = user_id_from(body)?;
    FavoriteService::remove(db, user_id, target).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Favorite deleted successfully"
    })))
}

fn user_id_from(body: &FavoriteRequest) -> Result<i32, ApiError> {
    body.user_id
        .ok_or_else(|| ApiError::bad_request("Missing required field: user_id"))
}

pub fn favorite_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/favorite")
            .service(add_favorite_planet)
            .service(add_favorite_people)
            .service(delete_favorite_planet)
            .service(delete_favorite_people)
    );
}
