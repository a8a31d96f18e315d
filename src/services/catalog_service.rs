use sea_orm::*;

use crate::error::ApiError;
use crate::models::{character, planet};

/// Lecture seule du catalogue (personnages et planètes)
pub struct CatalogService;

impl CatalogService {
    pub async fn list_characters(db: &DatabaseConnection) -> Result<Vec<character::Model>, DbErr> {
        character::Entity::find()
            .order_by_asc(character::Column::Id)
            .all(db)
            .await
    }

    pub async fn get_character(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<character::Model, ApiError> {
        character::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ApiError::not_found("Character not found"))
    }

    pub async fn list_planets(db: &DatabaseConnection) -> Result<Vec<planet::Model>, DbErr> {
        planet::Entity::find()
            .order_by_asc(planet::Column::Id)
            .all(db)
            .await
    }

    pub async fn get_planet(db: &DatabaseConnection, id: i32) -> Result<planet::Model, ApiError> {
        planet::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ApiError::not_found("Planet not found"))
    }
}
