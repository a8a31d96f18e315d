use sea_orm::*;
use std::collections::{HashMap, HashSet};

use crate::error::ApiError;
use crate::models::dto::FavoriteView;
use crate::models::favorite::{self, FavoriteTarget};
use crate::models::{character, planet, users};

pub struct FavoriteService;

impl FavoriteService {
    /// Favoris d'un utilisateur, résolus en {type, id, name}, triés par id de favori
    pub async fn list_for_user(
        db: &DatabaseConnection,
        user_id: i32,
    ) -> Result<Vec<FavoriteView>, ApiError> {
        // 1. L'utilisateur doit exister
        Self::require_user(db, user_id).await?;

        // 2. Charger les lignes favorite
        let rows = favorite::Entity::find()
            .filter(favorite::Column::UserId.eq(user_id))
            .order_by_asc(favorite::Column::Id)
            .all(db)
            .await?;

        let mut targets = Vec::with_capacity(rows.len());
        for row in &rows {
            match row.target() {
                Some(target) => targets.push(target),
                None => tracing::warn!(
                    favorite_id = row.id,
                    "Skipping favorite without exactly one target"
                ),
            }
        }

        // 3. Récupérer les noms en UNE query par table, puis lookup O(1)
        let planet_ids: HashSet<i32> = targets
            .iter()
            .filter_map(|t| match t {
                FavoriteTarget::Planet(id) => Some(*id),
                FavoriteTarget::Character(_) => None,
            })
            .collect();
        let character_ids: HashSet<i32> = targets
            .iter()
            .filter_map(|t| match t {
                FavoriteTarget::Character(id) => Some(*id),
                FavoriteTarget::Planet(_) => None,
            })
            .collect();

        let planet_names: HashMap<i32, String> = if planet_ids.is_empty() {
            HashMap::new()
        } else {
            planet::Entity::find()
                .filter(planet::Column::Id.is_in(planet_ids))
                .all(db)
                .await?
                .into_iter()
                .map(|p| (p.id, p.name))
                .collect()
        };

        let character_names: HashMap<i32, String> = if character_ids.is_empty() {
            HashMap::new()
        } else {
            character::Entity::find()
                .filter(character::Column::Id.is_in(character_ids))
                .all(db)
                .await?
                .into_iter()
                .map(|c| (c.id, c.name))
                .collect()
        };

        // 4. Construire la réponse (les FK en cascade garantissent que le nom existe)
        let views = targets
            .into_iter()
            .filter_map(|target| {
                let name = match target {
                    FavoriteTarget::Planet(id) => planet_names.get(&id),
                    FavoriteTarget::Character(id) => character_names.get(&id),
                };
                name.map(|name| FavoriteView::new(target, name.clone()))
            })
            .collect();

        Ok(views)
    }

    /// Ajoute un favori après avoir vérifié l'utilisateur, la cible et l'absence de doublon.
    /// Vérifications et insertion dans la même transaction.
    pub async fn add(
        db: &DatabaseConnection,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<(favorite::Model, FavoriteView), ApiError> {
        let txn = db.begin().await?;

        Self::require_user(&txn, user_id).await?;
        let name = Self::target_name(&txn, target).await?;

        let duplicate = favorite::Entity::find()
            .filter(target.condition(user_id))
            .one(&txn)
            .await?;

        if duplicate.is_some() {
            return Err(duplicate_error(target));
        }

        // Index unique: une requête concurrente a pu insérer entre la vérification et ici
        let created = favorite::ActiveModel::for_target(user_id, target)
            .insert(&txn)
            .await
            .map_err(|e| match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => duplicate_error(target),
                _ => ApiError::Database(e),
            })?;

        txn.commit().await?;

        tracing::info!(user_id, kind = target.kind(), target_id = target.id(), "Favorite added");
        Ok((created, FavoriteView::new(target, name)))
    }

    /// Supprime la paire (user, cible) exacte, NotFound si elle n'existe pas
    pub async fn remove(
        db: &DatabaseConnection,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<(), ApiError> {
        let result = favorite::Entity::delete_many()
            .filter(target.condition(user_id))
            .exec(db)
            .await?;

        if result.rows_affected == 0 {
            return Err(ApiError::not_found("Favorite not found"));
        }

        tracing::info!(user_id, kind = target.kind(), target_id = target.id(), "Favorite removed");
        Ok(())
    }

    async fn require_user<C: ConnectionTrait>(db: &C, user_id: i32) -> Result<(), ApiError> {
        users::Entity::find_by_id(user_id)
            .one(db)
            .await?
            .map(|_| ())
            .ok_or_else(|| ApiError::not_found("User not found"))
    }

    /// Nom de la ligne du catalogue visée, NotFound si elle n'existe pas
    async fn target_name<C: ConnectionTrait>(
        db: &C,
        target: FavoriteTarget,
    ) -> Result<String, ApiError> {
        let name = match target {
            FavoriteTarget::Planet(id) => {
                planet::Entity::find_by_id(id).one(db).await?.map(|p| p.name)
            }
            FavoriteTarget::Character(id) => {
                character::Entity::find_by_id(id).one(db).await?.map(|c| c.name)
            }
        };

        name.ok_or_else(|| ApiError::not_found(format!("{} not found", label(target))))
    }
}

fn duplicate_error(target: FavoriteTarget) -> ApiError {
    ApiError::bad_request(format!("{} already in favorites", label(target)))
}

fn label(target: FavoriteTarget) -> &'static str {
    match target {
        FavoriteTarget::Planet(_) => "Planet",
        FavoriteTarget::Character(_) => "Character",
    }
}
